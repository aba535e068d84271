//! Pure rendering of an item sequence into a display tree.
//!
//! # Design
//! [`render`] always rebuilds the whole [`View`] from its input; there is no
//! diffing and no retained identity between renders. User-supplied text can
//! only enter a `View` as [`SafeText`], which is produced by the sanitizer,
//! so every presentation of a `View` is free of injected markup or terminal
//! control sequences.

use std::fmt;

use crate::types::{Item, ItemId};

pub const EMPTY_MESSAGE: &str = "No items yet. Add one above!";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load items. Please check backend connection.";

/// Text that has been through the sanitizer.
///
/// Control characters are removed (line breaks and tabs become spaces).
/// The HTML presentation escapes markup characters on top of that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeText(String);

impl SafeText {
    pub fn sanitize(raw: &str) -> Self {
        let text = raw
            .chars()
            .filter_map(|c| match c {
                '\n' | '\r' | '\t' => Some(' '),
                c if c.is_control() => None,
                c => Some(c),
            })
            .collect();
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_html(&self) -> String {
        escape_html(&self.0)
    }
}

impl fmt::Display for SafeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape the five characters that are significant in HTML text and
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// One displayed item with its delete action bound to `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: ItemId,
    pub name: SafeText,
    pub description: Option<SafeText>,
}

/// Content of the item list region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Empty,
    LoadFailed,
    Cards(Vec<Card>),
}

/// Map an ordered item sequence to its display tree.
pub fn render(items: &[Item]) -> View {
    if items.is_empty() {
        return View::Empty;
    }
    View::Cards(
        items
            .iter()
            .map(|item| Card {
                id: item.id,
                name: SafeText::sanitize(&item.name),
                description: item.description().map(SafeText::sanitize),
            })
            .collect(),
    )
}

impl View {
    /// Cards in display order; empty for the placeholder and error states.
    pub fn cards(&self) -> &[Card] {
        match self {
            View::Cards(cards) => cards,
            View::Empty | View::LoadFailed => &[],
        }
    }

    /// Markup for the inside of the `itemsList` element.
    pub fn to_html(&self) -> String {
        match self {
            View::Empty => format!(r#"<p class="empty">{EMPTY_MESSAGE}</p>"#),
            View::LoadFailed => format!(r#"<div class="error">{LOAD_ERROR_MESSAGE}</div>"#),
            View::Cards(cards) => cards.iter().map(Card::to_html).collect(),
        }
    }
}

impl Card {
    fn to_html(&self) -> String {
        let description = self
            .description
            .as_ref()
            .map(|d| format!("<p>{}</p>", d.to_html()))
            .unwrap_or_default();
        format!(
            r#"<div class="item-card"><div class="item-info"><h3>{}</h3>{description}</div><button class="delete-btn" onclick="deleteItem({})">Delete</button></div>"#,
            self.name.to_html(),
            self.id,
        )
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Empty => writeln!(f, "  {EMPTY_MESSAGE}"),
            View::LoadFailed => writeln!(f, "  {LOAD_ERROR_MESSAGE}"),
            View::Cards(cards) => {
                for card in cards {
                    match &card.description {
                        Some(description) => writeln!(f, "  [{}] {} - {description}", card.id, card.name)?,
                        None => writeln!(f, "  [{}] {}", card.id, card.name)?,
                    }
                }
                Ok(())
            }
        }
    }
}
