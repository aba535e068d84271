//! Discrete user intents parsed from input lines.

use items_core::ItemId;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  name <text>                  set the item name field
  description <text>           set the item description field (alias: desc)
  submit                       add the item in the form
  add <name> [| <description>] fill the form and add the item
  delete <id>                  delete an item after confirmation (alias: rm)
  refresh                      reload the item list
  health                       re-check the backend connection
  help                         show this summary
  quit                         exit (alias: exit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetName(String),
    SetDescription(String),
    Submit,
    Add { name: String, description: String },
    Delete(ItemId),
    Refresh,
    Health,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{0}` needs an item id")]
    MissingId(String),

    #[error("`{0}` is not a valid item id")]
    InvalidId(String),
}

impl Intent {
    /// Parse one input line. Blank lines are `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, IntentError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let intent = match command.to_ascii_lowercase().as_str() {
            "name" => Intent::SetName(rest.to_string()),
            "description" | "desc" => Intent::SetDescription(rest.to_string()),
            "submit" => Intent::Submit,
            "add" => {
                let (name, description) = rest.split_once('|').unwrap_or((rest, ""));
                Intent::Add {
                    name: name.trim().to_string(),
                    description: description.trim().to_string(),
                }
            }
            "delete" | "rm" => Intent::Delete(parse_id(command, rest)?),
            "refresh" => Intent::Refresh,
            "health" => Intent::Health,
            "help" | "?" => Intent::Help,
            "quit" | "exit" => Intent::Quit,
            _ => return Err(IntentError::UnknownCommand(command.to_string())),
        };
        Ok(Some(intent))
    }
}

fn parse_id(command: &str, raw: &str) -> Result<ItemId, IntentError> {
    if raw.is_empty() {
        return Err(IntentError::MissingId(command.to_string()));
    }
    raw.parse().map_err(|_| IntentError::InvalidId(raw.to_string()))
}
