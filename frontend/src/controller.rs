//! Mutation controller: validated create and confirmed delete.
//!
//! Each operation is one request/response exchange with a fixed success and
//! failure branch. Success refreshes the item list; failure is reported to
//! the user and leaves the display alone. Nothing is retried.

use items_core::{ClientError, ItemId};
use tracing::{debug, error, info};

use crate::adapter::Api;
use crate::form::ItemForm;
use crate::prompt::Prompt;
use crate::sync::ItemStoreSync;

pub const NAME_REQUIRED: &str = "Please enter an item name";
pub const ADD_FALLBACK: &str = "Failed to add item";
pub const ADD_UNREACHABLE: &str = "Failed to add item. Please check backend connection.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this item?";
pub const DELETE_FAILED: &str = "Failed to delete item";
pub const DELETE_UNREACHABLE: &str = "Failed to delete item. Please check backend connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The backend accepted the change and a sync cycle ran.
    Applied,
    /// Input failed validation; no request was sent.
    Invalid,
    /// The user declined the confirmation; no request was sent.
    Declined,
    /// The request failed and the user was told.
    Failed,
}

#[derive(Clone)]
pub struct MutationController {
    api: Api,
    sync: ItemStoreSync,
}

impl MutationController {
    pub fn new(api: Api, sync: ItemStoreSync) -> Self {
        Self { api, sync }
    }

    /// Submit the form as a new item. The form is cleared only on success.
    pub async fn add_item<P: Prompt>(&self, form: &mut ItemForm, prompt: &mut P) -> MutationOutcome {
        let input = match form.to_new_item() {
            Ok(input) => input,
            Err(err) => {
                debug!(%err, "add rejected by validation");
                prompt.alert(NAME_REQUIRED);
                return MutationOutcome::Invalid;
            }
        };

        match self.api.create_item(&input).await {
            Ok(()) => {
                info!(name = input.name(), "item added");
                form.reset();
                self.sync.load_items().await;
                MutationOutcome::Applied
            }
            Err(ClientError::Api(err)) => {
                error!(%err, "backend rejected new item");
                let message = err.server_message().unwrap_or_else(|| ADD_FALLBACK.to_string());
                prompt.alert(&format!("Error: {message}"));
                MutationOutcome::Failed
            }
            Err(ClientError::Transport(err)) => {
                error!(%err, "failed to add item");
                prompt.alert(ADD_UNREACHABLE);
                MutationOutcome::Failed
            }
        }
    }

    /// Delete `id` after the user confirms. There is no undo.
    pub async fn delete_item<P: Prompt>(&self, id: ItemId, prompt: &mut P) -> MutationOutcome {
        if !prompt.confirm(CONFIRM_DELETE).await {
            debug!(id, "delete declined");
            return MutationOutcome::Declined;
        }

        match self.api.delete_item(id).await {
            Ok(()) => {
                info!(id, "item deleted");
                self.sync.load_items().await;
                MutationOutcome::Applied
            }
            Err(ClientError::Api(err)) => {
                error!(id, %err, "backend refused delete");
                prompt.alert(DELETE_FAILED);
                MutationOutcome::Failed
            }
            Err(ClientError::Transport(err)) => {
                error!(id, %err, "failed to delete item");
                prompt.alert(DELETE_UNREACHABLE);
                MutationOutcome::Failed
            }
        }
    }
}
