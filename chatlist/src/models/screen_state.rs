use serde::{Deserialize, Serialize};

use super::chat::Chat;
use super::user::User;

/// Data shown once the chat list has loaded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatsSnapshot {
    pub current_user: User,
    pub filters: Vec<String>,
    pub chats: Vec<Chat>,
}

/// Lifecycle of the chat list screen.
///
/// Starts as `Loading` and moves to `Success` exactly once.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScreenState {
    #[default]
    Loading,
    Success(ChatsSnapshot),
}

impl ScreenState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScreenState::Success(_))
    }

    pub fn snapshot(&self) -> Option<&ChatsSnapshot> {
        match self {
            ScreenState::Loading => None,
            ScreenState::Success(snapshot) => Some(snapshot),
        }
    }
}
