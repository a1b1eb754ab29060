use serde::{Deserialize, Serialize};

use super::user::User;

/// Summary of the most recent message in a chat.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    /// Display string, never parsed.
    pub date: String,
    pub is_read: bool,
    pub author: User,
}
