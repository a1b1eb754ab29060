use serde::{Deserialize, Serialize};

use super::message::Message;
use super::user::User;

/// One conversation row in the chat list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Chat {
    /// Avatar URL. Renderers substitute a placeholder when absent.
    pub avatar: Option<String>,
    pub name: String,
    pub last_message: Message,
    pub unread_count: u32,
}

impl Chat {
    pub fn has_avatar(&self) -> bool {
        self.avatar.is_some()
    }

    /// First character of the chat name, used by avatar placeholders.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().find(|c| !c.is_whitespace())
    }

    /// Whether the last message was written by `viewer`
    pub fn is_own_last_message(&self, viewer: &User) -> bool {
        self.last_message.author == *viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(name: &str, author: &str) -> Chat {
        Chat {
            avatar: None,
            name: name.to_string(),
            last_message: Message {
                text: "Lorem ipsum".to_string(),
                date: "21/21/4241".to_string(),
                is_read: true,
                author: User::new(author),
            },
            unread_count: 2,
        }
    }

    #[test]
    fn test_initial_skips_leading_whitespace() {
        assert_eq!(chat("  Lorem", "Joao").initial(), Some('L'));
        assert_eq!(chat("", "Joao").initial(), None);
    }

    #[test]
    fn test_own_last_message() {
        let viewer = User::new("Joao");
        assert!(chat("Lorem", "Joao").is_own_last_message(&viewer));
        assert!(!chat("Lorem", "Pepzin").is_own_last_message(&viewer));
    }

    #[test]
    fn test_missing_avatar_is_valid() {
        let mut c = chat("Lorem", "Joao");
        assert!(!c.has_avatar());
        c.avatar = Some("https://example.com/a.png".to_string());
        assert!(c.has_avatar());
    }
}
