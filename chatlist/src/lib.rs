//! Chat list screen state for a WhatsApp-like prototype.
//!
//! [`MockDataProvider`] synthesizes the user, filters and chats.
//! [`ChatListStateController`] publishes `Loading`, waits a random delay,
//! then publishes `Success` with the generated data.

pub mod config;
pub mod controller;
mod error;
pub mod mock;
pub mod models;

pub use config::{AvatarExhaustion, ChatListConfig, LoadConfig, MockDataConfig, DEFAULT_CHAT_COUNT};
pub use controller::{ChatListStateController, StateSubscription};
pub use error::{Error, Result};
pub use mock::MockDataProvider;
pub use models::{Chat, ChatsSnapshot, Message, ScreenState, User};
