mod chat;
mod message;
mod screen_state;
mod user;

pub use chat::Chat;
pub use message::Message;
pub use screen_state::{ChatsSnapshot, ScreenState};
pub use user::User;
