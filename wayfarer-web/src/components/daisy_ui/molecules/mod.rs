pub mod card;
pub mod chat;

pub use card::{Card, CardProps};
pub use chat::{Chat, ChatPosition, ChatProps};
