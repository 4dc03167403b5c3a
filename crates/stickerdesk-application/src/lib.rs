//! Application layer for stickerdesk.
//!
//! Use cases that coordinate the core ports: the paginated sticker list, the
//! persisted session and the admin auth client.

pub mod auth_client;
pub mod notifier;
pub mod session_store;
pub mod sticker_list_controller;

pub use auth_client::CustomAuthClient;
pub use notifier::{ChannelNotifier, TracingNotifier};
pub use session_store::SessionStore;
pub use sticker_list_controller::StickerListController;
