pub mod auth;
pub mod console;
pub mod context;
pub mod stickers;
