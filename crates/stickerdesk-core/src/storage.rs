//! Durable client-side key/value storage port.

use crate::error::Result;

/// String key/value storage that survives restarts, like a browser's
/// `localStorage`.
///
/// Implementations must make `set_item` durable before returning. Removing a
/// key that does not exist is not an error.
pub trait LocalStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}
