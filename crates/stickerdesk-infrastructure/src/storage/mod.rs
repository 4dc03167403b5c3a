//! Storage layer: atomic files and the durable key/value stores built on them.

mod atomic_json;
mod file_local_storage;
mod memory_local_storage;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use file_local_storage::FileLocalStorage;
pub use memory_local_storage::InMemoryLocalStorage;
