pub mod config_service;
pub mod paths;
pub mod storage;
pub mod upload_file;

pub use crate::config_service::ConfigService;
pub use crate::paths::DeskPaths;
pub use crate::storage::{FileLocalStorage, InMemoryLocalStorage};
pub use crate::upload_file::read_upload_file;
