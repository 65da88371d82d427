//! On-disk data: user configuration, saved sessions, and the directory that holds them

pub mod config;
pub mod state;
pub mod storage;

pub use config::AppConfig;
pub use state::SavedState;
pub use storage::{DataDirectory, StorageError};
