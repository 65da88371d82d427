//! Shared helpers for terminal output and file persistence

pub mod format;
pub mod io;
pub mod styles;

pub use format::{format_currency, format_millions, format_percent_change, format_signed_currency};
pub use io::atomic_write;
pub use styles::Palette;
