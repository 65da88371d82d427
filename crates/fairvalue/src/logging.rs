//! File logging under the data directory
//!
//! The menu owns stdout, so every event goes to `<data_dir>/fairvalue.log`.
//! The file is trimmed to its most recent lines at startup once it grows past
//! 5 MB. `RUST_LOG` replaces the default filter.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

use crate::util::atomic_write;

/// Log file name inside the data directory
pub const LOG_FILE: &str = "fairvalue.log";

const TRIM_MARKER: &str = "--- older entries trimmed ---\n";

/// When and how far the log is trimmed
#[derive(Debug, Clone, Copy)]
struct Rotation {
    /// Size past which the file is trimmed
    max_bytes: u64,
    /// Tail kept after trimming
    keep_bytes: u64,
}

impl Rotation {
    const STARTUP: Rotation = Rotation {
        max_bytes: 5 * 1024 * 1024,
        keep_bytes: 1024 * 1024,
    };

    /// Cut `path` down to its last whole lines if it is over the limit.
    ///
    /// Returns whether the file was rewritten.
    fn apply(self, path: &Path) -> io::Result<bool> {
        let len = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err),
        };
        if len <= self.max_bytes {
            return Ok(false);
        }

        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(self.keep_bytes)))?;
        let mut tail = Vec::new();
        file.read_to_end(&mut tail)?;
        drop(file);

        // The seek usually lands mid-line
        let tail = String::from_utf8_lossy(&tail);
        let whole_lines = tail.split_once('\n').map_or("", |(_, rest)| rest);

        atomic_write(path, &format!("{TRIM_MARKER}{whole_lines}"))?;
        Ok(true)
    }
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("fairvalue={level},fairvalue_core=warn"))
}

/// Send `tracing` output to the log file in `data_dir` and return its path.
///
/// `level` sets the app's own verbosity; the engine stays at `warn` unless
/// `RUST_LOG` says otherwise.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE);

    let trimmed = Rotation::STARTUP.apply(&log_path).unwrap_or_else(|err| {
        eprintln!("Warning: could not trim {}: {err}", log_path.display());
        false
    });

    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("Failed to install log subscriber: {err}"))?;

    tracing::info!(path = %log_path.display(), trimmed, "Logging initialized");
    Ok(log_path)
}
