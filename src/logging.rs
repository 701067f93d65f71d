//! Opt-in file logging.
//!
//! Off by default: writing to stderr would corrupt the TUI. Set `KARIBU_LOG`
//! to a file path to enable it; `RUST_LOG` filters (default `info`).

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "KARIBU_LOG";

/// Unique log file name: `{base}.{timestamp}.{pid}`, so concurrent runs never share a file.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Install the global subscriber if `KARIBU_LOG` is set.
///
/// Returns the path actually written to, or None when logging stays off.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV)?;

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(Path::new(&base), timestamp, std::process::id());

    let file = match File::create(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: failed to create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        let path = unique_log_path(Path::new("/tmp/karibu.log"), 1700000000, 42);
        assert_eq!(path, PathBuf::from("/tmp/karibu.log.1700000000.42"));
    }

    #[test]
    fn unique_path_is_creatable_next_to_base() {
        let dir = tempfile::tempdir().unwrap();
        let path = unique_log_path(&dir.path().join("run.log"), 1, 2);
        File::create(&path).expect("log file should be creatable");
        assert!(path.exists());
        assert_eq!(path.parent(), Some(dir.path()));
    }
}
