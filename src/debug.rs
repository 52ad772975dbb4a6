// Debug logging for ASCII Pong
// Routes tracing output to a file when --debug is passed, since the TUI owns stdout

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const LOG_FILE_NAME: &str = "ascii-pong-debug.log";

/// Where the debug log is written
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Initialize debug logging to file
///
/// With `enabled == false` no subscriber is installed and every tracing
/// macro is a no-op. Otherwise the log file is truncated and receives
/// events at DEBUG and above.
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_path();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!(path = %path.display(), "debug logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_creates_nothing() {
        assert!(init(false).is_ok());
    }

    #[test]
    fn test_log_path_in_temp_dir() {
        let path = log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(LOG_FILE_NAME));
    }
}
