//! Local append-only file sink.

use std::fs::{DirBuilder, File, OpenOptions};
use std::panic::Location;
use std::path::{is_separator, Path};

use crate::client::error::{LogError, LogResult};
use crate::client::level::LogLevel;
use crate::client::line::LineLogger;
use crate::observability::metrics;

const DIR_MODE: u32 = 0o766;
const FILE_MODE: u32 = 0o644;

/// Append one line for `message` to the file at `target`.
///
/// An empty target is a successful no-op. Missing parent directories are
/// created first; a failure there is only printed to `console`, so the
/// subsequent open failure is what the caller sees.
pub(crate) fn save_to_log_file(
    file_logger: &LineLogger,
    console: &LineLogger,
    target: &str,
    level: LogLevel,
    message: &str,
    location: &Location<'_>,
) -> LogResult<()> {
    if target.is_empty() {
        return Ok(());
    }

    let path = Path::new(target);
    verify_log_directory(console, target);

    let file = open_append(path).map_err(|source| {
        console.print_plain(&format!("Error opening log file: {}", source));
        LogError::OpenFile {
            path: path.to_path_buf(),
            source,
        }
    })?;

    file_logger
        .println_to(Box::new(file), &level.prefix(), message, location)
        .map_err(|source| LogError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;

    metrics::record_entry(level, metrics::SINK_FILE);
    Ok(())
}

/// Create the directory part of `target` if it does not exist yet.
fn verify_log_directory(console: &LineLogger, target: &str) {
    let dir = match log_directory(target) {
        Some(dir) => Path::new(dir),
        None => return,
    };
    if dir.exists() {
        return;
    }

    console.print_plain(&format!("Creating directory: {}", dir.display()));
    if let Err(e) = create_dir(dir) {
        console.print_plain(&format!("Error creating log directory: {}", e));
        tracing::warn!(dir = %dir.display(), error = %e, "Failed to create log directory");
    }
}

/// Everything up to the last separator, minus trailing separators.
///
/// A target that itself ends in a separator yields the whole target, so
/// `/var/log/app/` maps to `/var/log/app`.
fn log_directory(target: &str) -> Option<&str> {
    let split = target.rfind(is_separator)?;
    let dir = target[..split].trim_end_matches(is_separator);
    (!dir.is_empty()).then_some(dir)
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    DirBuilder::new().recursive(true).mode(DIR_MODE).create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> std::io::Result<()> {
    DirBuilder::new().recursive(true).create(dir)
}

#[cfg(unix)]
fn open_append(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .append(true)
        .create(true)
        .mode(FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::line::LineFlags;

    fn loggers() -> (LineLogger, LineLogger) {
        (
            LineLogger::unbound(LineFlags::STANDARD),
            LineLogger::unbound(LineFlags::NONE),
        )
    }

    #[test]
    fn test_empty_target_is_noop() {
        let (file_logger, console) = loggers();
        let result = save_to_log_file(
            &file_logger,
            &console,
            "",
            LogLevel::Info,
            "x",
            Location::caller(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_log_directory() {
        assert_eq!(log_directory("/var/log/app.log"), Some("/var/log"));
        assert_eq!(log_directory("/var/log/app/"), Some("/var/log/app"));
        assert_eq!(log_directory("/var/log//app.log"), Some("/var/log"));
        assert_eq!(log_directory("/app.log"), None);
        assert_eq!(log_directory("app.log"), None);
    }

    #[test]
    fn test_trailing_separator_creates_target_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = format!("{}/logs/", dir.path().display());
        let (file_logger, console) = loggers();

        let err = save_to_log_file(
            &file_logger,
            &console,
            &target,
            LogLevel::Warn,
            "dir",
            Location::caller(),
        )
        .unwrap_err();

        assert!(dir.path().join("logs").is_dir());
        assert!(matches!(err, LogError::OpenFile { .. }));
    }

    #[test]
    fn test_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("flat.log");
        let (file_logger, console) = loggers();

        save_to_log_file(
            &file_logger,
            &console,
            target.to_str().unwrap(),
            LogLevel::Error,
            "boom",
            Location::caller(),
        )
        .unwrap();

        let contents = std::fs::read_to_string(&target).unwrap();
        assert!(contents.starts_with("ERROR: "));
        assert!(contents.contains("file_sink.rs:"));
        assert!(contents.trim_end().ends_with("boom"));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("mode.log");
        let (file_logger, console) = loggers();
        save_to_log_file(
            &file_logger,
            &console,
            target.to_str().unwrap(),
            LogLevel::Info,
            "m",
            Location::caller(),
        )
        .unwrap();

        let mode = std::fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        // umask may only clear bits
        assert_eq!(mode & !FILE_MODE, 0);
    }
}
