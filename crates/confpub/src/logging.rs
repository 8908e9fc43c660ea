//! Diagnostic log setup.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::output::Output;

/// Initialize tracing.
///
/// `-verbose` enables DEBUG level, otherwise `RUST_LOG` is used with INFO as
/// the default. With a log file, output is appended to it without colors; if
/// the file cannot be opened the error is reported and logs go to stdout.
pub(crate) fn init(verbose: bool, log_file: Option<&Path>, output: &Output) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
    };

    let file = log_file.and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(e) => {
            output.error(&format!("Error opening log file {}: {e}", path.display()));
            None
        }
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match file {
        Some(file) => builder.with_writer(Mutex::new(file)).with_ansi(false).init(),
        None => builder.with_writer(std::io::stdout).init(),
    }
}

/// Open `path` for appending, creating it if needed.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("confpub.log");
        std::fs::write(&path, "first run\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"second run\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "first run\nsecond run\n"
        );
    }

    #[test]
    fn test_open_log_file_creates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_log_file(&dir.path().join("nope/confpub.log")).is_err());
    }
}
