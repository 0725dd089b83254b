//! Tracing subscriber setup.
//!
//! Events always go to the console. When a log directory is configured, they
//! are also written as JSON lines to `all.log`, with errors duplicated into
//! `error.log`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

const DEFAULT_FILTER: &str = "notes_server=debug,notes_core=debug,tower_http=debug";
pub const ALL_LOG: &str = "all.log";
pub const ERROR_LOG: &str = "error.log";

pub fn init(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let file_layers = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let all = open_log_file(&dir.join(ALL_LOG))?;
            let errors = open_log_file(&dir.join(ERROR_LOG))?;

            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(all))
                    .and_then(
                        fmt::layer()
                            .json()
                            .with_writer(Mutex::new(errors))
                            .with_filter(LevelFilter::ERROR),
                    ),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
        ))
        .with(fmt::layer())
        .with(file_layers)
        .try_init()?;

    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_json_lines_and_splits_errors() {
        let dir = tempfile::tempdir().unwrap();
        init(Some(dir.path())).unwrap();

        tracing::info!("note created");
        tracing::error!("database unreachable");

        let all = fs::read_to_string(dir.path().join(ALL_LOG)).unwrap();
        let errors = fs::read_to_string(dir.path().join(ERROR_LOG)).unwrap();

        assert!(errors.contains("database unreachable"));
        assert!(!errors.contains("note created"));
        assert!(all.contains("database unreachable"));

        let line = errors.lines().next().unwrap();
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["level"], "ERROR");
    }

    #[test]
    fn open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ALL_LOG);

        fs::write(&path, "first\n").unwrap();
        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
