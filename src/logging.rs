//! Logging configuration for Salon Manager
//!
//! Logs go to the terminal and to `salon-manager.log` in the per-user log
//! directory (`~/Library/Logs/Salon-Manager/` on macOS). Setting
//! `SALON_MANAGER_LOG` to a level name (`trace`, `debug`, `warn`, ...) applies
//! that level to both outputs.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

const APP_LOG_DIR: &str = "Salon-Manager";
const LOG_FILE: &str = "salon-manager.log";
const OLD_LOG_FILE: &str = "salon-manager.log.old";
/// Logs larger than this are rotated at startup
const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;
const LEVEL_ENV: &str = "SALON_MANAGER_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogLevels {
    terminal: LevelFilter,
    file: LevelFilter,
}

impl LogLevels {
    /// Info on the terminal and debug in the file, unless overridden
    fn from_env(value: Option<&str>) -> Self {
        match value.and_then(|v| v.trim().parse::<LevelFilter>().ok()) {
            Some(level) => Self {
                terminal: level,
                file: level,
            },
            None => Self {
                terminal: LevelFilter::Info,
                file: LevelFilter::Debug,
            },
        }
    }
}

/// On macOS: ~/Library/Logs/Salon-Manager/
fn log_directory() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Logs").join(APP_LOG_DIR))
    } else {
        dirs::data_local_dir().map(|d| d.join(APP_LOG_DIR).join("logs"))
    }
}

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Initialize terminal and file logging
///
/// Falls back to the terminal alone when the log file cannot be opened.
pub fn init_logging() {
    let levels = LogLevels::from_env(std::env::var(LEVEL_ENV).ok().as_deref());
    let config = log_config();
    let terminal = TermLogger::new(
        levels.terminal,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let log_file = log_directory()
        .ok_or_else(|| "Could not determine log directory".to_string())
        .and_then(|dir| open_log_file(&dir));

    match log_file {
        Ok((file, path)) => {
            let loggers: Vec<Box<dyn SharedLogger>> =
                vec![terminal, WriteLogger::new(levels.file, config, file)];
            if CombinedLogger::init(loggers).is_err() {
                eprintln!("Warning: Logger already initialized");
                return;
            }
            log::info!("=== Salon Manager session started ===");
            log::info!("Log file: {}", path.display());
        }
        Err(e) => {
            if CombinedLogger::init(vec![terminal]).is_err() {
                eprintln!("Warning: Logger already initialized");
                return;
            }
            log::warn!("File logging disabled: {}", e);
        }
    }
}

/// Create the log directory, rotate an oversized log and open it for append
fn open_log_file(log_dir: &Path) -> Result<(File, PathBuf), String> {
    fs::create_dir_all(log_dir)
        .map_err(|e| format!("Could not create log directory: {}", e))?;

    let log_path = log_dir.join(LOG_FILE);
    rotate_if_large(log_dir, &log_path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| format!("Could not open log file: {}", e))?;
    Ok((file, log_path))
}

/// Move the log aside once it exceeds `MAX_LOG_BYTES`
fn rotate_if_large(log_dir: &Path, log_path: &Path) -> bool {
    match fs::metadata(log_path) {
        Ok(metadata) if metadata.len() > MAX_LOG_BYTES => {
            fs::rename(log_path, log_dir.join(OLD_LOG_FILE)).is_ok()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_names_the_app() {
        let dir = log_directory().unwrap();
        assert!(
            dir.to_string_lossy().contains("Salon-Manager"),
            "Path should contain app name"
        );
    }

    #[test]
    fn test_levels_from_env() {
        let defaults = LogLevels::from_env(None);
        assert_eq!(defaults.terminal, LevelFilter::Info);
        assert_eq!(defaults.file, LevelFilter::Debug);

        let trace = LogLevels::from_env(Some("trace"));
        assert_eq!(trace.terminal, LevelFilter::Trace);
        assert_eq!(trace.file, LevelFilter::Trace);

        assert_eq!(LogLevels::from_env(Some(" WARN ")).file, LevelFilter::Warn);
        assert_eq!(LogLevels::from_env(Some("loud")), defaults);
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");

        let (_file, path) = open_log_file(&log_dir).unwrap();
        assert_eq!(path, log_dir.join(LOG_FILE));
        assert!(path.exists());
    }

    #[test]
    fn test_rotate_if_large() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join(LOG_FILE);

        fs::write(&log_path, "small").unwrap();
        assert!(!rotate_if_large(temp_dir.path(), &log_path));
        assert!(log_path.exists());

        let file = fs::File::create(&log_path).unwrap();
        file.set_len(MAX_LOG_BYTES + 1).unwrap();
        assert!(rotate_if_large(temp_dir.path(), &log_path));
        assert!(!log_path.exists());
        assert!(temp_dir.path().join(OLD_LOG_FILE).exists());
    }
}
