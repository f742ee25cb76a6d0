//! Log file path resolution
//!
//! Turns the user's requested file name (or none) into the path the file
//! sink opens. Names are validated, a `_YYYYMMDD` date suffix is optionally
//! inserted before the extension, and `.log` is supplied when the name has
//! no extension of its own.

use super::error::{LoggerError, Result};
use chrono::{Local, NaiveDate};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "log";
pub const DEFAULT_FILE_EXTENSION: &str = ".log";

const WINDOWS_INVALID_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];
const WINDOWS_RESERVED_NAMES: &[&str] = &["CON", "PRN", "AUX", "NUL"];

/// Resolve a log file path using today's local date for the suffix
///
/// # Examples
///
/// ```
/// use tidy_logger::resolve_log_path;
/// use std::path::Path;
///
/// let path = resolve_log_path(Some(Path::new("logs/app.txt")), false).unwrap();
/// assert_eq!(path, Path::new("logs/app.txt"));
///
/// let path = resolve_log_path(Some(Path::new("app")), false).unwrap();
/// assert_eq!(path, Path::new("app.log"));
/// ```
///
/// # Errors
///
/// Returns [`LoggerError::InvalidFileName`] if the name is empty, contains a
/// null byte, or (on Windows) contains invalid characters or a reserved
/// device name.
pub fn resolve_log_path(file_name: Option<&Path>, add_date_suffix: bool) -> Result<PathBuf> {
    resolve_log_path_on(file_name, add_date_suffix, Local::now().date_naive())
}

/// Same as [`resolve_log_path`] with an explicit date for the suffix
pub fn resolve_log_path_on(
    file_name: Option<&Path>,
    add_date_suffix: bool,
    date: NaiveDate,
) -> Result<PathBuf> {
    let date_suffix = date.format("%Y%m%d").to_string();

    let Some(path) = file_name else {
        let name = if add_date_suffix {
            format!("{}_{}{}", DEFAULT_FILE_NAME, date_suffix, DEFAULT_FILE_EXTENSION)
        } else {
            format!("{}{}", DEFAULT_FILE_NAME, DEFAULT_FILE_EXTENSION)
        };
        return Ok(PathBuf::from(name));
    };

    validate_file_name(path, cfg!(windows))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| {
            LoggerError::invalid_file_name(path.display().to_string(), "has no file name component")
        })?;
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()));

    if add_date_suffix {
        let suffix = extension.as_deref().unwrap_or(DEFAULT_FILE_EXTENSION);
        Ok(path.with_file_name(format!("{}_{}{}", stem, date_suffix, suffix)))
    } else if extension.is_none() {
        Ok(path.with_file_name(format!("{}{}", stem, DEFAULT_FILE_EXTENSION)))
    } else {
        Ok(path.to_path_buf())
    }
}

fn is_reserved_device_name(stem: &str) -> bool {
    let upper = stem.to_uppercase();
    if WINDOWS_RESERVED_NAMES.contains(&upper.as_str()) {
        return true;
    }
    // COM1-COM9, LPT1-LPT9
    match upper.strip_prefix("COM").or_else(|| upper.strip_prefix("LPT")) {
        Some(digit) => digit.len() == 1 && matches!(digit.as_bytes()[0], b'1'..=b'9'),
        None => false,
    }
}

/// Reject names that cannot be opened as a log file
///
/// The Windows rules are checked only when `windows` is set, so they can be
/// exercised on every platform.
pub(crate) fn validate_file_name(path: &Path, windows: bool) -> Result<()> {
    let display = path.to_string_lossy();

    if display.trim().is_empty() {
        return Err(LoggerError::invalid_file_name(display, "cannot be empty"));
    }
    if display.contains('\0') {
        return Err(LoggerError::invalid_file_name(display, "contains a null byte"));
    }

    if windows {
        for component in path.components() {
            let Component::Normal(part) = component else {
                continue;
            };
            let part = part.to_string_lossy();

            if part.contains(WINDOWS_INVALID_CHARS) {
                return Err(LoggerError::invalid_file_name(
                    display,
                    "contains characters that are invalid in Windows paths",
                ));
            }

            let stem = Path::new(part.as_ref())
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            if is_reserved_device_name(&stem) {
                return Err(LoggerError::invalid_file_name(
                    display,
                    format!("component '{}' is a reserved Windows device name", part),
                ));
            }
        }
    }

    Ok(())
}
