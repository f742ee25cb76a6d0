//! File appender implementation

use crate::core::{
    Appender, FileMode, Formatter, FormatterConfig, IndentedFormatter, LogEntry, LogLevel,
    LoggerError, Result,
};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Plain-text sink; every record is flushed before `append` returns
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    formatter: IndentedFormatter,
    level: LogLevel,
}

impl FileAppender {
    /// Open `path` for appending at `Debug`
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path, FileMode::Append, LogLevel::Debug)
    }

    /// Open `path`, creating any missing parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory cannot be created or the file
    /// cannot be opened in the requested mode.
    pub fn open(path: impl Into<PathBuf>, mode: FileMode, level: LogLevel) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let mut options = OpenOptions::new();
        match mode {
            FileMode::Append => options.create(true).append(true),
            FileMode::Truncate => options.create(true).write(true).truncate(true),
        };
        let file = options.open(&path).map_err(|e| {
            LoggerError::file_appender(path.display().to_string(), format!("Failed to open: {}", e))
        })?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            formatter: IndentedFormatter::new(FormatterConfig::default().with_logger_name(true)),
            level,
        })
    }

    #[must_use]
    pub fn with_formatter_config(mut self, config: FormatterConfig) -> Self {
        self.formatter = IndentedFormatter::new(config);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and release the file handle; later appends fail
    pub fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => writer.flush().map_err(|e| {
                LoggerError::file_appender(
                    self.path.display().to_string(),
                    format!("Failed to flush on close: {}", e),
                )
            }),
            None => Ok(()),
        }
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer(format!("'{}' is closed", self.path.display())))?;

        let mut output = self.formatter.format(entry);
        output.push('\n');

        writer
            .write_all(output.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| {
                LoggerError::file_appender(
                    self.path.display().to_string(),
                    format!("Failed to write log entry: {}", e),
                )
            })
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_appender(
                    self.path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }

    fn level(&self) -> LogLevel {
        self.level
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn untimed() -> FormatterConfig {
        FormatterConfig::default().with_timestamp(None)
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/c.log");

        let appender = FileAppender::new(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(appender.path(), path);
    }

    #[test]
    fn test_append_mode_keeps_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keep.log");
        fs::write(&path, "existing\n").unwrap();

        let mut appender = FileAppender::new(&path).unwrap().with_formatter_config(untimed());
        appender.append(&LogEntry::new(LogLevel::Info, "added")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nINFO     | added\n");
    }

    #[test]
    fn test_truncate_mode_clears_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fresh.log");
        fs::write(&path, "stale\n").unwrap();

        let mut appender = FileAppender::open(&path, FileMode::Truncate, LogLevel::Debug)
            .unwrap()
            .with_formatter_config(untimed());
        appender.append(&LogEntry::new(LogLevel::Debug, "new")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "DEBUG    | new\n");
    }

    #[test]
    fn test_written_without_explicit_flush() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eager.log");

        let mut appender = FileAppender::new(&path).unwrap();
        appender.append(&LogEntry::new(LogLevel::Warning, "now")).unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains("WARNING"));
    }

    #[test]
    fn test_open_in_missing_parent_that_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = FileAppender::new(blocker.join("x.log"));
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }

    #[test]
    fn test_append_after_close_fails() {
        let dir = tempdir().unwrap();
        let mut appender = FileAppender::new(dir.path().join("closed.log")).unwrap();
        appender.close().unwrap();

        let result = appender.append(&LogEntry::new(LogLevel::Info, "late"));
        assert!(matches!(result, Err(LoggerError::WriterError(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure_is_returned() {
        let mut appender = FileAppender::open("/dev/full", FileMode::Append, LogLevel::Debug).unwrap();

        let result = appender.append(&LogEntry::new(LogLevel::Error, "no space left"));
        match result {
            Err(LoggerError::FileAppenderError { path, message }) => {
                assert_eq!(path, "/dev/full");
                assert!(message.starts_with("Failed to write log entry"));
            }
            other => panic!("expected a write failure, got {:?}", other),
        }
    }
}
