//! File handler implementation
//!
//! Appends one stamped line per message. The target path is validated at
//! construction but no handle is held between calls: every delivery opens
//! the file in append mode, writes its line and closes again, so rotation
//! or deletion of the file between messages is picked up on the next write.

use crate::core::{Delivery, Handler, PipelineError, Result, timestamp};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Replace every non-ASCII character with `?`, leaving ASCII text untouched.
///
/// The character count is preserved and the output is pure ASCII; this is
/// the lossy re-encode the file sink falls back to when a write fails with
/// an encoding-class error.
///
/// # Examples
///
/// ```
/// use logpipe::handlers::file::ascii_lossy;
///
/// assert_eq!(ascii_lossy("plain ascii"), "plain ascii");
/// assert_eq!(ascii_lossy("caf\u{e9} → here"), "caf? ? here");
/// ```
#[must_use]
pub fn ascii_lossy(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if c.is_ascii() { c } else { '?' })
                .collect(),
        )
    }
}

fn is_encoding_error(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::InvalidData | ErrorKind::InvalidInput)
}

/// Appends stamped lines (`[YYYY-MM-DD HH:MM:SS] <text>`) to a log file.
///
/// # Example
///
/// ```no_run
/// use logpipe::handlers::FileHandler;
/// use logpipe::Handler;
///
/// let handler = FileHandler::new("/var/log/app.log").expect("writable path");
/// let outcome = handler.handle("service started");
/// assert!(outcome.is_delivered());
/// ```
#[derive(Debug)]
pub struct FileHandler {
    path: PathBuf,
    /// Printable path for error reports
    display_path: String,
    /// Serializes open-write-close so sharers cannot interleave lines
    write_lock: Mutex<()>,
}

impl FileHandler {
    /// Validate `path` by opening it for append (creating it if missing)
    /// and closing it again without writing.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::FileUnwritable`] when the probe fails; no
    /// handler instance exists in that case.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let display_path = path.display().to_string();

        // Probe now so a bad path fails construction, not the first delivery.
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| {
                let message = source.to_string();
                PipelineError::file_unwritable(display_path.as_str(), message, source)
            })?;

        Ok(Self {
            path,
            display_path,
            write_lock: Mutex::new(()),
        })
    }

    /// The path this handler appends to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
        // The handle drops here, closing the file.
    }

    fn write_error(&self, source: std::io::Error) -> PipelineError {
        let message = source.to_string();
        PipelineError::file_write(self.display_path.as_str(), message, source)
    }
}

impl Handler for FileHandler {
    fn handle(&self, text: &str) -> Delivery {
        let stamp = timestamp::now_stamp();
        let _guard = self.write_lock.lock();

        match self.append_line(&format!("[{stamp}] {text}\n")) {
            Ok(()) => Delivery::Delivered,
            Err(primary) => {
                if !is_encoding_error(&primary) {
                    return Delivery::Failed(self.write_error(primary));
                }
                // Retry exactly once in printable-ASCII form, same stamp.
                // The degraded line affects only this delivery.
                let fallback = format!("[{stamp}] {}\n", ascii_lossy(text));
                match self.append_line(&fallback) {
                    Ok(()) => Delivery::Recovered(self.write_error(primary)),
                    Err(_) => Delivery::Failed(self.write_error(primary)),
                }
            }
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}
