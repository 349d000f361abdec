//! Level prefix filter implementation

use crate::core::{Filter, PipelineError, Result};

/// Passes messages whose text starts with a severity token.
///
/// The level is upper-cased once at construction and compared as a
/// case-sensitive prefix, so `LevelFilter::new("error")` passes
/// `"ERROR: ..."` but not `"error: ..."`. Levels are opaque text here:
/// there is no severity ordering, and callers are expected to format their
/// messages with an upper-cased level prefix.
///
/// # Example
///
/// ```
/// use logpipe::filters::LevelFilter;
/// use logpipe::Filter;
///
/// let filter = LevelFilter::new("warn").expect("valid level");
/// assert!(filter.matches("WARN: running low on disk"));
/// assert!(!filter.matches("INFO: all good"));
/// ```
///
/// # Errors
///
/// [`LevelFilter::new`] returns [`PipelineError::InvalidLevel`] for an
/// empty or whitespace-only level: a blank prefix would vacuously match
/// every message.
#[derive(Debug)]
pub struct LevelFilter {
    level: String,
}

impl LevelFilter {
    pub fn new(level: &str) -> Result<Self> {
        if level.trim().is_empty() {
            return Err(PipelineError::invalid_level(
                level,
                "level must not be blank",
            ));
        }
        Ok(Self {
            level: level.to_uppercase(),
        })
    }

    /// The upper-cased level this filter compares against
    pub fn level(&self) -> &str {
        &self.level
    }
}

impl Filter for LevelFilter {
    fn matches(&self, text: &str) -> bool {
        text.starts_with(&self.level)
    }

    fn name(&self) -> &str {
        "level"
    }
}
