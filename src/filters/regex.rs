//! Regular expression filter implementation

use crate::core::{Filter, PipelineError, Result};
use regex::Regex;

/// Passes messages that contain a match for a regular expression.
///
/// The pattern is compiled once at construction; an invalid pattern is a
/// construction error, never a per-message one. Matching is a search over
/// the whole text, not a full match; anchor with `^`/`$` where needed.
///
/// # Example
///
/// ```
/// use logpipe::filters::RegexFilter;
/// use logpipe::Filter;
///
/// let filter = RegexFilter::new(r"\d+").expect("valid pattern");
/// assert!(filter.matches("error code 404"));
/// assert!(!filter.matches("no digits here"));
/// ```
///
/// # Errors
///
/// [`RegexFilter::new`] returns [`PipelineError::InvalidPattern`] when the
/// pattern does not compile.
#[derive(Debug)]
pub struct RegexFilter {
    regex: Regex,
}

impl RegexFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|source| PipelineError::invalid_pattern(pattern, source))?;
        Ok(Self { regex })
    }

    /// The pattern this filter was compiled from
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Filter for RegexFilter {
    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn name(&self) -> &str {
        "regex"
    }
}
