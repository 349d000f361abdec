//! Substring filter implementation

use crate::core::Filter;

/// Passes messages that contain a fixed substring.
///
/// The match is contiguous and case-sensitive. An empty pattern matches
/// every message.
///
/// # Example
///
/// ```
/// use logpipe::filters::SubstringFilter;
/// use logpipe::Filter;
///
/// let filter = SubstringFilter::new("ERROR");
/// assert!(filter.matches("2025-01-08 ERROR disk full"));
/// assert!(!filter.matches("2025-01-08 error disk full"));
/// ```
#[derive(Debug)]
pub struct SubstringFilter {
    pattern: String,
}

impl SubstringFilter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The substring this filter looks for
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Filter for SubstringFilter {
    fn matches(&self, text: &str) -> bool {
        text.contains(&self.pattern)
    }

    fn name(&self) -> &str {
        "substring"
    }
}
