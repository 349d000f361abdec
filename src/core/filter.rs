//! Filter trait for message admission decisions
//!
//! A filter is a pure predicate over the message text. A message enters the
//! pipeline only if every attached filter matches it; a logger with no
//! filters accepts everything.

/// Admission predicate evaluated before any handler runs.
///
/// Implementations must be `Send + Sync` so a single filter instance can be
/// shared across loggers and threads. `matches` must not mutate observable
/// state; the same text should yield the same answer.
pub trait Filter: Send + Sync {
    /// Return `true` if the message should pass this filter.
    fn matches(&self, text: &str) -> bool;

    /// Short name used in diagnostic reports.
    fn name(&self) -> &str;
}
