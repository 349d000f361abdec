//! Fan-out modes for handler dispatch
//!
//! An accepted message is attempted on every handler. These modes determine
//! whether the attempts run one after another on the calling thread or
//! overlap on scoped worker threads.

use std::fmt;

/// Dispatch strategy for the handler fan-out
///
/// Either way, `log` returns only after every attempt has settled, and a
/// given handler sees messages in call order. Concurrent mode only relaxes
/// the ordering of handlers relative to each other within one call.
///
/// # Example
///
/// ```
/// use logpipe::FanoutMode;
///
/// // Default behavior: attempts run in construction order
/// let mode = FanoutMode::default();
/// assert_eq!(mode, FanoutMode::Sequential);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanoutMode {
    /// Attempt handlers one at a time, in construction order
    ///
    /// Slow sinks delay the ones behind them; total latency is the sum of
    /// the individual attempts. This is the predictable default.
    #[default]
    Sequential,

    /// Attempt every handler on its own scoped thread
    ///
    /// Blocking I/O overlaps, so total latency approaches the slowest
    /// single attempt. All threads are joined before `log` returns;
    /// outcomes are settled in construction order so diagnostics stay
    /// deterministic.
    Concurrent,
}

impl fmt::Display for FanoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanoutMode::Sequential => write!(f, "Sequential"),
            FanoutMode::Concurrent => write!(f, "Concurrent"),
        }
    }
}
