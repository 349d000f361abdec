//! Diagnostic reporting for delivery failures
//!
//! The pipeline never surfaces delivery problems to the `log` caller; it
//! reports them out-of-band through an injected [`DiagnosticSink`]. The
//! default sink writes to the process error stream. Tests and embedding
//! applications can inject [`MemoryDiagnostics`] to observe reports
//! programmatically instead of scraping stderr.

use std::io::Write;

use parking_lot::Mutex;

/// Receiver for out-of-band failure reports.
///
/// Reporting is best-effort: implementations must not panic, and a sink
/// that itself fails to record a report simply loses it.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Default sink: one `[logpipe] <message>` line per report on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, message: &str) {
        // A failed report is dropped; there is no further fallback.
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "[logpipe] {message}");
    }
}

/// Capturing sink that stores reports in memory.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    reports: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.reports.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn report(&self, message: &str) {
        self.reports.lock().push(message.to_string());
    }
}
