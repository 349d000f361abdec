//! Pipeline logger implementation

use super::{
    diagnostics::{DiagnosticSink, StderrDiagnostics},
    fanout::FanoutMode,
    filter::Filter,
    handler::{Delivery, Handler},
    metrics::PipelineMetrics,
};
use std::sync::Arc;
use std::thread;

/// Routes messages through a filter stage into a handler fan-out.
///
/// A message passes the filter stage only if every filter matches it (a
/// logger with no filters accepts everything). Accepted messages are
/// attempted on every handler; one handler's failure or panic never
/// prevents the remaining handlers from receiving the message, and `log`
/// itself never returns an error or panics past its boundary.
///
/// The filter and handler collections are snapshots taken at construction.
/// They cannot be changed afterwards, and later changes to the collections
/// the caller built from have no effect on an existing logger.
pub struct Logger {
    filters: Vec<Arc<dyn Filter>>,
    handlers: Vec<Arc<dyn Handler>>,
    /// Out-of-band receiver for failure reports
    diagnostics: Arc<dyn DiagnosticSink>,
    fanout: FanoutMode,
    /// Metrics for observability (accepted/filtered messages, attempt outcomes)
    metrics: Arc<PipelineMetrics>,
}

/// Result of one isolated handler attempt, panics included.
enum Attempt {
    Settled(Delivery),
    Panicked(String),
}

/// Extract a printable message from a recovered panic payload.
fn panic_message(panic_info: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Logger {
    /// Create a logger from snapshots of the given filters and handlers.
    ///
    /// Both slices are copied; the caller keeps its collections and may
    /// reuse the same `Arc`s in other loggers. Diagnostics default to
    /// stderr and fan-out to [`FanoutMode::Sequential`]; use
    /// [`Logger::builder`] to change either.
    #[must_use]
    pub fn new(filters: &[Arc<dyn Filter>], handlers: &[Arc<dyn Handler>]) -> Self {
        Self {
            filters: filters.to_vec(),
            handlers: handlers.to_vec(),
            diagnostics: Arc::new(StderrDiagnostics),
            fanout: FanoutMode::Sequential,
            metrics: Arc::new(PipelineMetrics::new()),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logpipe::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .filter(SubstringFilter::new("ERROR"))
    ///     .handler(ConsoleHandler::stdout())
    ///     .build();
    ///
    /// logger.log("ERROR disk full");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Route one message through the pipeline.
    ///
    /// Evaluates the filters in order with AND semantics, short-circuiting
    /// on the first rejection; on acceptance every handler receives one
    /// delivery attempt. Rejected messages are dropped silently. Failed or
    /// degraded attempts are reported to the diagnostic sink and counted
    /// in the metrics; the caller observes none of it.
    pub fn log(&self, text: impl AsRef<str>) {
        let text = text.as_ref();

        if !self.accepts(text) {
            self.metrics.record_filtered();
            return;
        }
        self.metrics.record_accepted();

        match self.fanout {
            FanoutMode::Sequential => {
                for handler in &self.handlers {
                    let outcome = Self::attempt(handler.as_ref(), text);
                    self.settle(handler.as_ref(), outcome);
                }
            }
            FanoutMode::Concurrent => self.dispatch_concurrent(text),
        }
    }

    /// Evaluate the filter stage. Empty filter set accepts everything.
    ///
    /// A panicking filter cannot veto delivery for well-behaved filters
    /// behind it in some other call, but within this call it makes the
    /// admission decision unanswerable, so the message is treated as
    /// rejected and the panic is reported.
    fn accepts(&self, text: &str) -> bool {
        for filter in &self.filters {
            let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                filter.matches(text)
            }));

            match verdict {
                Ok(true) => {}
                Ok(false) => return false,
                Err(panic_info) => {
                    self.diagnostics.report(&format!(
                        "Filter '{}' panicked: {}. Message rejected.",
                        filter.name(),
                        panic_message(panic_info)
                    ));
                    return false;
                }
            }
        }
        true
    }

    /// Run one handler attempt with panic isolation.
    fn attempt(handler: &dyn Handler, text: &str) -> Attempt {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handler.handle(text)
        }));

        match outcome {
            Ok(delivery) => Attempt::Settled(delivery),
            Err(panic_info) => Attempt::Panicked(panic_message(panic_info)),
        }
    }

    /// Record and report the outcome of one attempt.
    fn settle(&self, handler: &dyn Handler, attempt: Attempt) {
        match attempt {
            Attempt::Settled(Delivery::Delivered) => {
                self.metrics.record_delivered();
            }
            Attempt::Settled(Delivery::Recovered(err)) => {
                self.metrics.record_recovered();
                self.diagnostics
                    .report(&format!("Handler '{}' recovered: {}", handler.name(), err));
            }
            Attempt::Settled(Delivery::Failed(err)) => {
                self.metrics.record_failed();
                self.diagnostics
                    .report(&format!("Handler '{}' failed: {}", handler.name(), err));
            }
            Attempt::Panicked(message) => {
                self.metrics.record_failed();
                self.diagnostics.report(&format!(
                    "Handler '{}' panicked: {}. Other handlers continue to function.",
                    handler.name(),
                    message
                ));
            }
        }
    }

    /// Attempt every handler on its own scoped thread, join, then settle
    /// outcomes in construction order.
    fn dispatch_concurrent(&self, text: &str) {
        let outcomes: Vec<Attempt> = thread::scope(|scope| {
            let attempts: Vec<_> = self
                .handlers
                .iter()
                .map(|handler| scope.spawn(move || Self::attempt(handler.as_ref(), text)))
                .collect();

            attempts
                .into_iter()
                .map(|attempt| {
                    // attempt() already contains panics; a failed join here
                    // means the isolation machinery itself blew up.
                    attempt
                        .join()
                        .unwrap_or_else(|panic_info| Attempt::Panicked(panic_message(panic_info)))
                })
                .collect()
        });

        for (handler, outcome) in self.handlers.iter().zip(outcomes) {
            self.settle(handler.as_ref(), outcome);
        }
    }

    /// Number of filters in this logger's snapshot
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Number of handlers in this logger's snapshot
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Get the pipeline metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use logpipe::Logger;
    ///
    /// let logger = Logger::builder().build();
    /// logger.log("hello");
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.accepted_count(), 1);
    /// println!("Failure rate: {:.2}%", metrics.failure_rate());
    /// ```
    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        let handlers: Vec<&str> = self.handlers.iter().map(|handler| handler.name()).collect();
        f.debug_struct("Logger")
            .field("filters", &filters)
            .field("handlers", &handlers)
            .field("fanout", &self.fanout)
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use logpipe::prelude::*;
/// use std::sync::Arc;
///
/// let shared: Arc<dyn Handler> = Arc::new(ConsoleHandler::stderr());
///
/// let logger = Logger::builder()
///     .filter(SubstringFilter::new("ERROR"))
///     .shared_handler(Arc::clone(&shared))
///     .fanout(FanoutMode::Sequential)
///     .build();
///
/// logger.log("ERROR: handshake failed");
/// ```
pub struct LoggerBuilder {
    filters: Vec<Arc<dyn Filter>>,
    handlers: Vec<Arc<dyn Handler>>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
    fanout: FanoutMode,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            handlers: Vec::new(),
            diagnostics: None,
            fanout: FanoutMode::Sequential,
        }
    }

    /// Add a filter owned by this logger
    #[must_use = "builder methods return a new value"]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Add a filter shared with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a handler owned by this logger
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Add a handler shared with other loggers
    ///
    /// The handler guards its own write path, so one instance may receive
    /// messages from several loggers concurrently.
    #[must_use = "builder methods return a new value"]
    pub fn shared_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Replace the default stderr diagnostic sink
    ///
    /// # Example
    ///
    /// ```
    /// use logpipe::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let diagnostics = Arc::new(MemoryDiagnostics::new());
    ///
    /// let logger = Logger::builder()
    ///     .diagnostics(Arc::clone(&diagnostics) as Arc<dyn DiagnosticSink>)
    ///     .build();
    ///
    /// logger.log("nothing fails here");
    /// assert!(diagnostics.is_empty());
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Set the fan-out mode for handler dispatch
    ///
    /// Default is [`FanoutMode::Sequential`].
    #[must_use = "builder methods return a new value"]
    pub fn fanout(mut self, mode: FanoutMode) -> Self {
        self.fanout = mode;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            filters: self.filters,
            handlers: self.handlers,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(StderrDiagnostics)),
            fanout: self.fanout,
            metrics: Arc::new(PipelineMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
