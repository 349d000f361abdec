//! Core pipeline types and traits

pub mod diagnostics;
pub mod error;
pub mod fanout;
pub mod filter;
pub mod handler;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use diagnostics::{DiagnosticSink, MemoryDiagnostics, StderrDiagnostics};
pub use error::{PipelineError, Result};
pub use fanout::FanoutMode;
pub use filter::Filter;
pub use handler::{Delivery, Handler};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::PipelineMetrics;
