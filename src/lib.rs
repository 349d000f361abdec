//! # Logpipe
//!
//! A composable log routing pipeline: messages pass a set of filters and
//! fan out to a set of independently-failing delivery handlers.
//!
//! ## Features
//!
//! - **Pluggable Routing**: Substring, regex and level filters over plain text
//! - **Multiple Handlers**: File, socket, console and custom handlers
//! - **Fail-Isolated Delivery**: One broken sink never stops the others
//! - **Thread Safe**: Filters and handlers share freely across loggers
//!
//! ## Quick start
//!
//! ```
//! use logpipe::prelude::*;
//!
//! let logger = Logger::builder()
//!     .filter(SubstringFilter::new("ERROR"))
//!     .handler(ConsoleHandler::stderr())
//!     .build();
//!
//! logger.log("ERROR: this reaches stderr");
//! logger.log("INFO: this is filtered out");
//! ```

pub mod config;
pub mod core;
pub mod filters;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::config::{FilterConfig, HandlerConfig, PipelineConfig};
    pub use crate::core::{
        Delivery, DiagnosticSink, FanoutMode, Filter, Handler, Logger, LoggerBuilder,
        MemoryDiagnostics, PipelineError, PipelineMetrics, Result, StderrDiagnostics,
    };
    pub use crate::filters::{LevelFilter, RegexFilter, SubstringFilter};
    pub use crate::handlers::{ConsoleHandler, FileHandler, SocketHandler, SyslogHandler};
}

pub use crate::config::PipelineConfig;
pub use crate::core::{
    Delivery, DiagnosticSink, FanoutMode, Filter, Handler, Logger, LoggerBuilder,
    MemoryDiagnostics, PipelineError, PipelineMetrics, Result, StderrDiagnostics,
};
pub use crate::filters::{LevelFilter, RegexFilter, SubstringFilter};
pub use crate::handlers::{ConsoleHandler, FileHandler, SocketHandler, SyslogHandler};
