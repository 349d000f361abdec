//! Logging macro for ergonomic message formatting.
//!
//! Messages here are plain text; levels are just conventions in that text.
//! The macro therefore comes in one shape, similar to `println!`: format
//! the arguments, hand the result to the logger.

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// use logpipe::prelude::*;
/// use logpipe::log;
///
/// let logger = Logger::builder().handler(ConsoleHandler::stdout()).build();
///
/// log!(logger, "Server started");
///
/// let port = 8080;
/// log!(logger, "ERROR: nothing listening on port {}", port);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(format!($($arg)+))
    };
}
