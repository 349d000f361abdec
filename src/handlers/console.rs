//! Console handler implementation

use crate::core::{Delivery, Handler, PipelineError};
use std::io::Write;

/// Writes each message as one line to a process stream.
///
/// The stream is fixed at construction: stdout by default, stderr for
/// pipelines whose diagnostics must stay out of program output. Writes go
/// through the locked stream handle and are flushed immediately, so a
/// broken stream surfaces as a failed delivery instead of a panic.
///
/// # Example
///
/// ```
/// use logpipe::handlers::ConsoleHandler;
/// use logpipe::Handler;
///
/// let handler = ConsoleHandler::stdout();
/// assert!(handler.handle("visible on stdout").is_delivered());
/// ```
#[derive(Debug)]
pub struct ConsoleHandler {
    use_error_stream: bool,
}

impl ConsoleHandler {
    pub fn new(use_error_stream: bool) -> Self {
        Self { use_error_stream }
    }

    /// Handler writing to standard output
    pub fn stdout() -> Self {
        Self::new(false)
    }

    /// Handler writing to standard error
    pub fn stderr() -> Self {
        Self::new(true)
    }

    fn stream_name(&self) -> &'static str {
        if self.use_error_stream {
            "stderr"
        } else {
            "stdout"
        }
    }

    fn write_line(&self, text: &str) -> std::io::Result<()> {
        if self.use_error_stream {
            let mut stream = std::io::stderr().lock();
            writeln!(stream, "{text}")?;
            stream.flush()
        } else {
            let mut stream = std::io::stdout().lock();
            writeln!(stream, "{text}")?;
            stream.flush()
        }
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Handler for ConsoleHandler {
    fn handle(&self, text: &str) -> Delivery {
        match self.write_line(text) {
            Ok(()) => Delivery::Delivered,
            Err(source) => {
                let message = source.to_string();
                Delivery::Failed(PipelineError::stream_write(
                    self.stream_name(),
                    message,
                    source,
                ))
            }
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_selection() {
        assert_eq!(ConsoleHandler::stdout().stream_name(), "stdout");
        assert_eq!(ConsoleHandler::stderr().stream_name(), "stderr");
        assert_eq!(ConsoleHandler::default().stream_name(), "stdout");
    }

    #[test]
    fn test_handle_delivers() {
        let handler = ConsoleHandler::stderr();
        assert!(handler.handle("console test line").is_delivered());
        assert_eq!(handler.name(), "console");
    }
}
