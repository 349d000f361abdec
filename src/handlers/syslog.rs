//! Syslog handler placeholder
//!
//! Stands in for a real syslog client: marks each message with a `SYSLOG:`
//! prefix and writes it to the error stream. Pipelines can be assembled
//! against the final shape before a protocol-speaking implementation
//! exists; only the delivery mechanism is fake.

use crate::core::{Delivery, Handler, PipelineError};
use std::io::Write;

/// Placeholder sink writing `SYSLOG: <text>` lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyslogHandler;

impl SyslogHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for SyslogHandler {
    fn handle(&self, text: &str) -> Delivery {
        let mut stream = std::io::stderr().lock();
        match writeln!(stream, "SYSLOG: {text}").and_then(|()| stream.flush()) {
            Ok(()) => Delivery::Delivered,
            Err(source) => {
                let message = source.to_string();
                Delivery::Failed(PipelineError::stream_write("stderr", message, source))
            }
        }
    }

    fn name(&self) -> &str {
        "syslog"
    }
}
