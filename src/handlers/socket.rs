//! Socket handler implementation
//!
//! Sends each message over its own short-lived TCP connection: resolve,
//! connect, write one line, close. Nothing is pooled or retried, so a dead
//! receiver costs at most the connect timeout per message and can never
//! wedge the pipeline. No lock is needed; every call owns a private
//! connection.

use crate::core::{Delivery, Handler, PipelineError, Result};
use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Bound on connect, send and read for one delivery attempt
pub const SOCKET_TIMEOUT: Duration = Duration::from_secs(1);

/// Delivers messages as `<text>\n` lines to a TCP endpoint.
///
/// # Example
///
/// ```no_run
/// use logpipe::handlers::SocketHandler;
/// use logpipe::Handler;
///
/// let handler = SocketHandler::new("logs.internal", 5140).expect("valid port");
/// let outcome = handler.handle("ERROR upstream timeout");
/// if let Some(err) = outcome.error() {
///     eprintln!("log receiver unreachable: {err}");
/// }
/// ```
#[derive(Debug)]
pub struct SocketHandler {
    host: String,
    port: u16,
    /// Cached `host:port` form for error reports
    endpoint: String,
}

impl SocketHandler {
    /// # Errors
    ///
    /// Returns [`PipelineError::PortOutOfRange`] for port 0; the `u16`
    /// parameter already rules out anything above 65535.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        if port == 0 {
            return Err(PipelineError::PortOutOfRange { port: 0 });
        }
        let host = host.into();
        let endpoint = format!("{host}:{port}");
        Ok(Self {
            host,
            port,
            endpoint,
        })
    }

    /// The `host:port` endpoint this handler delivers to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn resolve(&self) -> Result<SocketAddr> {
        let mut addrs = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| PipelineError::resolve(self.endpoint.as_str(), e.to_string()))?;
        addrs
            .next()
            .ok_or_else(|| PipelineError::resolve(self.endpoint.as_str(), "no addresses returned"))
    }

    fn deliver(&self, text: &str) -> Result<()> {
        let addr = self.resolve()?;

        let mut stream = TcpStream::connect_timeout(&addr, SOCKET_TIMEOUT).map_err(|source| {
            let message = source.to_string();
            PipelineError::connect(self.endpoint.as_str(), message, source)
        })?;

        // A stalled peer must not hold up dispatch past the timeout.
        stream
            .set_write_timeout(Some(SOCKET_TIMEOUT))
            .and_then(|()| stream.set_read_timeout(Some(SOCKET_TIMEOUT)))
            .map_err(|source| {
                let message = format!("failed to set socket timeout: {source}");
                PipelineError::connect(self.endpoint.as_str(), message, source)
            })?;

        stream
            .write_all(format!("{text}\n").as_bytes())
            .map_err(|source| {
                let message = source.to_string();
                PipelineError::send(self.endpoint.as_str(), message, source)
            })?;

        // The stream drops here, closing the connection.
        Ok(())
    }
}

impl Handler for SocketHandler {
    fn handle(&self, text: &str) -> Delivery {
        match self.deliver(text) {
            Ok(()) => Delivery::Delivered,
            Err(err) => Delivery::Failed(err),
        }
    }

    fn name(&self) -> &str {
        "socket"
    }
}
