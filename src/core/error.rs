//! Error types for the log pipeline

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Regex filter pattern failed to compile
    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Level filter rejected its level token
    #[error("Invalid level '{level}': {message}")]
    InvalidLevel { level: String, message: String },

    /// File handler target could not be opened for append
    #[error("Cannot append to '{path}': {message}")]
    FileUnwritable {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Socket handler port outside the valid range
    #[error("Invalid port {port}: must be between 1 and 65535")]
    PortOutOfRange { port: u32 },

    /// Write to a log file failed
    #[error("Write to '{path}' failed: {message}")]
    FileWrite {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Remote endpoint did not resolve to an address
    #[error("Cannot resolve '{endpoint}': {message}")]
    Resolve { endpoint: String, message: String },

    /// Connection to a remote endpoint failed
    #[error("Connect to '{endpoint}' failed: {message}")]
    Connect {
        endpoint: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Send over an established connection failed
    #[error("Send to '{endpoint}' failed: {message}")]
    Send {
        endpoint: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Write to a standard stream failed
    #[error("Write to {stream} failed: {message}")]
    StreamWrite {
        stream: &'static str,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Pipeline configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PipelineError {
    /// Create an invalid pattern error from a failed regex compile
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        PipelineError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::InvalidLevel {
            level: level.into(),
            message: message.into(),
        }
    }

    /// Create a file unwritable error from a failed append probe
    pub fn file_unwritable(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        PipelineError::FileUnwritable {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn file_write(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        PipelineError::FileWrite {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a resolution error
    pub fn resolve(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::Resolve {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a connection error
    pub fn connect(
        endpoint: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        PipelineError::Connect {
            endpoint: endpoint.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a send error
    pub fn send(
        endpoint: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        PipelineError::Send {
            endpoint: endpoint.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a stream write error
    pub fn stream_write(
        stream: &'static str,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        PipelineError::StreamWrite {
            stream,
            message: message.into(),
            source,
        }
    }
}
