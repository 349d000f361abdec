//! Declarative pipeline configuration
//!
//! A pipeline can be described as data (typically JSON) and built in one
//! step. Each entry mirrors one constructor, and building an entry surfaces
//! exactly the construction error the constructor would: a bad regex, an
//! unwritable path or port 0 abort the whole build.

use crate::core::{Filter, Handler, Logger, LoggerBuilder, Result};
use crate::filters::{LevelFilter, RegexFilter, SubstringFilter};
use crate::handlers::{ConsoleHandler, FileHandler, SocketHandler, SyslogHandler};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Declarative form of one filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    /// Substring containment filter
    Substring { pattern: String },
    /// Regular expression search filter
    Regex { pattern: String },
    /// Severity prefix filter
    Level { level: String },
}

impl FilterConfig {
    /// Build the configured filter
    pub fn build(&self) -> Result<Arc<dyn Filter>> {
        Ok(match self {
            FilterConfig::Substring { pattern } => Arc::new(SubstringFilter::new(pattern.clone())),
            FilterConfig::Regex { pattern } => Arc::new(RegexFilter::new(pattern)?),
            FilterConfig::Level { level } => Arc::new(LevelFilter::new(level)?),
        })
    }
}

/// Declarative form of one handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandlerConfig {
    /// Appending file sink
    File { path: String },
    /// One-connection-per-message TCP sink
    Socket { host: String, port: u16 },
    /// Process stream sink (stdout unless `use_error_stream`)
    Console {
        #[serde(default)]
        use_error_stream: bool,
    },
    /// Placeholder syslog sink
    Syslog,
}

impl HandlerConfig {
    /// Build the configured handler
    pub fn build(&self) -> Result<Arc<dyn Handler>> {
        Ok(match self {
            HandlerConfig::File { path } => Arc::new(FileHandler::new(path)?),
            HandlerConfig::Socket { host, port } => {
                Arc::new(SocketHandler::new(host.clone(), *port)?)
            }
            HandlerConfig::Console { use_error_stream } => {
                Arc::new(ConsoleHandler::new(*use_error_stream))
            }
            HandlerConfig::Syslog => Arc::new(SyslogHandler::new()),
        })
    }
}

/// Declarative form of a whole pipeline
///
/// # Example
///
/// ```
/// use logpipe::config::PipelineConfig;
///
/// let config = PipelineConfig::from_json(
///     r#"{
///         "filters": [{ "type": "substring", "pattern": "ERROR" }],
///         "handlers": [{ "type": "console", "use_error_stream": true }]
///     }"#,
/// )
/// .expect("valid config");
///
/// let logger = config.build().expect("buildable pipeline");
/// logger.log("ERROR: config-built pipeline works");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Admission predicates, AND-combined; empty accepts everything
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
    /// Delivery sinks, attempted in order
    pub handlers: Vec<HandlerConfig>,
}

impl PipelineConfig {
    /// Parse a pipeline description from JSON
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`](crate::PipelineError::Config) for
    /// malformed JSON or unknown entry types.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build every entry and return a [`LoggerBuilder`] holding them
    ///
    /// Returning the builder instead of a finished logger keeps diagnostics
    /// and fan-out injectable on top of a declarative pipeline.
    ///
    /// # Errors
    ///
    /// The first entry that fails to build aborts with its construction
    /// error, unwrapped.
    pub fn builder(&self) -> Result<LoggerBuilder> {
        let mut builder = Logger::builder();
        for filter in &self.filters {
            builder = builder.shared_filter(filter.build()?);
        }
        for handler in &self.handlers {
            builder = builder.shared_handler(handler.build()?);
        }
        Ok(builder)
    }

    /// Build the pipeline with default diagnostics and sequential fan-out
    pub fn build(&self) -> Result<Logger> {
        Ok(self.builder()?.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PipelineError;

    #[test]
    fn test_parse_all_entry_kinds() {
        let config = PipelineConfig::from_json(
            r#"{
                "filters": [
                    { "type": "substring", "pattern": "ERROR" },
                    { "type": "regex", "pattern": "\\d+" },
                    { "type": "level", "level": "warn" }
                ],
                "handlers": [
                    { "type": "file", "path": "app.log" },
                    { "type": "socket", "host": "localhost", "port": 5140 },
                    { "type": "console" },
                    { "type": "syslog" }
                ]
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.filters.len(), 3);
        assert_eq!(config.handlers.len(), 4);
        assert_eq!(
            config.filters[0],
            FilterConfig::Substring {
                pattern: "ERROR".to_string()
            }
        );
        assert_eq!(
            config.handlers[2],
            HandlerConfig::Console {
                use_error_stream: false
            }
        );
    }

    #[test]
    fn test_filters_default_to_empty() {
        let config = PipelineConfig::from_json(r#"{ "handlers": [{ "type": "syslog" }] }"#)
            .expect("valid config");
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_unknown_type_is_config_error() {
        let err = PipelineConfig::from_json(r#"{ "handlers": [{ "type": "carrier_pigeon" }] }"#)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_port_above_u16_is_config_error() {
        let err = PipelineConfig::from_json(
            r#"{ "handlers": [{ "type": "socket", "host": "x", "port": 70000 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_port_zero_fails_at_build() {
        let config = PipelineConfig::from_json(
            r#"{ "handlers": [{ "type": "socket", "host": "x", "port": 0 }] }"#,
        )
        .expect("parses fine");

        let err = config.build().unwrap_err();
        assert!(matches!(err, PipelineError::PortOutOfRange { port: 0 }));
    }

    #[test]
    fn test_bad_regex_fails_at_build() {
        let config = PipelineConfig {
            filters: vec![FilterConfig::Regex {
                pattern: "(unclosed".to_string(),
            }],
            handlers: vec![HandlerConfig::Syslog],
        };

        let err = config.build().unwrap_err();
        assert!(matches!(err, PipelineError::InvalidPattern { .. }));
    }

    #[test]
    fn test_build_realizes_pipeline() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("from_config.log");

        let config = PipelineConfig {
            filters: vec![FilterConfig::Level {
                level: "info".to_string(),
            }],
            handlers: vec![HandlerConfig::File {
                path: path.display().to_string(),
            }],
        };

        let logger = config.build().expect("buildable pipeline");
        assert_eq!(logger.filter_count(), 1);
        assert_eq!(logger.handler_count(), 1);

        logger.log("INFO: reached the file");
        logger.log("DEBUG: filtered out");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("INFO: reached the file"));
    }

    #[test]
    fn test_round_trip_serialization() {
        let config = PipelineConfig {
            filters: vec![FilterConfig::Regex {
                pattern: r"\d+".to_string(),
            }],
            handlers: vec![
                HandlerConfig::Socket {
                    host: "localhost".to_string(),
                    port: 5140,
                },
                HandlerConfig::Console {
                    use_error_stream: true,
                },
            ],
        };

        let json = serde_json::to_string(&config).expect("serialize");
        let parsed = PipelineConfig::from_json(&json).expect("reparse");
        assert_eq!(parsed, config);
    }
}
