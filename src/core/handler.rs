//! Handler trait for log delivery sinks
//!
//! A handler owns one delivery mechanism (file, socket, console, ...). Every
//! call to [`Handler::handle`] is a complete, self-contained delivery
//! attempt: acquire the resource, write the message, release the resource.
//! Handlers never propagate errors to the caller; the attempt's outcome
//! comes back as a [`Delivery`] value so a broken sink can never take down
//! the dispatch loop or its sibling sinks.

use super::error::PipelineError;

/// Outcome of a single delivery attempt.
#[derive(Debug)]
pub enum Delivery {
    /// The message reached its destination unmodified.
    Delivered,
    /// The message reached its destination in degraded form after an
    /// internal fallback (e.g. lossy re-encoding).
    Recovered(PipelineError),
    /// The message did not reach its destination.
    Failed(PipelineError),
}

impl Delivery {
    /// Whether the message reached the destination at all, possibly degraded.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered | Delivery::Recovered(_))
    }

    /// The error carried by a degraded or failed attempt, if any.
    pub fn error(&self) -> Option<&PipelineError> {
        match self {
            Delivery::Delivered => None,
            Delivery::Recovered(err) | Delivery::Failed(err) => Some(err),
        }
    }
}

/// Delivery sink for accepted messages.
///
/// `handle` takes `&self`: handlers guard their own resource (an internal
/// lock, or a per-call private resource such as a fresh connection) so one
/// instance can be shared across loggers and threads.
pub trait Handler: Send + Sync {
    /// Attempt to deliver one message, reporting the outcome.
    fn handle(&self, text: &str) -> Delivery;

    /// Short name used in diagnostic reports.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_classification() {
        assert!(Delivery::Delivered.is_delivered());
        assert!(Delivery::Delivered.error().is_none());

        let recovered = Delivery::Recovered(PipelineError::invalid_level("x", "test"));
        assert!(recovered.is_delivered());
        assert!(recovered.error().is_some());

        let failed = Delivery::Failed(PipelineError::invalid_level("x", "test"));
        assert!(!failed.is_delivered());
        assert!(failed.error().is_some());
    }
}
