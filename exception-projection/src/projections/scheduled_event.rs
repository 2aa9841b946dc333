use tracing::{debug, warn};

use super::ExceptionProjection;
use crate::domain::{
    category::ErrorCategory,
    errors::{ProjectedError, ProjectionError, SourceError},
};

/// Message used for a projected scheduled event failure
pub fn scheduled_event_message(identifier: &str, detail: &str) -> String {
    format!("In Scheduled Event '{}', {}", identifier, detail)
}

/// Prefixes scheduled event failures with the name of the event and
/// promotes their cause to the projected error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduledEventExceptionProjection;

impl ScheduledEventExceptionProjection {
    pub fn new() -> Self {
        Self
    }
}

impl ExceptionProjection for ScheduledEventExceptionProjection {
    fn name(&self) -> &'static str {
        "ScheduledEventExceptionProjection"
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::ScheduledEvent
    }

    fn project(&self, error: &SourceError) -> Result<ProjectedError, ProjectionError> {
        let SourceError::ScheduledEvent(event_error) = error else {
            warn!(
                projection = self.name(),
                category = %error.category(),
                "Projection called on an unsupported error category"
            );
            return Err(ProjectionError::UnsupportedCategory {
                projection: self.name(),
                category: error.category(),
            });
        };

        debug!(
            projection = self.name(),
            event = event_error.identifier(),
            "Projecting scheduled event error"
        );

        // Only the wrapper is dropped; a nested scheduled event error stays as the cause.
        Ok(ProjectedError::new(
            scheduled_event_message(event_error.identifier(), event_error.detail()),
            event_error.cause().cloned(),
        ))
    }
}
