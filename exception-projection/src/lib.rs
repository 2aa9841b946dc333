pub mod domain;
pub mod projections;

// Re-export commonly used types
pub use domain::{
    category::ErrorCategory,
    errors::{Cause, ProjectedError, ProjectionError, ScheduledEventError, SourceError},
};
pub use projections::{ExceptionProjection, ScheduledEventExceptionProjection};
