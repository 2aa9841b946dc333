pub mod scheduled_event;

use crate::domain::{
    category::ErrorCategory,
    errors::{ProjectedError, ProjectionError, SourceError},
};

pub use scheduled_event::{scheduled_event_message, ScheduledEventExceptionProjection};

/// One case in a chain of error handlers: recognizes a single category
/// and rewrites errors of that category into a [`ProjectedError`].
///
/// Callers must check [`can_project`](Self::can_project) before calling
/// [`project`](Self::project). Calling `project` on any other category is
/// a caller bug and yields [`ProjectionError::UnsupportedCategory`].
pub trait ExceptionProjection: Send + Sync {
    fn name(&self) -> &'static str;

    /// The exact category this projection handles
    fn category(&self) -> ErrorCategory;

    fn can_project(&self, error: &SourceError) -> bool {
        error.category() == self.category()
    }

    fn project(&self, error: &SourceError) -> Result<ProjectedError, ProjectionError>;
}
