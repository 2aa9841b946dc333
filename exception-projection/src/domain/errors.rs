use std::sync::Arc;
use thiserror::Error;

use super::category::ErrorCategory;

/// Shared link to the error that caused another one
pub type Cause = Arc<SourceError>;

/// Errors raised by upstream code, each optionally chained to its cause
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        cause: Option<Cause>,
    },

    #[error("The given key '{key}' was not present")]
    KeyNotFound {
        key: String,
        #[source]
        cause: Option<Cause>,
    },

    #[error("Attempted to divide by zero")]
    DivideByZero {
        #[source]
        cause: Option<Cause>,
    },

    #[error("Operation is not valid: {message}")]
    InvalidOperation {
        message: String,
        #[source]
        cause: Option<Cause>,
    },

    #[error(transparent)]
    ScheduledEvent(#[from] ScheduledEventError),

    #[error(transparent)]
    Projected(#[from] ProjectedError),

    #[error("{message}")]
    Other {
        category: &'static str,
        message: String,
        #[source]
        cause: Option<Cause>,
    },
}

impl SourceError {
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
            cause: None,
        }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound {
            key: key.into(),
            cause: None,
        }
    }

    pub fn divide_by_zero() -> Self {
        Self::DivideByZero { cause: None }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
            cause: None,
        }
    }

    pub fn other(category: &'static str, message: impl Into<String>) -> Self {
        Self::Other {
            category,
            message: message.into(),
            cause: None,
        }
    }

    /// Attach `cause` as the direct cause, replacing any existing one.
    pub fn with_cause(mut self, cause: Cause) -> Self {
        *self.cause_slot() = Some(cause);
        self
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Generic { .. } => ErrorCategory::Generic,
            Self::KeyNotFound { .. } => ErrorCategory::KeyNotFound,
            Self::DivideByZero { .. } => ErrorCategory::DivideByZero,
            Self::InvalidOperation { .. } => ErrorCategory::InvalidOperation,
            Self::ScheduledEvent(_) => ErrorCategory::ScheduledEvent,
            Self::Projected(_) => ErrorCategory::Projected,
            Self::Other { category, .. } => ErrorCategory::Other(*category),
        }
    }

    /// The direct cause of this error, if any
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Generic { cause, .. }
            | Self::KeyNotFound { cause, .. }
            | Self::DivideByZero { cause }
            | Self::InvalidOperation { cause, .. }
            | Self::Other { cause, .. } => cause.as_ref(),
            Self::ScheduledEvent(e) => e.cause(),
            Self::Projected(e) => e.cause(),
        }
    }

    /// Walk the cause chain, starting with `self`.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    fn cause_slot(&mut self) -> &mut Option<Cause> {
        match self {
            Self::Generic { cause, .. }
            | Self::KeyNotFound { cause, .. }
            | Self::DivideByZero { cause }
            | Self::InvalidOperation { cause, .. }
            | Self::Other { cause, .. } => cause,
            Self::ScheduledEvent(e) => &mut e.cause,
            Self::Projected(e) => &mut e.cause,
        }
    }
}

/// Iterator over a cause chain
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a SourceError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a SourceError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause().map(|cause| cause.as_ref());
        Some(current)
    }
}

/// Failure raised while a named scheduled event was running
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct ScheduledEventError {
    identifier: String,
    detail: String,
    #[source]
    cause: Option<Cause>,
}

impl ScheduledEventError {
    pub fn new(
        identifier: impl Into<String>,
        detail: impl Into<String>,
        cause: Option<Cause>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            detail: detail.into(),
            cause,
        }
    }

    /// Name of the scheduled event that failed
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

/// Error produced by a projection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProjectedError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl ProjectedError {
    pub fn new(message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn into_cause(self) -> Option<Cause> {
        self.cause
    }
}

/// Misuse of a projection by its caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("{projection} cannot project an error of category '{category}'")]
    UnsupportedCategory {
        projection: &'static str,
        category: ErrorCategory,
    },
}
