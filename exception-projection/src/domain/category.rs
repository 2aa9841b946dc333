use std::fmt;

/// Discriminant identifying what kind of error a value is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Generic,
    KeyNotFound,
    DivideByZero,
    InvalidOperation,
    ScheduledEvent,
    Projected,
    /// Category raised by code this crate does not enumerate
    Other(&'static str),
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::KeyNotFound => "key_not_found",
            Self::DivideByZero => "divide_by_zero",
            Self::InvalidOperation => "invalid_operation",
            Self::ScheduledEvent => "scheduled_event",
            Self::Projected => "projected",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
