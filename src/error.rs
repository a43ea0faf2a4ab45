//! Error types returned by the trigger registry.
//!
//! [`TriggerError`] covers **recoverable** failures only: they are returned to
//! the caller and leave the registry untouched. Contract violations (signature
//! or argument mismatches) are not errors; they panic.
//!
//! Every variant provides `as_label` (stable snake_case for logs/metrics) and
//! `as_message` (human-readable detail).

use std::time::Duration;
use thiserror::Error;

/// # Errors produced by registry operations.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriggerError {
    /// A dynamically registered value is not a [`Listener`](crate::Listener).
    #[error("task is not a function")]
    InvalidHandlerKind,

    /// No handlers are registered under this event name.
    #[error("no task found for event {event:?}")]
    EventNotFound {
        /// The requested event name.
        event: String,
    },

    /// Event names must be non-empty.
    #[error("event name must not be empty")]
    EmptyEventName,

    /// Background dispatch needs a tokio runtime and none is available.
    #[error("no tokio runtime available for background dispatch")]
    RuntimeUnavailable,

    /// Background handlers were still running when the shutdown grace expired.
    #[error("shutdown timeout {grace:?} exceeded; {pending} background handler(s) still running")]
    GraceExceeded {
        /// The configured grace duration.
        grace: Duration,
        /// Background tasks that had not finished.
        pending: usize,
    },
}

impl TriggerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use trigger::TriggerError;
    ///
    /// let err = TriggerError::EventNotFound { event: "greet".into() };
    /// assert_eq!(err.as_label(), "event_not_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TriggerError::InvalidHandlerKind => "invalid_handler_kind",
            TriggerError::EventNotFound { .. } => "event_not_found",
            TriggerError::EmptyEventName => "empty_event_name",
            TriggerError::RuntimeUnavailable => "runtime_unavailable",
            TriggerError::GraceExceeded { .. } => "grace_exceeded",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TriggerError::InvalidHandlerKind => "handler is not a listener".to_string(),
            TriggerError::EventNotFound { event } => format!("event not found: {event}"),
            TriggerError::EmptyEventName => "empty event name".to_string(),
            TriggerError::RuntimeUnavailable => "no tokio runtime".to_string(),
            TriggerError::GraceExceeded { grace, pending } => {
                format!("grace exceeded after {grace:?}; pending={pending}")
            }
        }
    }

    /// Indicates whether the error refers to a missing event.
    ///
    /// # Example
    /// ```
    /// use trigger::TriggerError;
    ///
    /// assert!(TriggerError::EventNotFound { event: "x".into() }.is_not_found());
    /// assert!(!TriggerError::EmptyEventName.is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(self, TriggerError::EventNotFound { .. })
    }
}
