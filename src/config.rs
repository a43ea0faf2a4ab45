//! # Registry configuration.
//!
//! Provides [`Config`], the settings a [`Registry`](crate::Registry) is built with.
//!
//! ## Sentinel values
//! - `grace = 0s` → [`Registry::shutdown`](crate::Registry::shutdown) does not wait

use std::time::Duration;

/// Registry settings.
///
/// ## Field semantics
/// - `grace`: maximum wait for background handlers during shutdown
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum time [`Registry::shutdown`](crate::Registry::shutdown) waits for
    /// background handlers before returning `TriggerError::GraceExceeded`.
    pub grace: Duration,
}

impl Config {
    /// Returns the shutdown grace as an `Option`.
    ///
    /// - `None` → do not wait
    /// - `Some(d)` → wait up to `d`
    #[inline]
    pub fn shutdown_grace(&self) -> Option<Duration> {
        if self.grace == Duration::ZERO {
            None
        } else {
            Some(self.grace)
        }
    }
}

impl Default for Config {
    /// Default configuration: `grace = 30s`.
    fn default() -> Self {
        Self {
            grace: Duration::from_secs(30),
        }
    }
}
