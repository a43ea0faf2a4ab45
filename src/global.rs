//! # Process-wide default registry.
//!
//! Free functions with the same names and signatures as the [`Registry`]
//! methods, all forwarding to one shared instance. The instance is created on
//! first use and lives for the rest of the process; nothing tears it down, use
//! [`clear_events`] to reset it.
//!
//! Prefer an explicit [`Registry`] when components need isolation (tests,
//! libraries); this module exists for callers that are fine with global state.
//!
//! ```rust
//! trigger::global::on("app.started", || println!("started")).unwrap();
//! trigger::global::fire("app.started", ()).unwrap();
//! assert!(trigger::global::has_event("app.started"));
//! ```

use std::any::Any;
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{Args, Handler, Registry, TriggerError};

static DEFAULT: Lazy<Registry> = Lazy::new(Registry::new);

/// The shared default registry.
pub fn registry() -> &'static Registry {
    &DEFAULT
}

/// See [`Registry::on`].
pub fn on<H, P>(event: &str, handler: H) -> Result<(), TriggerError>
where
    H: Handler<P>,
{
    DEFAULT.on(event, handler)
}

/// See [`Registry::on_any`].
pub fn on_any(event: &str, value: Box<dyn Any + Send + Sync>) -> Result<(), TriggerError> {
    DEFAULT.on_any(event, value)
}

/// See [`Registry::fire`].
pub fn fire(event: &str, args: impl Into<Args>) -> Result<(), TriggerError> {
    DEFAULT.fire(event, args)
}

/// See [`Registry::fire_background`].
pub fn fire_background(event: &str, args: impl Into<Args>) -> Result<(), TriggerError> {
    DEFAULT.fire_background(event, args)
}

/// See [`Registry::clear`].
pub fn clear(event: &str) -> Result<(), TriggerError> {
    DEFAULT.clear(event)
}

/// See [`Registry::clear_events`].
pub fn clear_events() {
    DEFAULT.clear_events()
}

/// See [`Registry::has_event`].
pub fn has_event(event: &str) -> bool {
    DEFAULT.has_event(event)
}

/// See [`Registry::events`].
pub fn events() -> HashMap<String, String> {
    DEFAULT.events()
}

/// See [`Registry::event_count`].
pub fn event_count() -> usize {
    DEFAULT.event_count()
}
