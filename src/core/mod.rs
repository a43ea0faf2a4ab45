//! Registry core: handler storage and dispatch.
//!
//! The public API from this module is [`Registry`] and its [`RegistryBuilder`].
//!
//! Internal modules:
//! - [`registry`]: event map, registration, synchronous fire, introspection;
//! - [`dispatch`]: background launch, panic isolation and task tracking;
//! - [`builder`]: registry construction with optional runtime handle.

mod builder;
mod dispatch;
mod registry;

pub use builder::RegistryBuilder;
pub use registry::Registry;
