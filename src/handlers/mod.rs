//! # Handlers, signatures and arguments.
//!
//! This module provides everything that sits between a user closure and the
//! registry:
//! - [`Handler`] - implemented for every `Fn(A1..An) -> R` with `n <= 8`
//! - [`Listener`] - a handler adapted into a uniform `Fn(&Args)` wrapper
//! - [`Signature`] - recorded parameter/return shape, used for validation
//! - [`Arg`], [`Args`] - opaque argument values supplied at fire time
//!
//! ## Quick wiring
//! ```text
//! on(event, closure) ──► Listener::new(closure) ──► { Signature, Fn(&Args) }
//! fire(event, args)  ──► Signature::check(&args) ──► Listener::call(&args)
//! ```

mod args;
mod handler;
mod signature;

pub use args::{Arg, Args};
pub use handler::{Handler, Listener};
pub use signature::{ArgMismatch, Signature, TypeInfo};
