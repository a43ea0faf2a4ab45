//! # trigger
//!
//! **trigger** is an in-process event dispatcher for Rust.
//!
//! Callers register named events with one or more handler closures, then fire
//! those events with arguments, either synchronously (ordered, blocking) or in
//! the background (concurrent, fire-and-forget). It is an observer / pub-sub
//! building block inside a single process, not a message broker.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   on("greet", |name: &str| ..)        on("greet", |name: &str| ..)
//!              │                                   │
//!              ▼                                   ▼
//!       Listener::new()  ── adapt closure ──►  { Signature, Fn(&Args) }
//!              │                                   │
//!              ▼                                   ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Registry                                                         │
//! │  - Mutex<HashMap<event, HandlerSet>>                              │
//! │  - HandlerSet { signature (first handler), [listener, ...] }      │
//! │  - Dispatcher (TaskTracker + optional runtime Handle)             │
//! └──────┬──────────────────────────────────────────────┬─────────────┘
//!        │ fire(event, args)                            │ fire_background(event, args)
//!        ▼                                              ▼
//!   lock → clone listeners → unlock               lock → clone listeners → unlock
//!   check args vs signature (panic)               check args vs signature (panic)
//!   listener1.call → listener2.call → ...         spawn_blocking per listener
//!   (caller thread, registration order)           (unordered, panics logged)
//! ```
//!
//! ### Failure model
//! ```text
//! recoverable (Err(TriggerError))      fatal (panic!)
//!   - InvalidHandlerKind                 - register with a different signature
//!   - EventNotFound                      - fire with wrong argument count/types
//!   - EmptyEventName
//!   - RuntimeUnavailable               silent (logged via tracing)
//!   - GraceExceeded                      - panic inside a background handler
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / functions                 |
//! |-------------------|--------------------------------------------------------------|---------------------------------------|
//! | **Registry**      | Register, fire, clear and inspect named events.              | [`Registry`], [`RegistryBuilder`]     |
//! | **Handlers**      | Any `Fn` of arity 0..=8, adapted at registration time.       | [`Handler`], [`Listener`]             |
//! | **Arguments**     | Opaque values checked against the recorded signature.        | [`Args`], [`Arg`], [`args!`]          |
//! | **Errors**        | Typed, recoverable registry errors.                          | [`TriggerError`]                      |
//! | **Configuration** | Shutdown grace for background handlers.                      | [`Config`]                            |
//! | **Default**       | Process-wide shared registry.                                | [`global`]                            |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use trigger::Registry;
//!
//! #[tokio::main(flavor = "multi_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reg = Registry::new();
//!     let greeted = Arc::new(AtomicUsize::new(0));
//!
//!     let g = greeted.clone();
//!     reg.on("greet", move |name: &str| {
//!         println!("hello, {name}");
//!         g.fetch_add(1, Ordering::SeqCst);
//!     })?;
//!
//!     // Blocks until every handler returned.
//!     reg.fire("greet", ("Ada",))?;
//!
//!     // Returns immediately; shutdown() waits for the launched handlers.
//!     reg.fire_background("greet", ("Grace",))?;
//!     reg.shutdown().await?;
//!
//!     assert_eq!(greeted.load(Ordering::SeqCst), 2);
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod handlers;

pub mod global;

// ---- Public re-exports ----

pub use config::Config;
pub use crate::core::{Registry, RegistryBuilder};
pub use error::TriggerError;
pub use handlers::{Arg, ArgMismatch, Args, Handler, Listener, Signature, TypeInfo};
