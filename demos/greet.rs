//! # Example: greet
//!
//! Minimal synchronous dispatch: two handlers for one event, fired in
//! registration order on the calling thread.
//!
//! ## Flow
//! ```text
//! on("greet", hello) ──► on("greet", count)
//!     └─► fire("greet", ("Ada",))
//!          ├─► hello("Ada")
//!          └─► count("Ada")
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example greet
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use trigger::{Registry, TriggerError};

fn main() -> Result<(), TriggerError> {
    tracing_subscriber::fmt()
        .with_env_filter("trigger=debug")
        .init();

    let reg = Registry::new();
    let greeted = Arc::new(AtomicUsize::new(0));

    // 1. First handler fixes the signature: fn(&str)
    reg.on("greet", |name: &str| println!("[hello] {name}"))?;

    // 2. Same signature, appended after the first one
    let counter = greeted.clone();
    reg.on("greet", move |_name: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
    })?;

    // 3. Blocks until both handlers returned
    reg.fire("greet", ("Ada",))?;
    reg.fire("greet", ("Grace",))?;

    println!("greeted {} time(s)", greeted.load(Ordering::SeqCst));
    println!("events: {:?}", reg.events());

    // 4. Unknown events are reported, not fatal
    if let Err(e) = reg.fire("farewell", ()) {
        println!("[{}] {}", e.as_label(), e);
    }
    Ok(())
}
