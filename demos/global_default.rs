//! # Example: global_default
//!
//! Uses the process-wide default registry through `trigger::global`, without
//! constructing a `Registry`.
//!
//! ## Run
//! ```bash
//! cargo run --example global_default
//! ```

use trigger::{global, Listener, TriggerError};

fn main() -> Result<(), TriggerError> {
    global::on("config.reloaded", |path: &str, version: u32| {
        println!("[config] reloaded {path} (v{version})");
    })?;

    // Type-erased registration: only a Listener is accepted.
    let audit = Listener::new(|path: &str, version: u32| {
        println!("[audit] {path} -> v{version}");
    });
    global::on_any("config.reloaded", Box::new(audit))?;

    match global::on_any("config.reloaded", Box::new("not callable")) {
        Err(e) => println!("[{}] {}", e.as_label(), e),
        Ok(()) => unreachable!("a &str is not a listener"),
    }

    global::fire("config.reloaded", ("app.toml", 7_u32))?;
    println!("events: {:?}", global::events());

    global::clear_events();
    println!("event count after clear: {}", global::event_count());
    Ok(())
}
