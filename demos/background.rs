//! # Example: background
//!
//! Fire-and-forget dispatch on the tokio blocking pool, then a bounded wait
//! for the launched handlers via `Registry::shutdown`.
//!
//! Demonstrates how to:
//! - Launch handlers without waiting for them.
//! - Keep going when one handler panics (it is logged, not propagated).
//! - Wait for in-flight handlers with a grace period.
//!
//! ## Run
//! ```bash
//! RUST_LOG=trigger=trace cargo run --example background
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use trigger::{Config, Registry};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reg = Registry::builder(Config {
        grace: Duration::from_secs(2),
    })
    .build();
    let processed = Arc::new(AtomicUsize::new(0));

    let p = processed.clone();
    reg.on("job", move |id: u32, cost_ms: u64| {
        std::thread::sleep(Duration::from_millis(cost_ms));
        println!("[job] {id} done after {cost_ms}ms");
        p.fetch_add(1, Ordering::SeqCst);
    })?;
    reg.on("job", |id: u32, _cost_ms: u64| {
        if id == 3 {
            panic!("job {id} rejected");
        }
    })?;

    for id in 1..=5_u32 {
        reg.fire_background("job", (id, u64::from(6 - id) * 50))?;
    }
    println!("launched, pending={}", reg.pending_background());

    reg.shutdown().await?;
    println!("processed {} job(s)", processed.load(Ordering::SeqCst));
    Ok(())
}
