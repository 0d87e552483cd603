//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `netpulse_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use netpulse_core::{MemorySlotStore, OperatorCatalog, TextContainer};

fn main() {
    println!("netpulse_core ping={}", netpulse_core::ping());
    println!("netpulse_core version={}", netpulse_core::core_version());

    let catalog = OperatorCatalog::new(MemorySlotStore::new());
    let mut container = TextContainer::new();
    match catalog
        .initialize()
        .and_then(|_| catalog.render_into(&mut container))
    {
        Ok(count) => {
            println!("seeded operators={count}");
            for line in container.lines() {
                println!("{line}");
            }
        }
        Err(err) => eprintln!("catalog error: {err}"),
    }
}
