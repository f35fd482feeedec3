//! Context logger example
//!
//! Demonstrates enrichers, derived loggers and how a parent's level still
//! filters events written through its children.
//!
//! Run with: cargo run --example context_loggers

use rust_structured_logger::prelude::*;
use std::sync::Arc;

struct ThreadNameEnricher;

impl Enricher for ThreadNameEnricher {
    fn enrich(&self, event: &mut LogEvent, factory: &dyn LogEventPropertyFactory) -> Result<()> {
        let name = std::thread::current().name().unwrap_or("unnamed").to_string();
        event.add_property_if_absent(factory.create_property("ThreadName", name.into(), false)?);
        Ok(())
    }
}

struct PaymentService {
    log: Logger,
}

impl PaymentService {
    fn new(root: &Logger) -> Self {
        Self {
            log: root.for_source::<PaymentService>(),
        }
    }

    fn charge(&self, customer: &str, cents: u64) -> Result<()> {
        let request = self.log.for_property("Customer", customer, false)?;
        request.debug("Charging {Cents}", (cents,))?;
        request.info("Charged {Cents} cents", (cents,))
    }
}

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Context Loggers Example ===\n");

    let memory = Arc::new(MemorySink::new());
    let root = Logger::builder()
        .min_level(LogLevel::Information)
        .enrich_with(ThreadNameEnricher)
        .enrich_with_property("Service", "payments", false)
        .sink(ConsoleSink::new())
        .sink(Arc::clone(&memory))
        .on_dispose(|| println!("\n(root logger released its sinks)"))
        .build()?;

    println!("1. Writes through a derived logger:");
    let service = PaymentService::new(&root);
    service.charge("acme", 1999)?;

    println!("\n2. Debug events were filtered by the root, not the child:");
    for event in memory.events() {
        let names: Vec<&str> = event.properties().iter().map(|p| p.name()).collect();
        println!("   {} -> {:?}", event.level(), names);
    }

    println!("\n3. Disposing a derived logger does nothing to the root:");
    service.log.dispose();
    root.info("Root still writing", ())?;

    root.dispose();

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
