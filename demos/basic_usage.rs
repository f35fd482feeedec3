//! Basic logger usage example
//!
//! Demonstrates templated writes to the console sink, the fixed minimum level
//! and a runtime level switch.
//!
//! Run with: cargo run --example basic_usage

use rust_structured_logger::prelude::*;
use rust_structured_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Basic Usage Example ===\n");

    let switch = LevelSwitch::new(LogLevel::Verbose);
    let logger = Logger::builder()
        .min_level(LogLevel::Verbose)
        .level_switch(switch.clone())
        .sink(ConsoleSink::new())
        .build()?;

    println!("1. Logging at different levels:");
    logger.verbose("This is a verbose message", ())?;
    logger.debug("This is a debug message", ())?;
    logger.info("Listening on port {Port}", (8080,))?;
    logger.warn("Disk {Mount} is {Percent}% full", ("/var", 91))?;
    logger.error("Request {RequestId} failed", ("r-17",))?;
    logger.fatal("Shutting down", ())?;

    println!("\n2. Raising the switch to Information - verbose and debug won't show:");
    switch.set_minimum_level(LogLevel::Information);
    logger.verbose("Verbose message (hidden)", ())?;
    logger.debug("Debug message (hidden)", ())?;
    info!(logger, "Info message (visible) from {Source}", "macro")?;
    warn!(logger, "Warning message (visible)")?;

    println!("\n3. Structured values:");
    let order = CaptureValue::map([
        ("Id", CaptureValue::from(1042)),
        ("Total", 99.5.into()),
        ("Items", CaptureValue::sequence(["book", "pen"])),
    ]);
    logger.info("Placed order {@Order}", order.clone())?;
    logger.info("Placed order {$Order}", order)?;

    println!("\n4. JSON output:");
    let json = Logger::builder()
        .sink(ConsoleSink::new().with_output_format(OutputFormat::Json))
        .build()?;
    json.info("User {UserId} signed in", (42,))?;

    logger.dispose();
    json.dispose();

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
