//! Background sink example
//!
//! Demonstrates moving file output onto a worker thread, with a bounded
//! queue and an overflow callback.
//!
//! Run with: cargo run --example background_sink

use rust_structured_logger::prelude::*;
use rust_structured_logger::sinks::BackgroundSink;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Background Sink Example ===\n");

    let path = std::env::temp_dir().join("structured_logger_demo.jsonl");
    let file = FileSink::new(&path)?.with_output_format(OutputFormat::Json);

    let background = BackgroundSink::builder(file)
        .capacity(1_000)
        .overflow_policy(OverflowPolicy::BlockWithTimeout(Duration::from_millis(50)))
        .on_overflow(Arc::new(|dropped| eprintln!("queue overflow, {} dropped", dropped)))
        .build()?;

    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .sink(background)
        .build()?;

    println!("1. Writing from 4 threads...");
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let log = logger.for_property("Worker", worker, false);
            thread::spawn(move || -> Result<()> {
                let log = log?;
                for i in 0..250 {
                    log.debug("Processed item {Index}", (i,))?;
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        if let Ok(Err(e)) = handle.join() {
            eprintln!("worker failed: {}", e);
        }
    }

    println!("2. Disposing logger (drains the queue)...");
    logger.dispose();

    let written = std::fs::read_to_string(&path)?.lines().count();
    println!("3. {} lines in {}", written, path.display());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
