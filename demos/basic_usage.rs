//! Basic pipeline usage example
//!
//! Demonstrates three loggers with different filter chains routing into a
//! shared set of handlers.
//!
//! Run with: cargo run --example basic_usage

use logpipe::log;
use logpipe::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== logpipe - Basic Usage Example ===\n");

    // Handlers shared between pipelines
    let console: Arc<dyn Handler> = Arc::new(ConsoleHandler::stdout());
    let error_file: Arc<dyn Handler> = Arc::new(FileHandler::new("errors.log")?);
    let audit_file: Arc<dyn Handler> = Arc::new(FileHandler::new("audit.log")?);

    // Only messages containing "ERROR" and at least one digit
    let errors = Logger::builder()
        .filter(SubstringFilter::new("ERROR"))
        .filter(RegexFilter::new(r"\d+")?)
        .shared_handler(Arc::clone(&console))
        .shared_handler(Arc::clone(&error_file))
        .build();

    // Only INFO-prefixed messages, to the audit trail and the syslog stub
    let audit = Logger::builder()
        .filter(LevelFilter::new("info")?)
        .shared_handler(Arc::clone(&audit_file))
        .handler(SyslogHandler::new())
        .build();

    // No filters: everything goes to the console
    let firehose = Logger::builder().shared_handler(Arc::clone(&console)).build();

    println!("1. Routing messages through the error pipeline:");
    errors.log("ERROR: Database connection failed (code 500)"); // passes both filters
    errors.log("ERROR: no digits, so this is dropped");
    errors.log("INFO: not an error, dropped immediately");

    println!("\n2. Routing messages through the audit pipeline:");
    audit.log("INFO: user 42 logged in");
    audit.log("DEBUG: cache warm-up details (dropped)");
    audit.log("INFO: nightly export finished");

    println!("\n3. The unfiltered pipeline forwards everything:");
    firehose.log("anything goes here");
    for i in 1..=3 {
        log!(firehose, "processing item {}/3", i);
    }

    println!("\n4. Pipeline metrics:");
    for (name, logger) in [("errors", &errors), ("audit", &audit), ("firehose", &firehose)] {
        let metrics = logger.metrics();
        println!(
            "   {}: accepted={} filtered={} delivered={} failed={} ({:.1}% failure)",
            name,
            metrics.accepted_count(),
            metrics.filtered_count(),
            metrics.delivered_count(),
            metrics.failed_count(),
            metrics.failure_rate(),
        );
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'errors.log' and 'audit.log' for the file output");

    Ok(())
}
