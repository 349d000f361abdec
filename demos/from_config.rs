//! Declarative configuration example
//!
//! Builds the same pipeline twice: once straight from JSON, and once through
//! the builder so a capturing diagnostic sink can be injected.
//!
//! Run with: cargo run --example from_config

use logpipe::prelude::*;
use std::sync::Arc;

const PIPELINE: &str = r#"{
    "filters": [
        { "type": "substring", "pattern": "ERROR" },
        { "type": "regex", "pattern": "\\d+" }
    ],
    "handlers": [
        { "type": "console", "use_error_stream": true },
        { "type": "file", "path": "configured.log" }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== logpipe - Configuration Example ===\n");

    println!("1. Building a pipeline straight from JSON:");
    let config = PipelineConfig::from_json(PIPELINE)?;
    let logger = config.build()?;

    logger.log("ERROR: payment 1042 declined"); // passes both filters
    logger.log("ERROR with no digits (dropped)");
    println!(
        "   accepted={} filtered={}",
        logger.metrics().accepted_count(),
        logger.metrics().filtered_count()
    );

    println!("\n2. Same pipeline with captured diagnostics:");
    // An unreachable socket makes the failure path visible.
    let diagnostics = Arc::new(MemoryDiagnostics::new());
    let observed = PipelineConfig::from_json(
        r#"{ "handlers": [{ "type": "socket", "host": "127.0.0.1", "port": 9 }] }"#,
    )?
    .builder()?
    .diagnostics(Arc::clone(&diagnostics) as Arc<dyn DiagnosticSink>)
    .build();

    observed.log("this delivery will fail");
    for report in diagnostics.messages() {
        println!("   captured: {}", report);
    }

    println!("\n3. Construction errors surface before any message flows:");
    let bad = PipelineConfig::from_json(
        r#"{ "handlers": [{ "type": "socket", "host": "localhost", "port": 0 }] }"#,
    )?;
    match bad.build() {
        Ok(_) => println!("   unexpected: port 0 was accepted"),
        Err(err) => println!("   rejected as expected: {}", err),
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'configured.log' for the file output");

    Ok(())
}
