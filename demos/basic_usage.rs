//! Basic logger usage example
//!
//! Demonstrates the call-site macros, file sink selection and interception.
//!
//! Run with: cargo run --example basic_usage

use scoped_logger::prelude::*;
use scoped_logger::{log_debug, log_error, log_info, log_warn};

fn main() -> Result<()> {
    println!("=== Scoped Logger - Basic Usage Example ===\n");

    let logger = Logger::new();

    println!("1. Logging at different levels:");
    log_debug!(logger, "This is a debug message");
    log_info!(logger, "This is an info message");
    log_warn!(logger, "This is a warning message");
    log_error!(logger, "This is an error message");

    println!("\n2. Streaming values into a record:");
    log_info!(logger)
        .insert("connected to ")
        .insert("udp://:14540")
        .insert(" after ")
        .insert(3)
        .insert(" attempts")
        .close();

    println!("\n3. Interception (errors are swallowed):");
    logger.set_callback(|level, _message, _file, _line| level == LogLevel::Error);
    log_error!(logger, "You will not see this");
    log_info!(logger, "But you will see this");
    logger.clear_callback();

    println!("\n4. Logging to a file:");
    let path = std::env::temp_dir().join("scoped_logger_demo.log");
    logger.try_select_file_sink(&path)?;
    log_info!(logger, "This line goes to {}", path.display());
    logger.shutdown()?;
    println!("   Wrote to {}", path.display());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
