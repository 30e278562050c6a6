//! Basic logger usage example
//!
//! Demonstrates level selection, filtering and header templates on stdout.
//!
//! Run with: cargo run --example basic_usage

use stream_logger::prelude::*;
use stream_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Stream Logger - Basic Usage Example ===\n");

    let mut stdout = std::io::stdout();

    println!("1. Default header ([%L] %T), threshold Info:");
    {
        let mut logger = Logger::new(&mut stdout);
        logger.select_level(Level::Info).append(" service started");
        logger.select_level(Level::Debug).append(" (hidden)");
        logger
            .select_level(Level::Error)
            .append(" retries left: ")
            .append(&0);
        logger.append("\n");
    }

    println!("\n2. Custom header, threshold Debug:");
    {
        let mut logger = Logger::with_format(&mut stdout, Level::Debug, "%L: ");
        logger.select_level(Level::Debug).append("cache warmed");
        warning!(logger, "disk usage at {}%", 91);
        info!(logger, "ratio {:.2}", 0.756);
        logger.append("\n");
    }

    println!("\n3. From configuration:");
    {
        let config = LoggerConfig::new()
            .with_threshold(Level::Notice)
            .with_format("%T <%L> ")
            .with_timestamp_format(TimestampFormat::Iso8601);
        config.validate()?;

        let mut logger = Logger::from_config(&mut stdout, &config);
        logger.log(Level::Notice, "configured logger ready\n");
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
