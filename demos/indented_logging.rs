//! Indented logging example
//!
//! Logs a small nested workflow to the console (colored) and to a plain
//! text file named `demo_YYYYMMDD.log` in the current directory.
//!
//! Run with: cargo run --example indented_logging

use tidy_logger::prelude::*;
use tidy_logger::{info, warning};

fn main() -> Result<()> {
    let logger = Logger::builder()
        .name("demo")
        .console_level(LogLevel::Debug)
        .file_name("demo")
        .build()?;

    info!(logger, "Starting import")?;

    let step = logger.indented(1);
    step.info("Reading configuration")?;
    step.nested().debug("3 sources configured")?;

    for source in ["alpha", "beta", "gamma"] {
        step.info(format!("Importing '{}'", source))?;
        if source == "beta" {
            warning!(logger, indent = 2; "{} rows skipped in '{}'", 4, source)?;
        }
    }

    logger.error("One source reported errors:\n  row 17: bad date\n  row 42: missing id")?;
    logger.critical("Import finished with failures")?;

    if let Some(path) = logger.file_path() {
        println!("\nFull log written to {}", path.display());
    }

    logger.close()
}
