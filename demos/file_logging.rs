//! File logging demo
//!
//! Builds a logger that writes to stdout and tees JSON records into
//! `<crate root>/<destination>/router_log.json`.
//!
//! Usage: file_logging [destination] [level] [--pretty] [--debug]

use router_logging::prelude::*;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let config = LoggerConfig::new()
        .file_destination(positional.first().map(|s| s.as_str()).unwrap_or("target"))
        .level(positional.get(1).map(|s| s.as_str()).unwrap_or("info"))
        .pretty_logging(args.iter().any(|a| a == "--pretty"))
        .debug(args.iter().any(|a| a == "--debug"));

    let logger = config.build()?;

    logger.info("Router starting");
    logger.debug("Loading configuration");

    let request_logger = logger.with([with_request_id("4f1c2d")]);
    request_logger.info("Request received");
    request_logger.log_with_fields(
        LogLevel::Warn,
        "Subgraph slow to respond",
        vec![Field::string("subgraph", "products"), Field::int("latency_ms", 1200)],
    );
    request_logger.error("Request failed");

    logger.info("Router shutting down");
    logger.sync()?;

    Ok(())
}
