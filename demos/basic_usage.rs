//! Basic router usage example
//!
//! Demonstrates level-based configuration, prefix overrides and error checks.
//!
//! Run with: cargo run --example basic_usage [level]

use rust_level_router::prelude::*;
use rust_level_router::{log, warn};

fn main() -> Result<()> {
    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .unwrap_or(4);

    let router = LevelRouter::new();

    // Prefixes are captured when the channels are built, so set them first
    router.set_prefixes("default", "[+] ", "", "default");
    router.configure_by_level(level, false, true);

    // The first configuration wins
    if !router.configure_by_level(0, false, false) {
        router.debug("second configuration ignored");
    }

    router.debug("debug details");
    router.debug_np("    continuation without prefix");
    log!(router, "running at verbosity {}", Verbosity::from_level(level));
    router.log_np("    plain log line");
    warn!(router, "{} retries left", 2);

    let port = "80x".parse::<u16>();
    if router.check_and_log("parsing port", &port) {
        router.log("falling back to 8080");
    }

    let config = RouterConfig::from_json_str(r#"{ "level": 2 }"#)?;
    router.log(format!("parsed config for level {}", config.level));

    router.flush()?;

    // Terminates with status 1
    router.check_and_fatal("", &Err::<(), _>("demo finished with a fatal line"));
    Ok(())
}
