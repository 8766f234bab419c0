//! Server startup utilities.

use roster_core::telemetry::{init_telemetry, TelemetryConfig};
use tracing::info;

/// Installs the global subscriber. A failure is reported on stderr, since no
/// subscriber exists to log it; returns whether one was installed.
pub fn init_logging(config: &TelemetryConfig) -> bool {
    match init_telemetry(config) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            false
        }
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____            __
   / __ \____  ____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Users API: http://{}/api/users/", addr);
    info!("Search:    http://{}/api/users/search?name=", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/api-docs/openapi.json", addr);
    info!("{}", separator);
}
