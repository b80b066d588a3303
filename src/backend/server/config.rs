/**
 * Server Configuration
 *
 * This module resolves the configuration the server starts with and holds
 * the server's timing constants.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent startup. A broken
 * config file or environment variable falls back to the defaults so the
 * control panel stays usable.
 */

use std::time::Duration;

use crate::shared::AppConfig;

/// How long `stop` waits for in-flight requests before closing the
/// listener forcibly
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Load the configuration, falling back to defaults on error
pub fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: listening on {}",
                config.socket_addr()
            );
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            tracing::warn!("Continuing with default configuration");
            AppConfig::default()
        }
    }
}
