//! Tracing Setup
//!
//! Console tracing with env-filter control.
//!
//! # Configuration
//!
//! - `RUST_LOG`: Filter directives (default: `info`)
//! - `NODE_ENV`: Set to `development` for ANSI colors without targets
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_engine::telemetry::init_telemetry;
//!
//! #[tokio::main]
//! async fn main() {
//!     init_telemetry();
//!     // ... application code
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Initialize console tracing.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_telemetry() {
    let is_development = std::env::var("NODE_ENV")
        .map(|v| v == "development")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(!is_development)
        .with_ansi(is_development)
        .try_init();

    if result.is_ok() {
        tracing::info!("tracing initialized");
    }
}
