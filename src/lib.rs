pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::BisnodeClient;
pub use app::AppState;
pub use config::GatewayConfig;
pub use utils::error::{GatewayError, Result};
