pub mod toml_config;

pub use toml_config::{BisnodeConfig, GatewayConfig, LoggingConfig, ServerConfig};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bisnode-gateway")]
#[command(about = "HTTP gateway for Bisnode directory and motor vehicle searches")]
pub struct CliConfig {
    #[arg(long, short, default_value = "config.toml")]
    pub config: String,

    #[arg(long, help = "Override server.bind_address from the config file")]
    pub bind: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file and applies the command line overrides on top of it.
    pub fn load(&self) -> crate::Result<GatewayConfig> {
        let mut config = GatewayConfig::from_file(&self.config)?;
        if let Some(bind) = &self.bind {
            config.server.bind_address = bind.clone();
        }
        if self.json_logs {
            config.logging.json = true;
        }
        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_overrides_file_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[bisnode]\nclient_id = \"c\"\nclient_secret = \"s\"\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "bisnode-gateway",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--bind",
            "127.0.0.1:9999",
            "--json-logs",
        ]);

        let config = cli.load().unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:9999");
        assert!(config.logging.json);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = CliConfig::parse_from(["bisnode-gateway"]);
        assert_eq!(cli.config, "config.toml");
        assert!(cli.bind.is_none());
        assert!(!cli.verbose);
    }
}
