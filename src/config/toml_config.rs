use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.bisnode.no";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub bisnode: BisnodeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Credentials and endpoint of the upstream provider.
#[derive(Clone, Serialize, Deserialize)]
pub struct BisnodeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

// Keeps the secret out of `{:?}` output in logs.
impl std::fmt::Debug for BisnodeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BisnodeConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GatewayConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GatewayError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GatewayError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders from the environment; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("server.bind_address", &self.server.bind_address)
    }

    pub fn validate_config(&self) -> Result<()> {
        self.bind_address()?;
        self.bisnode.validate()
    }
}

impl BisnodeConfig {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for BisnodeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("bisnode.base_url", &self.base_url)?;
        validation::validate_resolved("bisnode.client_id", &self.client_id)?;
        validation::validate_resolved("bisnode.client_secret", &self.client_secret)?;
        validation::validate_non_empty_string("bisnode.client_id", &self.client_id)?;
        validation::validate_non_empty_string("bisnode.client_secret", &self.client_secret)?;
        validation::validate_positive_number("bisnode.timeout_seconds", self.timeout_seconds, 1)
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let toml_content = r#"
[bisnode]
client_id = "client"
client_secret = "secret"
"#;

        let config = GatewayConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.bisnode.base_url, "https://api.bisnode.no");
        assert_eq!(config.bisnode.timeout(), Duration::from_secs(30));
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
bind_address = "127.0.0.1:3000"

[bisnode]
base_url = "http://localhost:9000/"
client_id = "client"
client_secret = "secret"
timeout_seconds = 5

[logging]
level = "debug"
json = true
"#;

        let config = GatewayConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address().unwrap().port(), 3000);
        assert_eq!(config.bisnode.timeout(), Duration::from_secs(5));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GATEWAY_TEST_CLIENT_ID", "from-env");

        let toml_content = r#"
[bisnode]
client_id = "${GATEWAY_TEST_CLIENT_ID}"
client_secret = "${GATEWAY_TEST_UNSET_SECRET}"
"#;

        let config = GatewayConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.bisnode.client_id, "from-env");
        assert_eq!(config.bisnode.client_secret, "${GATEWAY_TEST_UNSET_SECRET}");
        assert!(matches!(
            config.validate(),
            Err(GatewayError::MissingConfig { .. })
        ));

        std::env::remove_var("GATEWAY_TEST_CLIENT_ID");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[server]
bind_address = "not-an-address"

[bisnode]
client_id = "client"
client_secret = "secret"
"#;
        let config = GatewayConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let mut config = GatewayConfig::from_toml_str(
            "[bisnode]\nclient_id = \"c\"\nclient_secret = \"s\"\nbase_url = \"invalid-url\"\n",
        )
        .unwrap();
        assert!(config.validate().is_err());

        config.bisnode.base_url = DEFAULT_BASE_URL.to_string();
        config.bisnode.client_secret = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_bisnode_section_fails_to_parse() {
        let err = GatewayConfig::from_toml_str("[server]\n").unwrap_err();
        assert!(matches!(err, GatewayError::Config { .. }));
    }

    #[test]
    fn test_debug_output_hides_secret() {
        let config = BisnodeConfig::new(DEFAULT_BASE_URL, "client", "top-secret");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("client"));
        assert!(!rendered.contains("top-secret"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
bind_address = "127.0.0.1:8081"

[bisnode]
client_id = "file-client"
client_secret = "file-secret"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = GatewayConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bisnode.client_id, "file-client");
        assert_eq!(config.server.bind_address, "127.0.0.1:8081");
    }
}
