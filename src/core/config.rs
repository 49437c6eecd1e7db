use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment the client talks to. Each mode maps to exactly one base URL per API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Sandbox (UAT) environment
    #[default]
    Development,
    /// Live environment
    Production,
}

impl Mode {
    /// Base URL of the core banking API
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Development => "http://kuda-openapi-uat.kudabank.com/v2.1",
            Self::Production => "https://kuda-openapi.kuda.com/v2.1",
        }
    }

    /// Base URL of the partner (instant settlement) API
    pub const fn partner_base_url(self) -> &'static str {
        match self {
            Self::Development => "https://partners-uat.kudabank.com",
            Self::Production => "https://partners.kuda.com",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "sandbox" => Ok(Self::Development),
            "production" | "prod" | "live" => Ok(Self::Production),
            other => Err(ConfigError::InvalidConfiguration(format!(
                "Unknown mode '{}', expected 'development' or 'production'",
                other
            ))),
        }
    }
}

/// Credentials for the core banking API
#[derive(Debug, Clone)]
pub struct KudaConfig {
    pub email: String,
    pub api_key: Secret<String>,
    pub mode: Mode,
    pub base_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for KudaConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("KudaConfig", 4)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for KudaConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct KudaConfigHelper {
            email: String,
            api_key: String,
            #[serde(default)]
            mode: Mode,
            base_url: Option<String>,
        }

        let helper = KudaConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            email: helper.email,
            api_key: Secret::new(helper.api_key),
            mode: helper.mode,
            base_url: helper.base_url,
        })
    }
}

impl KudaConfig {
    /// Create a new configuration in development mode
    #[must_use]
    pub fn new(email: String, api_key: String) -> Self {
        Self {
            email,
            api_key: Secret::new(api_key),
            mode: Mode::Development,
            base_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_EMAIL`
    /// - `{PREFIX}_API_KEY`
    /// - `{PREFIX}_MODE` (optional, defaults to development)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let email = required_var(&format!("{}_EMAIL", prefix))?;
        let api_key = required_var(&format!("{}_API_KEY", prefix))?;

        Ok(Self {
            email,
            api_key: Secret::new(api_key),
            mode: mode_var(&format!("{}_MODE", prefix))?,
            base_url: env::var(format!("{}_BASE_URL", prefix)).ok(),
        })
    }

    /// Load a `.env` file (if present) and then read the environment
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Like [`Self::from_env_file`], with a custom file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        load_env_file(env_file_path)?;
        Self::from_env(prefix)
    }

    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the base URL derived from the mode
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn has_credentials(&self) -> bool {
        !self.email.is_empty() && !self.api_key.expose_secret().is_empty()
    }

    pub fn effective_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.mode.base_url().to_string())
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Credentials for the partner instant settlement API
#[derive(Debug, Clone)]
pub struct SettlementConfig {
    pub secret_key: Secret<String>,
    pub client_password: Secret<String>,
    pub mode: Mode,
    pub base_url: Option<String>,
}

impl Serialize for SettlementConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SettlementConfig", 4)?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("client_password", "[REDACTED]")?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl SettlementConfig {
    #[must_use]
    pub fn new(secret_key: String, client_password: String) -> Self {
        Self {
            secret_key: Secret::new(secret_key),
            client_password: Secret::new(client_password),
            mode: Mode::Development,
            base_url: None,
        }
    }

    /// Reads `{PREFIX}_SETTLEMENT_SECRET_KEY`, `{PREFIX}_SETTLEMENT_CLIENT_PASSWORD`,
    /// `{PREFIX}_MODE` and `{PREFIX}_SETTLEMENT_BASE_URL`.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let secret_key = required_var(&format!("{}_SETTLEMENT_SECRET_KEY", prefix))?;
        let client_password = required_var(&format!("{}_SETTLEMENT_CLIENT_PASSWORD", prefix))?;

        Ok(Self {
            secret_key: Secret::new(secret_key),
            client_password: Secret::new(client_password),
            mode: mode_var(&format!("{}_MODE", prefix))?,
            base_url: env::var(format!("{}_SETTLEMENT_BASE_URL", prefix)).ok(),
        })
    }

    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        load_env_file(".env")?;
        Self::from_env(prefix)
    }

    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn effective_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.mode.partner_base_url().to_string())
    }
}

/// HTTP-level settings shared by both transports
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Request timeout in seconds (connect and read)
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: default_user_agent(),
        }
    }
}

impl TransportConfig {
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

pub fn default_user_agent() -> String {
    format!("kuda-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnvironmentVariable(name.to_string()))
}

fn mode_var(name: &str) -> Result<Mode, ConfigError> {
    env::var(name).map_or(Ok(Mode::Development), |value| value.parse())
}

#[cfg(feature = "env-file")]
fn load_env_file(env_file_path: &str) -> Result<(), ConfigError> {
    match dotenv::from_path(env_file_path) {
        Ok(_) => Ok(()),
        // No file is fine, fall back to the process environment
        Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ConfigError::InvalidConfiguration(format!(
            "Failed to load .env file '{}': {}",
            env_file_path, e
        ))),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
