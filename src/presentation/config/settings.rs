use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const PORT_VAR: &str = "DOCLING_PORT";
pub const DEFAULT_PORT: u16 = 3200;
const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";
const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub converter: ConverterSettings,
    #[serde(default)]
    pub staging: StagingSettings,
    pub limits: LimitSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConverterSettings {
    pub engine: ConverterEngine,
    pub docling_binary: String,
    #[serde(default)]
    pub docling_args: Vec<String>,
    pub serve_url: Option<String>,
    pub serve_api_key: Option<String>,
    pub timeout_secs: u64,
    pub max_concurrent: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConverterEngine {
    DoclingCli,
    DoclingServe,
    PlainText,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StagingSettings {
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl ConverterSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl LimitSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(BYTES_PER_MB)
    }
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}`, `APP__*` variables
    /// and finally `DOCLING_PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let port = match std::env::var(PORT_VAR) {
            Ok(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                ConfigError::Message(format!("invalid {PORT_VAR} value {raw:?}: {e}"))
            })?),
            Err(_) => None,
        };

        Self::builder(environment)?
            .set_override_option("server.port", port)?
            .build()?
            .try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", DEFAULT_PORT)?
            .set_default("converter.engine", "docling_cli")?
            .set_default("converter.docling_binary", "docling")?
            .set_default("converter.docling_args", Vec::<String>::new())?
            .set_default("converter.timeout_secs", 300u64)?
            .set_default("converter.max_concurrent", 1u64)?
            .set_default("limits.max_upload_mb", 50u64)?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&environment.config_file_name()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .list_separator(" ")
                    .with_list_parse_key("converter.docling_args")
                    .try_parsing(true),
            ))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: DEFAULT_PORT,
            },
            converter: ConverterSettings {
                engine: ConverterEngine::DoclingCli,
                docling_binary: "docling".to_string(),
                docling_args: Vec::new(),
                serve_url: None,
                serve_api_key: None,
                timeout_secs: 300,
                max_concurrent: 1,
            },
            staging: StagingSettings { directory: None },
            limits: LimitSettings { max_upload_mb: 50 },
            logging: LoggingSettings { json: false },
        }
    }
}
