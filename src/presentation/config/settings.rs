use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub logging: LoggingSettings,
    pub scaffold: ScaffoldSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    /// Environment variable holding the API key. Read per request.
    pub api_key_env: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

/// Runs the service against a canned model instead of Gemini.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldSettings {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.toml`, the environment-specific
    /// file and `APP__SECTION__KEY` variables, in that order.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_upload_size_bytes", 1_073_741_824_u64)?
            .set_default(
                "gemini.base_url",
                crate::infrastructure::llm::GEMINI_BASE_URL,
            )?
            .set_default(
                "gemini.model",
                crate::application::services::DEFAULT_MODEL,
            )?
            .set_default(
                "gemini.temperature",
                f64::from(crate::application::services::DEFAULT_TEMPERATURE),
            )?
            .set_default("gemini.timeout_secs", 120)?
            .set_default(
                "gemini.api_key_env",
                crate::infrastructure::credentials::DEFAULT_API_KEY_ENV,
            )?
            .set_default("logging.level", "info,voicedesk=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .set_default("scaffold.enabled", false)?
            .set_default("scaffold.mock_response_delay_ms", 0)?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("scaffold.enabled", scaffold_mode_flag())?
            .set_override_option(
                "scaffold.mock_response_delay_ms",
                std::env::var("MOCK_RESPONSE_DELAY").ok(),
            )?;

        builder.build()?.try_deserialize()
    }
}

fn scaffold_mode_flag() -> Option<bool> {
    std::env::var("SCAFFOLD_MODE")
        .ok()
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}
