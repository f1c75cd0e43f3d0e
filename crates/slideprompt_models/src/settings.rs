//! Endpoint settings, read once per process.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use slideprompt_error::ConfigError;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// Default OpenAI-compatible API base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o";

static GLOBAL: OnceLock<GenerationSettings> = OnceLock::new();

/// Where and how to call the text-generation endpoint.
///
/// Sources in order of precedence (later sources override earlier):
/// 1. Built-in defaults ([`DEFAULT_API_BASE`], [`DEFAULT_MODEL`], empty key)
/// 2. `slideprompt.toml` in the current directory (optional)
/// 3. `OPENAI_API_KEY`, `OPENAI_API_BASE`, `OPENAI_MODEL`, `OPENAI_MAX_TOKENS`,
///    `OPENAI_TEMPERATURE`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerationSettings {
    /// Bearer token; empty means no `Authorization` header
    api_key: String,
    /// Base URL, e.g. `https://api.openai.com/v1`
    api_base: String,
    /// Model identifier
    model: String,
    /// Output token limit, endpoint default when unset
    #[serde(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature, endpoint default when unset
    #[serde(default)]
    temperature: Option<f32>,
}

impl GenerationSettings {
    /// Settings for `model` at the default API base.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: model.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the output token limit
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Load from defaults, `./slideprompt.toml` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source holds a value of the wrong type.
    #[instrument]
    pub fn load() -> Result<Self, ConfigError> {
        debug!("Loading generation settings: env > ./slideprompt.toml > defaults");
        Self::resolve(
            defaults()?
                .add_source(File::with_name("slideprompt").required(false))
                .add_source(environment(None)),
        )
    }

    /// Load from defaults, the given file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading generation settings from file");
        Self::resolve(
            defaults()?
                .add_source(File::from(path.as_ref()))
                .add_source(environment(None)),
        )
    }

    /// Process-wide settings, loaded on first use and never re-read.
    ///
    /// # Errors
    ///
    /// Returns an error if the first load fails; a later call retries.
    pub fn global() -> Result<&'static Self, ConfigError> {
        if let Some(settings) = GLOBAL.get() {
            return Ok(settings);
        }
        let loaded = Self::load()?;
        Ok(GLOBAL.get_or_init(|| loaded))
    }

    fn resolve(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        debug!(
            api_base = %settings.api_base,
            model = %settings.model,
            has_key = !settings.api_key.is_empty(),
            "Resolved generation settings"
        );
        Ok(settings)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api_key", "")
        .and_then(|b| b.set_default("api_base", DEFAULT_API_BASE))
        .and_then(|b| b.set_default("model", DEFAULT_MODEL))
        .map_err(|e| ConfigError::new(format!("Invalid default configuration: {}", e)))
}

fn environment(source: Option<config::Map<String, String>>) -> Environment {
    Environment::with_prefix("OPENAI")
        .try_parsing(true)
        .source(source)
}
