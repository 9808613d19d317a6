//! Layered Fixora configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`fixora.toml` shipped with the crate)
//! 2. `~/.config/fixora/fixora.toml`
//! 3. `./fixora.toml`
//! 4. `FIXORA_*` environment variables, `__` separating sections
//!    (`FIXORA_DEFAULTS__SCENE_COUNT=3`)

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Map};
use fixora_core::VideoConfig;
use fixora_error::{ConfigError, FixoraError, FixoraResult};
use fixora_models::GeminiClient;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../fixora.toml");

/// Gemini connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Model name passed to `generateContent`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// API root override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Top-level Fixora configuration.
///
/// # Example
///
/// ```no_run
/// use fixora::FixoraConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FixoraConfig::load()?;
/// println!("default video model: {}", config.defaults.model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixoraConfig {
    /// Gemini connection settings
    #[serde(default)]
    pub gemini: GeminiSettings,
    /// Video configuration used when the command line does not override it
    #[serde(default)]
    pub defaults: VideoConfig,
}

impl FixoraConfig {
    /// Load configuration from every layer.
    ///
    /// Missing user files are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a layer cannot be parsed or the merged
    /// defaults are out of range.
    #[instrument]
    pub fn load() -> FixoraResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            builder = builder.add_source(File::from(home_config_path(&home)).required(false));
        }

        builder = builder
            .add_source(File::with_name("fixora").required(false))
            .add_source(Self::environment(None));

        Self::finish(builder)
    }

    /// Load bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FixoraResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::bundled().add_source(File::from(path.as_ref())))
    }

    /// Load bundled defaults overlaid with TOML text.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text cannot be parsed.
    pub fn from_toml_str(toml: &str) -> FixoraResult<Self> {
        Self::finish(Self::bundled().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Gemini client configured from the `[gemini]` section.
    ///
    /// The API key is checked here, before any request is sent: a missing
    /// `GEMINI_API_KEY`/`API_KEY` fails locally with
    /// [`GeminiErrorKind::MissingApiKey`](fixora_error::GeminiErrorKind::MissingApiKey)
    /// instead of surfacing later as a 401/403 from the API.
    ///
    /// # Errors
    ///
    /// Fails when no API key is set in the environment.
    pub fn gemini_client(&self) -> FixoraResult<GeminiClient> {
        let mut client = GeminiClient::new()?;
        if let Some(model) = &self.gemini.model {
            client = client.with_model(model.clone());
        }
        if let Some(base_url) = &self.gemini.base_url {
            client = client.with_base_url(base_url.clone());
        }
        Ok(client)
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    /// `FIXORA_*` variables, read from `vars` instead of the process
    /// environment when given.
    fn environment(vars: Option<Map<String, String>>) -> Environment {
        Environment::with_prefix("FIXORA")
            .prefix_separator("_")
            .separator("__")
            .source(vars)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> FixoraResult<Self> {
        builder
            .build()
            .map_err(|e| {
                FixoraError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FixoraError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

/// `~/.config/fixora/fixora.toml` under `home`.
fn home_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("fixora").join("fixora.toml")
}
