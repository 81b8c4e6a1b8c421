use pixel_filter::{Adjustment, Filter, DEFAULT_AMOUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use utoipa::ToSchema;

use crate::error::ConfigError;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Hosts remote images may be fetched from. Empty allows any host.
    /// An entry of the form `*.example.com` matches every subdomain.
    #[serde(default)]
    pub allowed_hosts: Vec<String>,

    /// Timeout for remote image requests
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Largest encoded image accepted from any source
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,

    /// Largest width or height accepted after decoding
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    /// Named filter settings
    #[serde(default = "default_presets")]
    pub presets: HashMap<String, PresetConfig>,

    /// Preset used when a request names neither a filter nor a preset.
    /// Unset in YAML means `saturate` if that preset exists.
    #[serde(default)]
    pub default_preset: Option<String>,
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_max_source_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_max_dimension() -> u32 {
    8192
}

const DEFAULT_PRESET: &str = "saturate";

fn default_preset() -> Option<String> {
    Some(DEFAULT_PRESET.to_string())
}

fn default_presets() -> HashMap<String, PresetConfig> {
    [
        ("saturate", "saturation", 4.0),
        ("grayscale", "luminance-grayscale", DEFAULT_AMOUNT),
        ("brighten", "gamma-brightness", 0.7),
        ("punch", "contrast", 1.3),
        ("identity", "contrast", 1.0),
    ]
    .into_iter()
    .map(|(name, filter, amount)| {
        (
            name.to_string(),
            PresetConfig {
                filter: filter.to_string(),
                amount,
            },
        )
    })
    .collect()
}

fn default_amount() -> f32 {
    DEFAULT_AMOUNT
}

/// A named filter with a fixed amount
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, ToSchema)]
pub struct PresetConfig {
    /// Filter name, e.g. "saturation" or "luminance-grayscale"
    pub filter: String,

    /// Filter amount (default 1.0)
    #[serde(default = "default_amount")]
    pub amount: f32,
}

impl PresetConfig {
    pub fn adjustment(&self) -> Result<Adjustment, ConfigError> {
        let filter: Filter = self.filter.parse()?;
        Ok(Adjustment::new(filter).amount(self.amount))
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if config.default_preset.is_none() && config.presets.contains_key(DEFAULT_PRESET) {
            config.default_preset = default_preset();
        }
        if let Some(name) = &config.default_preset {
            if !config.presets.contains_key(name) {
                tracing::warn!(preset = %name, "Default preset is not defined");
            }
        }

        // Requests naming these presets will fail with UnknownFilter
        for (name, preset) in &config.presets {
            if let Err(e) = preset.adjustment() {
                tracing::warn!(preset = %name, %e, "Preset has an invalid filter");
            }
        }
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        presets = config.presets.len(),
                        allowed_hosts = config.allowed_hosts.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Whether the origin policy allows fetching from `host`
    pub fn is_host_allowed(&self, host: &str) -> bool {
        if self.allowed_hosts.is_empty() {
            return true;
        }
        let host = host.to_ascii_lowercase();
        self.allowed_hosts.iter().any(|allowed| {
            let allowed = allowed.to_ascii_lowercase();
            match allowed.strip_prefix("*.") {
                Some(domain) => host.ends_with(&format!(".{domain}")),
                None => host == allowed,
            }
        })
    }

    /// Resolve a request's filter selection into an [`Adjustment`].
    ///
    /// Precedence: an explicit preset, then an explicit filter, then the
    /// configured default preset. An explicit `amount` overrides the
    /// preset's amount.
    pub fn resolve_adjustment(
        &self,
        filter: Option<&str>,
        amount: Option<f32>,
        preset: Option<&str>,
    ) -> Result<Adjustment, ConfigError> {
        if let Some(amount) = amount {
            if !amount.is_finite() {
                return Err(ConfigError::InvalidAmount(amount));
            }
        }

        let base = match (preset, filter) {
            (Some(name), _) => self.preset(name)?.adjustment()?,
            (None, Some(filter)) => Adjustment::new(filter.parse()?),
            (None, None) => {
                let name = self.default_preset.as_deref().ok_or(ConfigError::NoFilter)?;
                self.preset(name)?.adjustment()?
            }
        };

        Ok(match amount {
            Some(amount) => base.amount(amount),
            None => base,
        })
    }

    fn preset(&self, name: &str) -> Result<&PresetConfig, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: Vec::new(),
            fetch_timeout_secs: default_fetch_timeout(),
            max_source_bytes: default_max_source_bytes(),
            max_dimension: default_max_dimension(),
            presets: default_presets(),
            default_preset: default_preset(),
        }
    }
}
