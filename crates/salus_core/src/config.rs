use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SalusConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl SalusConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SalusConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file doesn't exist, return defaults with
    /// env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SALUS_BASE_URL") {
            self.api.base_url = v;
        }
        if let Ok(v) = std::env::var("SALUS_MODEL") {
            self.api.model = v;
        }
        if let Ok(v) = std::env::var("SALUS_TIMEOUT_SECS") {
            if let Ok(n) = v.parse() {
                self.api.timeout_secs = n;
            }
        }
        if let Ok(v) = std::env::var("SALUS_TEMPERATURE") {
            if let Ok(n) = v.parse() {
                self.api.generation.temperature = n;
            }
        }
        if let Ok(v) = std::env::var("SALUS_MAX_OUTPUT_TOKENS") {
            if let Ok(n) = v.parse() {
                self.api.generation.max_output_tokens = n;
            }
        }
        if let Ok(v) = std::env::var("SALUS_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(v);
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Generative-language endpoint root, without a trailing slash.
    pub base_url: String,
    pub model: String,
    /// Hard request timeout; a hung remote call otherwise blocks the query
    /// indefinitely.
    pub timeout_secs: u64,
    pub generation: GenerationParams,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-pro".to_string(),
            timeout_secs: 60,
            generation: GenerationParams::default(),
        }
    }
}

/// Sampling parameters sent with every generateContent request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 800,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the key-value store files.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".salus"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = SalusConfig::default();
        assert!(cfg.api.base_url.contains("generativelanguage"));
        assert_eq!(cfg.api.model, "gemini-pro");
        assert_eq!(cfg.api.timeout_secs, 60);
        assert!((cfg.api.generation.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(cfg.api.generation.top_k, 40);
        assert!((cfg.api.generation.top_p - 0.95).abs() < f32::EPSILON);
        assert_eq!(cfg.api.generation.max_output_tokens, 800);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[api]
model = "gemini-1.5-flash"
"#;
        let cfg: SalusConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.api.model, "gemini-1.5-flash");
        // Defaults for unspecified fields
        assert_eq!(cfg.api.timeout_secs, 60);
        assert_eq!(cfg.api.generation.max_output_tokens, 800);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[api]
base_url = "http://localhost:8080/v1beta"
model = "test-model"
timeout_secs = 5

[api.generation]
temperature = 0.2
top_k = 10
top_p = 0.5
max_output_tokens = 256

[storage]
data_dir = "/tmp/salus-test"
"#;
        let cfg: SalusConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:8080/v1beta");
        assert_eq!(cfg.api.timeout_secs, 5);
        assert_eq!(cfg.api.generation.top_k, 10);
        assert_eq!(cfg.storage.data_dir, PathBuf::from("/tmp/salus-test"));
    }

    #[test]
    fn test_env_overrides_and_defaults() {
        // Part 1: env overrides
        std::env::set_var("SALUS_MODEL", "gemini-override");
        std::env::set_var("SALUS_TIMEOUT_SECS", "7");

        let mut cfg = SalusConfig::default();
        cfg.apply_env_overrides();

        assert_eq!(cfg.api.model, "gemini-override");
        assert_eq!(cfg.api.timeout_secs, 7);

        // Clean up env vars before testing defaults
        std::env::remove_var("SALUS_MODEL");
        std::env::remove_var("SALUS_TIMEOUT_SECS");

        // Part 2: nonexistent path returns defaults (no env interference)
        let cfg = SalusConfig::load_or_default("/nonexistent/path.toml");
        assert_eq!(cfg.api.model, "gemini-pro");
    }
}
