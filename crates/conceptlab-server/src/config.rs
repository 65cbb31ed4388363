//! Server configuration
//!
//! Values come from Shuttle secrets in deployment; everything is read through
//! a single lookup function so tests can feed plain maps.

use std::time::Duration;

const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MAX_BATCH_SIZE: usize = 4;

/// Configuration for the ConceptLab API
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// OpenAI API key (blank values count as absent)
    pub openai_api_key: Option<String>,
    /// Whether to call the remote image generator at all
    pub image_generation: bool,
    /// Per-image timeout for the remote call
    pub image_timeout: Duration,
    pub image_model: String,
    pub openai_base_url: String,
    /// Upper clamp for the requested `count`
    pub max_batch_size: usize,
    /// Seed for reproducible table picks
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            image_generation: true,
            image_timeout: Duration::from_secs(DEFAULT_IMAGE_TIMEOUT_SECS),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            rng_seed: None,
        }
    }
}

impl ServerConfig {
    /// Build configuration from a key lookup (secrets store, env, map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let image_generation = match get("IMAGE_GENERATION_ENABLED") {
            Some(flag) => parse_flag(&flag).unwrap_or_else(|| {
                tracing::warn!(
                    "⚠️  Unrecognized IMAGE_GENERATION_ENABLED value '{}', keeping default",
                    flag
                );
                defaults.image_generation
            }),
            None => defaults.image_generation,
        };

        let image_timeout = get("IMAGE_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.image_timeout);

        let max_batch_size = get("MAX_BATCH_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_batch_size);

        Self {
            openai_api_key: get("OPENAI_API_KEY"),
            image_generation,
            image_timeout,
            image_model: get("OPENAI_IMAGE_MODEL").unwrap_or(defaults.image_model),
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openai_base_url),
            max_batch_size,
            rng_seed: get("CONCEPT_RNG_SEED").and_then(|s| s.parse().ok()),
        }
    }

    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// First seven characters of the key, for health output
    pub fn key_prefix(&self) -> String {
        match &self.openai_api_key {
            Some(key) => key.chars().take(7).collect(),
            None => "not set".to_string(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" | "enabled" => Some(true),
        "false" | "0" | "off" | "no" | "disabled" => Some(false),
        _ => None,
    }
}
