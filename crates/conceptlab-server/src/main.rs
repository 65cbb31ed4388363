use std::sync::Arc;

use conceptlab::{DomainError, RandomSource, SeededRandom, ThreadRandom};

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::OpenAiImageGenerator;
use application::{ConceptService, ImageBackend};
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub concepts: Arc<ConceptService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(concepts: ConceptService, config: ServerConfig) -> Self {
        Self {
            concepts: Arc::new(concepts),
            config: Arc::new(config),
        }
    }

    /// Wire the image backend and random source described by the configuration
    pub fn from_config(config: ServerConfig) -> Result<Self, DomainError> {
        let backend = match (config.image_generation, &config.openai_api_key) {
            (false, _) => {
                tracing::info!("🎨 Image generation disabled - placeholders only");
                ImageBackend::PlaceholderOnly
            }
            (true, Some(key)) => {
                let generator = OpenAiImageGenerator::new(
                    key.clone(),
                    config.image_model.clone(),
                    config.openai_base_url.clone(),
                    config.image_timeout,
                )?;
                tracing::info!(
                    "🎨 Image generator initialized ({}, timeout {:?})",
                    config.image_model,
                    config.image_timeout
                );
                ImageBackend::Remote(Arc::new(generator))
            }
            (true, None) => {
                tracing::warn!("⚠️  No OPENAI_API_KEY set - generate requests will fail");
                ImageBackend::Unconfigured
            }
        };

        let random: Arc<dyn RandomSource> = match config.rng_seed {
            Some(seed) => {
                tracing::info!("🎲 Seeded random source ({})", seed);
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        };

        let concepts = ConceptService::new(
            backend,
            random,
            config.image_timeout,
            config.max_batch_size,
        );
        Ok(Self::new(concepts, config))
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("💡 ConceptLab API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key));
    let state =
        AppState::from_config(config).map_err(|e| shuttle_runtime::Error::Custom(e.into()))?;

    let router = routes::app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ ConceptLab API ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_backend_follows_configuration() {
        let disabled = AppState::from_config(ServerConfig {
            image_generation: false,
            ..ServerConfig::default()
        })
        .unwrap();
        assert_eq!(disabled.concepts.backend().label(), "placeholder");

        let missing_key = AppState::from_config(ServerConfig::default()).unwrap();
        assert_eq!(missing_key.concepts.backend().label(), "unconfigured");

        let remote = AppState::from_config(ServerConfig {
            openai_api_key: Some("sk-test".to_string()),
            image_timeout: Duration::from_secs(2),
            rng_seed: Some(11),
            ..ServerConfig::default()
        })
        .unwrap();
        assert_eq!(remote.concepts.backend().label(), "remote");
    }
}
