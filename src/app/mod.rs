//! Application wiring: configuration in, running HTTP service out.

pub mod stats;

use std::sync::Arc;

use tracing::info;

use crate::adapter::http::ApiServer;
use crate::adapter::sqlite::{create_pool, run_migrations, SqliteBetStore};
use crate::adapter::vision::{Anthropic, OpenAi, SlipExtractor};
use crate::config::{Config, VisionProvider};
use crate::error::Result;
use crate::extract::Vocabulary;
use crate::port::{BetStore, VisionModel};

/// Shared handles every request handler needs.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BetStore>,
    pub extractor: Arc<SlipExtractor>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn BetStore>, extractor: Arc<SlipExtractor>) -> Self {
        Self { store, extractor }
    }
}

pub struct App;

impl App {
    /// Build the full application state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the database pool, migrations, vocabulary
    /// or vision client cannot be set up.
    pub fn build_state(config: &Config) -> Result<AppState> {
        let pool = create_pool(&config.database.url)?;
        run_migrations(&pool)?;
        let store: Arc<dyn BetStore> = Arc::new(SqliteBetStore::new(pool));

        Ok(AppState::new(store, Self::build_extractor(config)?))
    }

    /// Build just the extractor; the one-shot CLI path needs no
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary or vision client cannot be
    /// set up.
    pub fn build_extractor(config: &Config) -> Result<Arc<SlipExtractor>> {
        let vocabulary = Vocabulary::from_config(&config.vocabulary)?;
        let vision = Self::vision_client(config)?;
        Ok(Arc::new(SlipExtractor::new(vision, vocabulary)))
    }

    fn vision_client(config: &Config) -> Result<Arc<dyn VisionModel>> {
        let vision: Arc<dyn VisionModel> = match config.vision.provider {
            VisionProvider::Anthropic => Arc::new(
                Anthropic::from_env(config.vision.model.clone())?
                    .with_max_tokens(config.vision.max_tokens),
            ),
            VisionProvider::OpenAi => Arc::new(
                OpenAi::from_env(config.vision.model.clone())?
                    .with_max_tokens(config.vision.max_tokens),
            ),
        };
        Ok(vision)
    }

    /// Run the HTTP service until the task is cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if startup wiring or serving fails.
    pub async fn run(config: Config) -> Result<()> {
        let state = Self::build_state(&config)?;
        info!(bind = %config.server.bind, "hedgebook API starting");
        ApiServer::new(state).serve(&config.server.bind).await
    }
}
