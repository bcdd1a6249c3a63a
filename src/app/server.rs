use crate::adapters::http;
use crate::adapters::memory_store::InMemoryStore;
use crate::adapters::seed::SeedData;
use crate::core::service::TriviaService;
use crate::core::{ConfigProvider, QuestionStore};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds the question store the configuration asks for: seeded from a JSON
/// file when one is configured, empty otherwise.
pub fn build_store<C: ConfigProvider>(config: &C) -> Result<InMemoryStore> {
    match config.seed_file() {
        Some(path) => {
            tracing::info!("Seeding question store from {}", path);
            let seed = SeedData::from_file(path)?;
            Ok(InMemoryStore::from_seed(seed)?)
        }
        None => {
            tracing::warn!("No seed file configured, starting with an empty question store");
            Ok(InMemoryStore::new())
        }
    }
}

pub struct TriviaServer<S: QuestionStore + 'static> {
    service: Arc<TriviaService<S>>,
}

impl<S: QuestionStore + 'static> TriviaServer<S> {
    pub fn new(store: S) -> Self {
        Self {
            service: Arc::new(TriviaService::new(store)),
        }
    }

    pub fn service(&self) -> Arc<TriviaService<S>> {
        Arc::clone(&self.service)
    }

    /// Serves requests on `listener` until the process is stopped.
    pub async fn run(self, listener: TcpListener) -> Result<()> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("🚀 Trivia API listening on http://{}", addr);
        }

        axum::serve(listener, http::router(self.service)).await?;
        Ok(())
    }

    pub async fn bind_and_run<C: ConfigProvider>(self, config: &C) -> Result<()> {
        let listener = TcpListener::bind(config.bind_address()).await?;
        self.run(listener).await
    }
}
