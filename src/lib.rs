pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::memory_store::InMemoryStore;
pub use crate::app::server::{build_store, TriviaServer};
pub use crate::config::{CliConfig, TomlConfig};
pub use crate::core::service::TriviaService;
pub use crate::utils::error::{Result, StoreError, TriviaError};
