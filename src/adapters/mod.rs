// Adapters layer: concrete implementations for external systems (store, seed data, http).

pub mod http;
pub mod memory_store;
pub mod seed;
