//! `primecity-infra` — concrete storage adapters.
//!
//! Implements `primecity_core::KeyValueStore` for the media the access-control
//! layer can run on.

pub mod kv;

pub use kv::{InMemoryKeyValueStore, JsonFileStore};
