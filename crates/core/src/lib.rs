//! `primecity-core` — shared primitives for the admin access-control layer.
//!
//! This crate contains **pure** building blocks (no concrete storage medium).

pub mod error;
pub mod id;
pub mod locale;
pub mod storage;

pub use error::{StorageError, StorageResult};
pub use id::AdminId;
pub use locale::Locale;
pub use storage::KeyValueStore;
