//! Key/value adapters.
//!
//! Both adapters give last-writer-wins semantics: a read-modify-write cycle
//! in the caller is not isolated from other writers sharing the medium.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryKeyValueStore;
pub use json_file::JsonFileStore;
