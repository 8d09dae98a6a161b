//! Persisted answer stores.

mod json_file;
mod memory;

pub use json_file::{DEFAULT_FILE_NAME, DEFAULT_NAMESPACE, JsonFileStore};
pub use memory::InMemoryConfigStore;
