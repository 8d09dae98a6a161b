//! In-memory answer store for testing.

use std::sync::{Arc, RwLock};

use semantic_module_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{ConfigValue, OptionKey, ResolvedConfig},
    error::ScaffoldResult,
};

/// Thread-safe in-memory [`ConfigStore`].
///
/// Clones share state, so a test can inspect what the orchestrator persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<RwLock<ResolvedConfig>>,
}

impl InMemoryConfigStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `values`, as if from a previous run.
    pub fn with_values(values: ResolvedConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(values)),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> ResolvedConfig {
        self.inner
            .read()
            .map(|values| values.clone())
            .unwrap_or_default()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn get(&self, key: OptionKey) -> ScaffoldResult<Option<ConfigValue>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { name: "config store" })?;
        Ok(inner.get(key).cloned())
    }

    fn get_all(&self) -> ScaffoldResult<ResolvedConfig> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { name: "config store" })?;
        Ok(inner.clone())
    }

    fn set(&self, key: OptionKey, value: ConfigValue) -> ScaffoldResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { name: "config store" })?;
        inner.set(key, value);
        Ok(())
    }

    fn set_all(&self, values: &ResolvedConfig) -> ScaffoldResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { name: "config store" })?;
        inner.merge(values);
        Ok(())
    }

    fn defaults(&self, values: &ResolvedConfig) -> ScaffoldResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { name: "config store" })?;
        inner.fill_defaults(values);
        Ok(())
    }
}
