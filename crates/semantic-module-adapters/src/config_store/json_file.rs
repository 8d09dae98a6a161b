//! Answer store backed by a JSON file in the destination directory.
//!
//! The file holds one object per namespace:
//!
//! ```json
//! {
//!   "generator-semantic-module": {
//!     "moduleName": "foo",
//!     "packager": "npm",
//!     "commitizenAdapter": "@commitlint/prompt",
//!     "commitlintConfig": false
//!   }
//! }
//! ```
//!
//! Other namespaces and unknown keys inside ours are preserved. Every
//! mutation is written through to disk.

use std::{
    io,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Mutex,
};

use semantic_module_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{ConfigValue, OptionKey, ResolvedConfig},
    error::{ScaffoldError, ScaffoldResult},
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// File name used when none is configured.
pub const DEFAULT_FILE_NAME: &str = ".yo-rc.json";

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "generator-semantic-module";

#[derive(Debug, Error)]
enum StoreFileError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level value is not an object")]
    NotAnObject,
}

/// [`ConfigStore`] persisted as a namespaced JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    namespace: String,
    root: Mutex<Map<String, Value>>,
}

impl JsonFileStore {
    /// Open `<destination>/<file_name>`. A missing file starts empty.
    pub fn open(
        destination: &Path,
        file_name: &str,
        namespace: impl Into<String>,
    ) -> ScaffoldResult<Self> {
        Self::load(destination.join(file_name), namespace)
    }

    /// Open the store file at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, namespace: impl Into<String>) -> ScaffoldResult<Self> {
        let path = path.as_ref().to_path_buf();
        let root = read_root(&path).map_err(|e| store_error(&path, e))?;

        debug!(namespaces = root.len(), "Store loaded");
        Ok(Self {
            path,
            namespace: namespace.into(),
            root: Mutex::new(root),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn read_values(&self) -> ScaffoldResult<ResolvedConfig> {
        let root = self.lock()?;
        Ok(namespace_values(root.get(&self.namespace)))
    }

    /// Apply `update` to our namespace and write the file.
    fn update<F>(&self, update: F) -> ScaffoldResult<()>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let mut root = self.lock()?;

        let entry = root
            .entry(self.namespace.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            warn!(namespace = %self.namespace, "Replacing non-object namespace");
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(values) = entry {
            update(values);
        }

        write_root(&self.path, &root).map_err(|e| store_error(&self.path, e))
    }

    fn lock(&self) -> ScaffoldResult<std::sync::MutexGuard<'_, Map<String, Value>>> {
        self.root
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned { name: "config store" }.into())
    }
}

impl ConfigStore for JsonFileStore {
    fn get(&self, key: OptionKey) -> ScaffoldResult<Option<ConfigValue>> {
        Ok(self.read_values()?.get(key).cloned())
    }

    fn get_all(&self) -> ScaffoldResult<ResolvedConfig> {
        self.read_values()
    }

    #[instrument(skip_all, fields(key = %key))]
    fn set(&self, key: OptionKey, value: ConfigValue) -> ScaffoldResult<()> {
        self.update(|values| {
            values.insert(key.as_str().to_string(), to_json(&value));
        })
    }

    #[instrument(skip_all, fields(count = values.len()))]
    fn set_all(&self, values: &ResolvedConfig) -> ScaffoldResult<()> {
        self.update(|stored| {
            for (key, value) in values.iter() {
                stored.insert(key.as_str().to_string(), to_json(value));
            }
        })
    }

    #[instrument(skip_all)]
    fn defaults(&self, values: &ResolvedConfig) -> ScaffoldResult<()> {
        self.update(|stored| {
            for (key, value) in values.iter() {
                stored
                    .entry(key.as_str().to_string())
                    .or_insert_with(|| to_json(value));
            }
        })
    }
}

fn read_root(path: &Path) -> Result<Map<String, Value>, StoreFileError> {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(e.into()),
    };

    if source.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str(&source)? {
        Value::Object(root) => Ok(root),
        _ => Err(StoreFileError::NotAnObject),
    }
}

fn write_root(path: &Path, root: &Map<String, Value>) -> Result<(), StoreFileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(root)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

/// Known keys with string or boolean values; everything else is skipped.
fn namespace_values(namespace: Option<&Value>) -> ResolvedConfig {
    let Some(Value::Object(values)) = namespace else {
        return ResolvedConfig::new();
    };

    values
        .iter()
        .filter_map(|(key, value)| {
            let key = OptionKey::from_str(key).ok()?;
            let value = serde_json::from_value::<ConfigValue>(value.clone()).ok()?;
            Some((key, value))
        })
        .collect()
}

fn to_json(value: &ConfigValue) -> Value {
    match value {
        ConfigValue::Text(s) => Value::String(s.clone()),
        ConfigValue::Flag(b) => Value::Bool(*b),
    }
}

fn store_error(path: &Path, e: StoreFileError) -> ScaffoldError {
    ApplicationError::StoreError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
