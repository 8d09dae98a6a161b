//! `package.json` patching.

use serde_json::{Map, Value, json};

use crate::domain::{
    error::DomainError,
    value_objects::CZ_CUSTOMIZABLE,
};

/// File name of the package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Fields merged into the destination `package.json`.
///
/// Merging happens one level deep: keys inside `config` and `scripts` are
/// overwritten, everything else in the manifest is left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifestPatch {
    config: Map<String, Value>,
    scripts: Map<String, Value>,
}

impl PackageManifestPatch {
    /// Build the patch for a commitizen adapter.
    ///
    /// `companion_config` is the file `cz-customizable` reads its settings
    /// from; it is only referenced when the adapter is `cz-customizable`.
    pub fn for_adapter(adapter: &str, companion_config: &str) -> Self {
        let mut config = Map::new();
        config.insert(
            "commitizen".into(),
            json!({ "path": format!("node_modules/{adapter}") }),
        );
        if adapter == CZ_CUSTOMIZABLE {
            config.insert(
                CZ_CUSTOMIZABLE.into(),
                json!({ "config": companion_config }),
            );
        }

        let mut scripts = Map::new();
        scripts.insert("commit".into(), json!("git-cz"));
        scripts.insert("commit:retry".into(), json!("git-cz --retry"));
        scripts.insert("commitmsg".into(), json!("commitlint -e"));

        Self { config, scripts }
    }

    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }

    pub fn scripts(&self) -> &Map<String, Value> {
        &self.scripts
    }

    /// Merge the patch into a parsed manifest.
    ///
    /// A `config` or `scripts` entry that is not an object is replaced.
    pub fn apply(&self, manifest: &mut Value) -> Result<(), DomainError> {
        let root = manifest
            .as_object_mut()
            .ok_or_else(|| DomainError::ManifestShape {
                file: MANIFEST_FILE.into(),
            })?;

        merge_section(root, "config", &self.config);
        merge_section(root, "scripts", &self.scripts);
        Ok(())
    }

    /// Parse `source`, apply the patch, and serialize with two-space indent
    /// and a trailing newline.
    pub fn apply_to_str(&self, source: &str) -> Result<String, DomainError> {
        let mut manifest: Value =
            serde_json::from_str(source).map_err(|e| DomainError::ManifestParse {
                file: MANIFEST_FILE.into(),
                reason: e.to_string(),
            })?;

        self.apply(&mut manifest)?;

        let mut out =
            serde_json::to_string_pretty(&manifest).map_err(|e| DomainError::ManifestParse {
                file: MANIFEST_FILE.into(),
                reason: e.to_string(),
            })?;
        out.push('\n');
        Ok(out)
    }
}

fn merge_section(root: &mut Map<String, Value>, name: &str, patch: &Map<String, Value>) {
    let section = root
        .entry(name)
        .or_insert_with(|| Value::Object(Map::new()));
    if !section.is_object() {
        *section = Value::Object(Map::new());
    }
    if let Value::Object(existing) = section {
        for (key, value) in patch {
            existing.insert(key.clone(), value.clone());
        }
    }
}
