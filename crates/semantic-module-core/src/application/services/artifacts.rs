//! Artifact writing - the third phase.
//!
//! Renders `commitlint.config.js`, copies `commitizen.config.js` when the
//! customizable adapter is selected, and patches `package.json`. Files
//! written before a failure stay on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{
        COMMITIZEN_CONFIG_FILE, COMMITLINT_CONFIG_FILE, CommitlintTemplate, MANIFEST_FILE,
        PackageManifestPatch, RenderContext, ResolvedConfig, commitizen_config_source,
    },
    error::ScaffoldResult,
};

/// Files produced by the writing phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub template: CommitlintTemplate,
    /// Paths written, in write order. The manifest is always last.
    pub written: Vec<PathBuf>,
}

/// Write every artifact for `config` into `destination`.
#[instrument(skip_all, fields(destination = %destination.display()))]
pub fn write_artifacts(
    config: &ResolvedConfig,
    destination: &Path,
    filesystem: &dyn Filesystem,
    renderer: &dyn TemplateRenderer,
) -> ScaffoldResult<ArtifactReport> {
    config.ensure_complete()?;

    let adapter = config.commitizen_adapter()?;
    let commitlint = config.commitlint_config()?;
    let template = CommitlintTemplate::for_adapter(adapter);
    let patch = PackageManifestPatch::for_adapter(adapter, COMMITIZEN_CONFIG_FILE);

    debug!(template = template.name(), adapter, "Template selected");

    filesystem.create_dir_all(destination)?;
    let mut written = Vec::with_capacity(3);

    if template.needs_companion() {
        let path = destination.join(COMMITIZEN_CONFIG_FILE);
        filesystem.write_file(&path, commitizen_config_source())?;
        written.push(path);
    }

    let rendered = renderer.render(template.source(), &RenderContext::for_commitlint(commitlint))?;
    let path = destination.join(COMMITLINT_CONFIG_FILE);
    filesystem.write_file(&path, &rendered)?;
    written.push(path);

    let manifest_path = destination.join(MANIFEST_FILE);
    let source = filesystem.read_to_string(&manifest_path)?;
    let patched = patch.apply_to_str(&source)?;
    filesystem.write_file(&manifest_path, &patched)?;
    written.push(manifest_path);

    info!(files = written.len(), "Artifacts written");
    Ok(ArtifactReport { template, written })
}
