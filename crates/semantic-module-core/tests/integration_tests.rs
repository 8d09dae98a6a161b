//! Integration tests for semantic-module-core's public API.

use semantic_module_core::{
    domain::{CommitlintTemplate, DependencyList, PackageManifestPatch},
    prelude::*,
};
use serde_json::json;

#[test]
fn test_layers_override_in_order() {
    let persisted = ResolvedConfig::new()
        .with(OptionKey::Packager, "yarn")
        .with(OptionKey::CommitlintConfig, "@acme/config");

    let invocation = Invocation::new().with_flag("commitizen-adapter", "cz-customizable");

    let mut config = ResolvedConfig::builtin_defaults();
    config.merge(&persisted);
    config.merge(&ResolvedConfig::from_flags(invocation.flags()));

    assert_eq!(config.packager(), Packager::Yarn);
    assert_eq!(config.text(OptionKey::CommitizenAdapter), Some("cz-customizable"));
    assert_eq!(config.text(OptionKey::CommitlintConfig), Some("@acme/config"));
    assert!(config.ensure_complete().is_ok());
}

#[test]
fn test_disabled_config_flows_through_every_artifact() {
    let config = ResolvedConfig::builtin_defaults()
        .with(OptionKey::CommitizenAdapter, "cz-customizable")
        .with(OptionKey::CommitlintConfig, ConfigValue::DISABLED);

    let adapter = config.commitizen_adapter().unwrap();
    let template = CommitlintTemplate::for_adapter(adapter);
    let rendered =
        RenderContext::for_commitlint(config.commitlint_config().unwrap()).render(template.source());
    assert!(rendered.contains("const extendsConfig = false;"));
    assert!(rendered.contains("require('./commitizen.config.js')"));

    let deps = DependencyList::from_config(&config).unwrap();
    assert_eq!(
        deps.to_string(),
        "commitizen @commitlint/cli husky cz-customizable"
    );

    let commands = InstallCommand::plan(config.packager(), &deps);
    assert_eq!(commands[0].program, "npm");
    assert_eq!(commands[1].to_string(), "npm install");
}

#[test]
fn test_manifest_patch_keeps_foreign_fields() {
    let source = json!({
        "name": "foo",
        "version": "1.0.0",
        "scripts": { "test": "jest" },
        "config": { "other": true }
    })
    .to_string();

    let patch = PackageManifestPatch::for_adapter("@commitlint/prompt", "commitizen.config.js");
    let once = patch.apply_to_str(&source).unwrap();
    let twice = patch.apply_to_str(&once).unwrap();
    assert_eq!(once, twice);

    let value: serde_json::Value = serde_json::from_str(&once).unwrap();
    assert_eq!(value["name"], "foo");
    assert_eq!(value["scripts"]["test"], "jest");
    assert_eq!(value["scripts"]["commit"], "git-cz");
    assert_eq!(value["config"]["other"], true);
    assert_eq!(
        value["config"]["commitizen"]["path"],
        "node_modules/@commitlint/prompt"
    );
    assert!(once.ends_with("}\n"));
}

#[test]
fn test_custom_config_question_defaults() {
    let persisted = ConfigValue::text("@acme/config");
    let select = SelectQuestion::commitlint_config(Some(&persisted));
    assert_eq!(select.default.as_deref(), Some("custom"));

    let input = InputQuestion::custom_commitlint_config(Some(&persisted));
    assert_eq!(input.default.as_deref(), Some("@acme/config"));
}
