//! Integration tests for the create-semantic-module binary.

use std::{fs, path::Path};

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "name": "foo",
  "version": "1.0.0",
  "scripts": {
    "test": "jest"
  }
}
"#;

fn cmd_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("create-semantic-module");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn module_dir(manifest_in: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(sub) = manifest_in {
        let dir = temp.path().join(sub);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("package.json"), MANIFEST).unwrap();
    }
    temp
}

fn read_json(path: impl AsRef<Path>) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    cmd_in(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--packager"))
        .stdout(predicate::str::contains("--commitizen-adapter"))
        .stdout(predicate::str::contains("--commitlint-config"))
        .stdout(predicate::str::contains("--skip-install"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    cmd_in(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_option_is_ignored() {
    let temp = module_dir(Some("."));

    cmd_in(temp.path())
        .args(["--yes", "--skip-install", "--frobnicate", "x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("frobnicate"));

    assert!(temp.path().join("commitlint.config.js").exists());
    assert!(!temp.path().join("x").exists());
    let manifest = read_json(temp.path().join("package.json"));
    assert_eq!(manifest["scripts"]["commit"], "git-cz");
}

#[test]
fn test_defaults_in_current_directory() {
    let temp = module_dir(Some("."));

    cmd_in(temp.path())
        .args(["--yes", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commitlint.config.js"))
        .stdout(predicate::str::contains(
            "npm install commitizen @commitlint/cli husky @commitlint/prompt @commitlint/config-conventional --save-dev",
        ));

    let rendered = fs::read_to_string(temp.path().join("commitlint.config.js")).unwrap();
    assert!(rendered.contains(r#"const extendsConfig = "@commitlint/config-conventional";"#));
    assert!(!temp.path().join("commitizen.config.js").exists());

    let manifest = read_json(temp.path().join("package.json"));
    assert_eq!(manifest["scripts"]["commit"], "git-cz");
    assert_eq!(manifest["scripts"]["commit:retry"], "git-cz --retry");
    assert_eq!(manifest["scripts"]["commitmsg"], "commitlint -e");
    assert_eq!(manifest["scripts"]["test"], "jest");

    let rc = read_json(temp.path().join(".yo-rc.json"));
    assert_eq!(rc["generator-semantic-module"]["packager"], "npm");
}

#[test]
fn test_named_module_with_flags() {
    let temp = module_dir(Some("foo"));

    cmd_in(temp.path())
        .args([
            "foo",
            "--packager",
            "yarn",
            "--commitizenAdapter",
            "cz-customizable",
            "--commitlint-config",
            "none",
            "--yes",
            "--skip-install",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("yarn add"));

    let dir = temp.path().join("foo");
    assert!(dir.join("commitizen.config.js").exists());

    let manifest = read_json(dir.join("package.json"));
    assert_eq!(
        manifest["config"]["cz-customizable"]["config"],
        "commitizen.config.js"
    );

    let rc = read_json(dir.join(".yo-rc.json"));
    let ours = &rc["generator-semantic-module"];
    assert_eq!(ours["moduleName"], "foo");
    assert_eq!(ours["packager"], "yarn");
    assert_eq!(ours["commitizenAdapter"], "cz-customizable");
}

#[test]
fn test_custom_config_is_remembered() {
    let temp = module_dir(Some("."));

    cmd_in(temp.path())
        .args(["--commitlint-config", "@acme/commitlint-config", "-y", "--skip-install"])
        .assert()
        .success();

    // Second run, no flags: the stored custom config is the default again.
    cmd_in(temp.path())
        .args(["-y", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@acme/commitlint-config --save-dev"));

    let rendered = fs::read_to_string(temp.path().join("commitlint.config.js")).unwrap();
    assert!(rendered.contains(r#""@acme/commitlint-config""#));
}

#[test]
fn test_skip_install_from_environment() {
    let temp = module_dir(Some("."));

    cmd_in(temp.path())
        .env("SEMANTIC_MODULE_INSTALL__SKIP", "true")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped dependency installation"));
}

#[test]
fn test_missing_manifest_is_not_found() {
    let temp = module_dir(None);

    cmd_in(temp.path())
        .args(["--yes", "--skip-install"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("package.json"))
        .stderr(predicate::str::contains("npm init"));
}

#[test]
fn test_malformed_manifest_is_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{ not json").unwrap();

    cmd_in(temp.path())
        .args(["--yes", "--skip-install"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_malformed_store_is_configuration_error() {
    let temp = module_dir(Some("."));
    fs::write(temp.path().join(".yo-rc.json"), "[").unwrap();

    cmd_in(temp.path())
        .args(["--yes", "--skip-install"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(".yo-rc.json"));
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let temp = module_dir(Some("."));

    cmd_in(temp.path())
        .args(["--yes", "--skip-install", "--config", "nope.toml"])
        .assert()
        .code(4);
}

#[test]
fn test_quiet_suppresses_summary() {
    let temp = module_dir(Some("."));

    cmd_in(temp.path())
        .args(["--yes", "--skip-install", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
