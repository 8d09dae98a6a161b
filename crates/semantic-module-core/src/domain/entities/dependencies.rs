//! Development dependencies and the package-manager commands that install them.

use std::fmt;

use crate::domain::{
    entities::resolved_config::ResolvedConfig,
    error::DomainError,
    value_objects::{BASE_PACKAGES, ConfigValue, Packager},
};

/// Ordered list of packages to install as development dependencies.
///
/// Order is always: `commitizen`, `@commitlint/cli`, `husky`, the adapter,
/// then the commitlint config when one is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyList {
    packages: Vec<String>,
}

impl DependencyList {
    pub fn new(adapter: &str, commitlint_config: &ConfigValue) -> Self {
        let mut packages: Vec<String> = BASE_PACKAGES.iter().map(|p| (*p).to_string()).collect();
        packages.push(adapter.to_string());

        if commitlint_config.is_truthy() {
            if let Some(name) = commitlint_config.as_text() {
                packages.push(name.to_string());
            }
        }

        Self { packages }
    }

    pub fn from_config(config: &ResolvedConfig) -> Result<Self, DomainError> {
        Ok(Self::new(
            config.commitizen_adapter()?,
            config.commitlint_config()?,
        ))
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl fmt::Display for DependencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.packages.join(" "))
    }
}

/// A single package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallCommand {
    fn new(program: &str, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            program: program.to_string(),
            args: args.into_iter().collect(),
        }
    }

    /// Install `deps` as development dependencies.
    ///
    /// - npm:  `npm install <pkgs> --save-dev`
    /// - yarn: `yarn add <pkgs> --dev --ignore-workspace-root-check`
    pub fn add_dev(packager: Packager, deps: &DependencyList) -> Self {
        let packages = deps.packages().iter().cloned();
        match packager {
            Packager::Npm => Self::new(
                "npm",
                std::iter::once("install".to_string())
                    .chain(packages)
                    .chain(std::iter::once("--save-dev".to_string())),
            ),
            Packager::Yarn => Self::new(
                "yarn",
                std::iter::once("add".to_string()).chain(packages).chain([
                    "--dev".to_string(),
                    "--ignore-workspace-root-check".to_string(),
                ]),
            ),
        }
    }

    /// Install everything already listed in the manifest.
    pub fn install_all(packager: Packager) -> Self {
        Self::new(packager.as_str(), ["install".to_string()])
    }

    /// The full plan for one run: the dev install, then the general install.
    pub fn plan(packager: Packager, deps: &DependencyList) -> Vec<Self> {
        vec![Self::add_dev(packager, deps), Self::install_all(packager)]
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::OptionKey;

    #[test]
    fn includes_config_package_when_selected() {
        let deps = DependencyList::new(
            "@commitlint/prompt",
            &ConfigValue::text("@commitlint/config-angular"),
        );
        assert_eq!(
            deps.packages(),
            [
                "commitizen",
                "@commitlint/cli",
                "husky",
                "@commitlint/prompt",
                "@commitlint/config-angular",
            ]
        );
    }

    #[test]
    fn excludes_config_package_when_disabled() {
        let deps = DependencyList::new("cz-customizable", &ConfigValue::DISABLED);
        assert_eq!(
            deps.packages(),
            ["commitizen", "@commitlint/cli", "husky", "cz-customizable"]
        );
    }

    #[test]
    fn excludes_empty_config_name() {
        let deps = DependencyList::new("cz-customizable", &ConfigValue::text(""));
        assert_eq!(deps.len(), 4);
    }

    #[test]
    fn from_config_requires_adapter() {
        let config = ResolvedConfig::new().with(OptionKey::CommitlintConfig, "x");
        assert!(matches!(
            DependencyList::from_config(&config),
            Err(DomainError::MissingOption { .. })
        ));
    }

    #[test]
    fn npm_plan() {
        let deps = DependencyList::new("@commitlint/prompt", &ConfigValue::DISABLED);
        let plan = InstallCommand::plan(Packager::Npm, &deps);
        assert_eq!(
            plan[0].to_string(),
            "npm install commitizen @commitlint/cli husky @commitlint/prompt --save-dev"
        );
        assert_eq!(plan[1].to_string(), "npm install");
    }

    #[test]
    fn yarn_plan() {
        let deps = DependencyList::new("cz-customizable", &ConfigValue::DISABLED);
        let plan = InstallCommand::plan(Packager::Yarn, &deps);
        assert_eq!(plan[0].program, "yarn");
        assert_eq!(plan[0].args.first().map(String::as_str), Some("add"));
        assert!(plan[0].args.contains(&"--dev".to_string()));
        assert!(plan[0].args.contains(&"--ignore-workspace-root-check".to_string()));
        assert_eq!(plan[1].to_string(), "yarn install");
    }
}
