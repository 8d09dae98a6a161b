//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::{collections::HashSet, ffi::OsString};

use clap::{CommandFactory, Parser};
use semantic_module_core::domain::{Invocation, OptionKey};

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "create-semantic-module",
    bin_name = "create-semantic-module",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Set up commitizen, commitlint and husky in a JavaScript module",
    long_about = "create-semantic-module asks which packager, commitizen adapter and \
                  commitlint config to use, writes commitlint.config.js, patches \
                  package.json and installs the development dependencies.\n\n\
                  Answers are remembered in .yo-rc.json and offered as defaults \
                  on the next run.",
    after_help = "EXAMPLES:\n\
        \x20 create-semantic-module\n\
        \x20 create-semantic-module my-module --packager yarn\n\
        \x20 create-semantic-module --commitizen-adapter cz-customizable --yes\n\
        \x20 create-semantic-module --yes --skip-install",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Module directory, relative to the current directory.
    #[arg(
        value_name = "MODULE_NAME",
        help = "Module directory (defaults to the current directory)"
    )]
    pub module_name_arg: Option<String>,

    /// Same as the positional argument; wins when both are given.
    #[arg(
        long = "module-name",
        visible_alias = "moduleName",
        value_name = "NAME",
        help = "Module directory"
    )]
    pub module_name: Option<String>,

    /// Package manager. Skips the packager question.
    #[arg(long, value_name = "PACKAGER", help = "Package manager (npm or yarn)")]
    pub packager: Option<String>,

    /// Commitizen adapter package. Pre-selects the adapter question.
    #[arg(
        long = "commitizen-adapter",
        visible_alias = "commitizenAdapter",
        value_name = "PACKAGE",
        help = "Commitizen adapter (@commitlint/prompt or cz-customizable)"
    )]
    pub commitizen_adapter: Option<String>,

    /// Commitlint config package. Pre-selects the commitlint question.
    #[arg(
        long = "commitlint-config",
        visible_alias = "commitlintConfig",
        value_name = "PACKAGE",
        help = "Commitlint config to extend"
    )]
    pub commitlint_config: Option<String>,

    /// Write the files but do not run the package manager.
    #[arg(long = "skip-install", help = "Do not install dependencies")]
    pub skip_install: bool,

    /// Answer every question with its default.
    #[arg(short = 'y', long = "yes", help = "Accept all defaults without prompting")]
    pub yes: bool,
}

impl Cli {
    /// The raw invocation handed to the orchestrator.
    pub fn invocation(&self) -> Invocation {
        let mut invocation = Invocation::new();

        if let Some(name) = &self.module_name_arg {
            invocation = invocation.with_module_name_arg(name);
        }

        let options = [
            (OptionKey::ModuleName, &self.module_name),
            (OptionKey::Packager, &self.packager),
            (OptionKey::CommitizenAdapter, &self.commitizen_adapter),
            (OptionKey::CommitlintConfig, &self.commitlint_config),
        ];
        for (key, value) in options {
            if let Some(value) = value {
                invocation = invocation.with_option(key, value);
            }
        }

        invocation
    }
}

/// Command-line arguments with unrecognized long options removed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FilteredArgs {
    pub kept: Vec<OsString>,
    /// Names of the dropped options, without the leading `--`.
    pub ignored: Vec<String>,
}

/// Drop `--name` options that [`Cli`] does not define.
///
/// `--name=value` is dropped whole. `--name value` drops the value too
/// unless it starts with `-`. Everything after `--` is kept as is, and the
/// first element (the program name) is never inspected.
pub fn filter_unknown_options<I, T>(args: I) -> FilteredArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let known = known_long_options();
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut out = FilteredArgs::default();
    out.kept.extend(args.next());

    while let Some(arg) = args.next() {
        if arg == "--" {
            out.kept.push(arg);
            out.kept.extend(args.by_ref());
            break;
        }

        let unknown = arg
            .to_str()
            .and_then(|text| text.strip_prefix("--"))
            .map(|long| long.split_once('=').map_or((long, false), |(name, _)| (name, true)))
            .filter(|(name, _)| !name.is_empty() && !known.contains(*name))
            .map(|(name, inline)| (name.to_string(), inline));

        let Some((name, inline)) = unknown else {
            out.kept.push(arg);
            continue;
        };

        let takes_next = !inline
            && args
                .peek()
                .is_some_and(|next| !next.to_string_lossy().starts_with('-'));
        if takes_next {
            args.next();
        }
        out.ignored.push(name);
    }

    out
}

fn known_long_options() -> HashSet<String> {
    let command = Cli::command();
    let mut known: HashSet<String> = ["help", "version"].map(String::from).into();
    for arg in command.get_arguments() {
        known.extend(arg.get_long().map(String::from));
        known.extend(
            arg.get_all_aliases()
                .unwrap_or_default()
                .into_iter()
                .map(String::from),
        );
    }
    known
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("create-semantic-module").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn positional_module_name() {
        let inv = parse(&["foo"]).invocation();
        assert_eq!(inv.module_name(), Some("foo"));
    }

    #[test]
    fn flag_module_name_wins() {
        let inv = parse(&["foo", "--module-name", "bar"]).invocation();
        assert_eq!(inv.module_name(), Some("bar"));
    }

    #[test]
    fn camel_case_aliases() {
        let inv = parse(&["--commitizenAdapter", "cz-customizable", "--commitlintConfig", "x"])
            .invocation();
        assert_eq!(inv.flag(OptionKey::CommitizenAdapter), Some("cz-customizable"));
        assert_eq!(inv.flag(OptionKey::CommitlintConfig), Some("x"));
        assert_eq!(inv.flag(OptionKey::Packager), None);
    }

    #[test]
    fn packager_flag_is_recorded() {
        let inv = parse(&["--packager", "yarn"]).invocation();
        assert_eq!(inv.flag(OptionKey::Packager), Some("yarn"));
    }

    fn filter(args: &[&str]) -> FilteredArgs {
        filter_unknown_options(std::iter::once("create-semantic-module").chain(args.iter().copied()))
    }

    #[test]
    fn unknown_option_and_its_value_are_dropped() {
        let filtered = filter(&["--yes", "--frobnicate", "x", "--packager", "yarn"]);
        assert_eq!(filtered.ignored, vec!["frobnicate"]);
        assert_eq!(
            filtered.kept,
            ["create-semantic-module", "--yes", "--packager", "yarn"].map(OsString::from)
        );

        let cli = Cli::try_parse_from(filtered.kept).unwrap();
        assert_eq!(cli.invocation().module_name(), None);
        assert_eq!(cli.invocation().flag(OptionKey::Packager), Some("yarn"));
    }

    #[test]
    fn unknown_option_before_a_flag_keeps_the_flag() {
        let filtered = filter(&["--frobnicate", "--skip-install", "foo"]);
        assert_eq!(filtered.ignored, vec!["frobnicate"]);
        let cli = Cli::try_parse_from(filtered.kept).unwrap();
        assert!(cli.skip_install);
        assert_eq!(cli.invocation().module_name(), Some("foo"));
    }

    #[test]
    fn inline_value_does_not_swallow_the_next_argument() {
        let filtered = filter(&["--frobnicate=1", "foo"]);
        assert_eq!(filtered.ignored, vec!["frobnicate"]);
        let cli = Cli::try_parse_from(filtered.kept).unwrap();
        assert_eq!(cli.invocation().module_name(), Some("foo"));
    }

    #[test]
    fn known_options_and_aliases_are_kept() {
        let args = [
            "--commitizenAdapter=cz-customizable",
            "--module-name",
            "bar",
            "--no-color",
            "--help",
        ];
        let filtered = filter(&args);
        assert!(filtered.ignored.is_empty());
        assert_eq!(filtered.kept.len(), args.len() + 1);
    }

    #[test]
    fn arguments_after_double_dash_are_untouched() {
        let filtered = filter(&["--", "--frobnicate"]);
        assert!(filtered.ignored.is_empty());
        assert_eq!(filtered.kept.len(), 3);
    }

    #[test]
    fn yes_and_skip_install() {
        let cli = parse(&["-y", "--skip-install"]);
        assert!(cli.yes);
        assert!(cli.skip_install);
    }
}
