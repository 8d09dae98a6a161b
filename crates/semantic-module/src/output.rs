//! User-facing lines on stdout: the banner and the end-of-run summary.
//!
//! Errors are not printed here; see [`crate::error::CliError::render`].

use std::io;

use console::Term;
use owo_colors::OwoColorize;
use semantic_module_core::application::ScaffoldReport;

use crate::{cli::GlobalArgs, config::AppConfig};

/// Kind of line, which decides its marker and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Done,
    Note,
    Warn,
    Heading,
}

impl Tone {
    fn marker(self) -> Option<&'static str> {
        match self {
            Self::Done => Some("\u{2713}"),
            Self::Note => Some("\u{2139}"),
            Self::Warn => Some("!"),
            Self::Plain | Self::Heading => None,
        }
    }

    fn format(self, msg: &str, color: bool) -> String {
        let line = match self.marker() {
            Some(marker) => format!("{marker} {msg}"),
            None => msg.to_string(),
        };
        if !color {
            return line;
        }
        match self {
            Self::Plain => line,
            Self::Done => line.green().to_string(),
            Self::Note => line.blue().to_string(),
            Self::Warn => line.yellow().bold().to_string(),
            Self::Heading => line.cyan().bold().to_string(),
        }
    }
}

pub struct OutputManager {
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let term = Term::stdout();
        let color = !args.no_color && !config.output.no_color && term.features().colors_supported();
        Self {
            quiet: args.quiet,
            color,
            term,
        }
    }

    fn line(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&tone.format(msg, self.color))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.line(Tone::Warn, msg)
    }

    /// Greeting shown before the first question.
    pub fn banner(&self) -> io::Result<()> {
        self.line(Tone::Heading, "No bad commits for you!")?;
        self.line(
            Tone::Plain,
            "If you are unsure of which option to choose, go with the default.\n\
             You can always run create-semantic-module again and select a different option.\n",
        )
    }

    /// Files written, install outcome and how to commit.
    pub fn summary(&self, report: &ScaffoldReport) -> io::Result<()> {
        for path in &report.artifacts.written {
            let shown = path.strip_prefix(&report.destination).unwrap_or(path);
            self.line(Tone::Done, &format!("Wrote {}", shown.display()))?;
        }

        let packager = report.install.packager.as_str();
        if report.install.skipped {
            self.line(Tone::Note, "Skipped dependency installation. To install later, run:")?;
            for command in &report.install.commands {
                self.line(Tone::Plain, &format!("  {command}"))?;
            }
        } else {
            self.line(
                Tone::Done,
                &format!("Installed {} with {packager}", report.install.dependencies),
            )?;
        }

        let ready = match &report.module_name {
            Some(name) => format!("\n{name} is ready."),
            None => "\nReady.".to_string(),
        };
        self.line(Tone::Heading, &format!("{ready} Commit with `{packager} run commit`."))
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }
}
