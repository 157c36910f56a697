use clap::{ArgAction, CommandFactory, Parser};
use owo_colors::{OwoColorize, Stream};
use std::{ffi::OsString, fmt::Write, path::PathBuf};

use crate::{paint::Painted, registry};

/// Scaffold a new Vue or React project from a template.
///
/// Without arguments the project name and template are asked for interactively.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "create-template",
    version,
    disable_help_flag = true,
    ignore_errors = true,
    after_help = templates_listing()
)]
pub struct Args {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Template to use, skipping the framework and variant prompts
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Directory holding the `template-<name>` directories [default: next to the executable]
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Print help
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Args {
    /// Parses the process arguments.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse_tokens(std::env::args_os())
    }

    /// Parses `tokens`, the first being the binary name.
    ///
    /// Unparseable input yields whatever could be matched, so a bad flag never
    /// stops the run. Matching stops at the first unknown flag: whatever follows
    /// it is dropped. `--version` prints and exits.
    pub fn parse_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(tokens) {
            Ok(args) => args,
            Err(e) if !e.use_stderr() => e.exit(),
            Err(_) => Self::default(),
        }
    }

    /// Usage text, including every known template. Styled only when stdout
    /// supports colours.
    #[must_use]
    pub fn help_text() -> String {
        let help = Self::command().render_help();

        help.to_string()
            .if_supports_color(Stream::Stdout, |_| help.ansi())
            .to_string()
    }
}

fn templates_listing() -> String {
    let width = registry::variants().map(|v| v.id.len()).max().unwrap_or(0);
    let mut listing = String::from("Available templates:\n");

    for variant in registry::variants() {
        let _ = writeln!(
            listing,
            "  {}{:pad$}  {}",
            Painted::new(variant.id, variant.hue),
            "",
            variant.display,
            pad = width - variant.id.len()
        );
    }

    listing
}
