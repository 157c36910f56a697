//! Scaffolds a frontend project from one of a fixed set of templates.
//!
//! [`run`] ties the pieces together: the [`args`] are [`resolver::resolve`]d
//! into a project name and template, the template directory is located through
//! [`config::TemplateDirs`] and then [`materialize::materialize`]d under the
//! current directory.

use std::path::{Path, PathBuf};

pub mod args;
pub mod config;
pub mod error;
pub mod log;
pub mod materialize;
pub mod paint;
pub mod prompt;
pub mod registry;
pub mod resolver;

pub use args::Args;
pub use error::ScaffoldError;
pub use materialize::Summary;
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use resolver::{Resolution, ResolvedChoice};

use config::TemplateDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--help` was given, nothing was written.
    Help(String),
    Created(Created),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub choice: ResolvedChoice,
    pub root: PathBuf,
    /// Where to `cd` to reach `root` from the working directory, `None` when
    /// the project was created in place.
    pub cd: Option<PathBuf>,
    pub summary: Summary,
}

/// Resolves `args` and creates the project under `cwd`.
///
/// # Errors
///
/// Fails when a prompt is cancelled, the template is unknown or missing, or
/// any filesystem operation fails. Already written files are left in place.
pub fn run(
    args: &Args,
    cwd: &Path,
    prompter: &mut dyn Prompter,
) -> Result<Outcome, ScaffoldError> {
    let choice = match resolver::resolve(args, prompter)? {
        Resolution::Help => return Ok(Outcome::Help(Args::help_text())),
        Resolution::Choice(choice) => choice,
    };

    let template = TemplateDirs::default_paths(args.templates_dir.clone())
        .locate(&choice.template_id)?;
    let root = cwd.join(&choice.project_name);

    info!("Scaffolding project in {}...", root.display());
    trace!("Using template at {}", template.display());

    let summary = materialize::materialize(&template, &root)?;
    let cd = relative_to(&root, cwd);

    Ok(Outcome::Created(Created {
        choice,
        root,
        cd,
        summary,
    }))
}

fn relative_to(root: &Path, cwd: &Path) -> Option<PathBuf> {
    let relative = root.strip_prefix(cwd).unwrap_or(root);

    (relative.components().next().is_some()).then(|| relative.to_path_buf())
}
