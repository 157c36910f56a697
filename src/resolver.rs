//! Turns parsed arguments into a project name and template, asking only for
//! what the arguments leave open.

use crate::{
    args::Args,
    error::ScaffoldError,
    prompt::Prompter,
    registry::{self, Framework},
    trace,
};

pub const DEFAULT_PROJECT_NAME: &str = "project-name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChoice {
    pub project_name: String,
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Help,
    Choice(ResolvedChoice),
}

/// One step of the question pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage<T> {
    Resolved(T),
    Ask,
}

impl<T> Stage<T> {
    fn from_option(value: Option<T>) -> Self {
        value.map_or(Stage::Ask, Stage::Resolved)
    }

    fn or_ask(
        self,
        ask: impl FnOnce() -> Result<T, ScaffoldError>,
    ) -> Result<T, ScaffoldError> {
        match self {
            Stage::Resolved(value) => Ok(value),
            Stage::Ask => ask(),
        }
    }
}

/// Trims `raw` and strips trailing path separators. Returns `None` when
/// nothing is left.
#[must_use]
pub fn normalize_project_name(raw: &str) -> Option<String> {
    let name = raw
        .trim()
        .trim_end_matches(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR);

    (!name.is_empty()).then(|| name.to_string())
}

/// Resolves the project name and template id.
///
/// # Errors
///
/// [`ScaffoldError::UnknownTemplate`] for an unrecognized `--template`, before
/// anything is asked. [`ScaffoldError::Cancelled`] when a prompt is aborted.
pub fn resolve(args: &Args, prompter: &mut dyn Prompter) -> Result<Resolution, ScaffoldError> {
    if args.help {
        return Ok(Resolution::Help);
    }

    let name_stage = Stage::from_option(
        args.project_name
            .as_deref()
            .and_then(normalize_project_name),
    );

    let template_stage = match args.template.as_deref() {
        Some(id) => Stage::Resolved(
            registry::find_variant(id)
                .ok_or_else(|| ScaffoldError::UnknownTemplate {
                    id: id.to_string(),
                    known: registry::template_ids(),
                })?
                .id,
        ),
        None => Stage::Ask,
    };

    let project_name = name_stage.or_ask(|| {
        let answer = prompter.project_name(DEFAULT_PROJECT_NAME)?;
        Ok(normalize_project_name(&answer).unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()))
    })?;

    let template_id = template_stage.or_ask(|| {
        let framework = prompter.framework(registry::frameworks())?;
        variant_stage(framework).or_ask(|| Ok(prompter.variant(framework)?.id))
    })?;

    trace!("Resolved project `{project_name}` with template `{template_id}`");

    Ok(Resolution::Choice(ResolvedChoice {
        project_name,
        template_id: template_id.to_string(),
    }))
}

/// A framework without variants is its own template.
fn variant_stage(framework: &Framework) -> Stage<&'static str> {
    if framework.variants.is_empty() {
        Stage::Resolved(framework.id)
    } else {
        Stage::Ask
    }
}
