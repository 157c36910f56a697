//! Interactive questions asked while resolving a project.
//!
//! [`TerminalPrompter`] asks on the terminal; [`ScriptedPrompter`] answers
//! from a fixed script for non-interactive callers.

use inquire::{Select, Text};
use std::collections::VecDeque;

use crate::{
    error::ScaffoldError,
    registry::{Framework, Variant},
};

pub trait Prompter {
    /// Free-text project name, `default` being offered as the initial value.
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError>;

    /// Single choice among `frameworks`, the first one preselected.
    fn framework(
        &mut self,
        frameworks: &'static [Framework],
    ) -> Result<&'static Framework, ScaffoldError>;

    /// Single choice among the variants of `framework`, the first one preselected.
    fn variant(&mut self, framework: &'static Framework) -> Result<&'static Variant, ScaffoldError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError> {
        Ok(Text::new("Project name:").with_default(default).prompt()?)
    }

    fn framework(
        &mut self,
        frameworks: &'static [Framework],
    ) -> Result<&'static Framework, ScaffoldError> {
        Ok(Select::new("Select a framework:", frameworks.iter().collect())
            .with_starting_cursor(0)
            .prompt()?)
    }

    fn variant(&mut self, framework: &'static Framework) -> Result<&'static Variant, ScaffoldError> {
        Ok(Select::new("Select a variant:", framework.variants.iter().collect())
            .with_starting_cursor(0)
            .prompt()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    ProjectName,
    Framework,
    Variant,
}

/// Answers each question with the next scripted reply.
///
/// Selections are answered by identifier. A `None` reply cancels the prompt,
/// as does running out of replies.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Option<String>>,
    asked: Vec<Question>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reply(mut self, answer: impl Into<String>) -> Self {
        self.replies.push_back(Some(answer.into()));
        self
    }

    #[must_use]
    pub fn cancel(mut self) -> Self {
        self.replies.push_back(None);
        self
    }

    /// Questions asked so far, in order.
    #[must_use]
    pub fn asked(&self) -> &[Question] {
        &self.asked
    }

    fn next(&mut self, question: Question) -> Result<String, ScaffoldError> {
        self.asked.push(question);
        self.replies
            .pop_front()
            .flatten()
            .ok_or(ScaffoldError::Cancelled)
    }
}

impl Prompter for ScriptedPrompter {
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError> {
        let answer = self.next(Question::ProjectName)?;

        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn framework(
        &mut self,
        frameworks: &'static [Framework],
    ) -> Result<&'static Framework, ScaffoldError> {
        let answer = self.next(Question::Framework)?;

        frameworks
            .iter()
            .find(|f| f.id == answer)
            .ok_or_else(|| ScaffoldError::Prompt(format!("no framework named `{answer}`")))
    }

    fn variant(&mut self, framework: &'static Framework) -> Result<&'static Variant, ScaffoldError> {
        let answer = self.next(Question::Variant)?;

        framework
            .variants
            .iter()
            .find(|v| v.id == answer)
            .ok_or_else(|| {
                ScaffoldError::Prompt(format!("no `{}` variant named `{answer}`", framework.id))
            })
    }
}
