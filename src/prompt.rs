//! Interactive prompting for missing configuration values.

use anyhow::Context;
use std::io::{BufRead, Write};

/// Source of answers to configuration questions.
pub trait Prompt {
    /// Ask `question` and return the raw answer.
    fn ask(&mut self, question: &str) -> anyhow::Result<String>;
}

/// Prompt that writes questions to stderr and reads answers from stdin.
///
/// Questions go to stderr so stdout stays free for `--dry-run` output.
pub struct StdinPrompt<R> {
    input: R,
}

impl StdinPrompt<std::io::StdinLock<'static>> {
    pub fn new() -> Self {
        Self {
            input: std::io::stdin().lock(),
        }
    }
}

impl Default for StdinPrompt<std::io::StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinPrompt<R> {
    pub fn from_reader(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Prompt for StdinPrompt<R> {
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        let mut stderr = std::io::stderr().lock();
        write!(stderr, "{question}: ").context("Failed to write prompt")?;
        stderr.flush().context("Failed to write prompt")?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read answer from stdin")?;
        if read == 0 {
            anyhow::bail!("No answer for '{question}': input closed");
        }
        Ok(answer)
    }
}

/// Prompt that replays fixed answers and records the questions asked.
#[cfg(test)]
pub(crate) struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    questions: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub(crate) fn new<'a>(answers: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            answers: answers.into_iter().map(str::to_string).collect(),
            questions: Vec::new(),
        }
    }

    pub(crate) fn questions(&self) -> &[String] {
        &self.questions
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer for '{question}'"))
    }
}
