use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// One scripted answer.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Answer {
    Text(String),
    Index(usize),
    Indices(Vec<usize>),
    Yes,
    No,
    /// Accept the offered default.
    Default,
}

/// Prompter replaying answers in order and recording the questions asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub asked: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::new(Vec::new()) }
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(Answer::Default)
    }

    fn unexpected(prompt: &str, answer: &Answer) -> AppError {
        AppError::Prompt(format!("scripted answer {:?} does not fit prompt '{}'", answer, prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String, AppError> {
        match self.next(prompt) {
            Answer::Text(text) => Ok(text),
            Answer::Default => Ok(default.to_string()),
            other => Err(Self::unexpected(prompt, &other)),
        }
    }

    fn optional_input(
        &self,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        match self.next(prompt) {
            Answer::Text(text) if text.is_empty() => Ok(None),
            Answer::Text(text) => Ok(Some(text)),
            Answer::Default => Ok(default.map(str::to_string)),
            other => Err(Self::unexpected(prompt, &other)),
        }
    }

    fn select(&self, prompt: &str, _items: &[String], default: usize) -> Result<usize, AppError> {
        match self.next(prompt) {
            Answer::Index(index) => Ok(index),
            Answer::Default => Ok(default),
            other => Err(Self::unexpected(prompt, &other)),
        }
    }

    fn multi_select(
        &self,
        prompt: &str,
        _items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, AppError> {
        match self.next(prompt) {
            Answer::Indices(indices) => Ok(indices),
            Answer::Default => Ok(defaults
                .iter()
                .enumerate()
                .filter_map(|(index, selected)| selected.then_some(index))
                .collect()),
            other => Err(Self::unexpected(prompt, &other)),
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        match self.next(prompt) {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Default => Ok(default),
            other => Err(Self::unexpected(prompt, &other)),
        }
    }
}
