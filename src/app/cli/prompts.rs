//! Terminal questions backed by dialoguer.

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

pub struct DialoguerPrompter;

fn prompt_error(prompt: &str, err: dialoguer::Error) -> AppError {
    AppError::Prompt(format!("{}: {}", prompt, err))
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|err| prompt_error(prompt, err))
    }

    fn optional_input(
        &self,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let value = input.interact_text().map_err(|err| prompt_error(prompt, err))?;
        let value = value.trim();
        Ok(if value.is_empty() { None } else { Some(value.to_string()) })
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|err| prompt_error(prompt, err))?
            .ok_or_else(|| AppError::Prompt(format!("{}: cancelled", prompt)))
    }

    fn multi_select(
        &self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, AppError> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact_opt()
            .map_err(|err| prompt_error(prompt, err))?
            .ok_or_else(|| AppError::Prompt(format!("{}: cancelled", prompt)))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|err| prompt_error(prompt, err))
    }
}
