//! Dialoguer-based implementations of prompt interfaces
//!
//! Escape or `q` on a selection or confirmation aborts the run with
//! [`Error::Cancelled`], as does Ctrl-C on any prompt.

use super::interface::{
    ConfirmationConfig, MultipleChoiceConfig, SingleChoiceConfig, TextPromptConfig,
};
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(&config.prompt);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        if let Some(validator) = config.validator {
            input = input.validate_with(move |value: &String| validator(value));
        }

        Ok(input.interact_text()?)
    }
}

impl super::interface::SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.choices);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        select.interact_opt()?.ok_or(Error::Cancelled)
    }
}

impl super::interface::MultipleChoicePrompter for DialoguerPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults)
            .interact_opt()?
            .ok_or(Error::Cancelled)
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact_opt()?
            .ok_or(Error::Cancelled)
    }
}
