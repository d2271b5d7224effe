//! Prompt provider that answers without user interaction.
//!
//! Used for `--non-interactive` runs, where every question takes its default,
//! and by tests, which script answers per prompt label.

use super::interface::*;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Automatic prompt provider that gives predefined responses
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: HashMap<String, String>,
    choice_responses: HashMap<String, usize>,
    multiple_choice_responses: HashMap<String, Vec<usize>>,
    confirmation_responses: HashMap<String, bool>,
    cancel_on: Vec<String>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Add a predefined choice response for a specific prompt
    pub fn with_choice_response(mut self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(prompt.to_string(), choice_index);
        self
    }

    /// Add a predefined multiple choice response for a specific prompt
    pub fn with_multiple_choice_response(
        mut self,
        prompt: &str,
        choice_indices: Vec<usize>,
    ) -> Self {
        self.multiple_choice_responses.insert(prompt.to_string(), choice_indices);
        self
    }

    /// Add a predefined confirmation response for a specific prompt
    pub fn with_confirmation_response(mut self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses.insert(prompt.to_string(), response);
        self
    }

    /// Behave as if the user pressed Escape on the prompt with this label.
    pub fn with_cancel_on(mut self, prompt: &str) -> Self {
        self.cancel_on.push(prompt.to_string());
        self
    }

    fn check_cancel(&self, prompt: &str) -> Result<()> {
        if self.cancel_on.iter().any(|label| label == prompt) {
            return Err(Error::Cancelled);
        }
        Ok(())
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.check_cancel(&config.prompt)?;
        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .ok_or_else(|| Error::MissingAnswer {
                prompt: config.prompt.clone(),
            })?;

        if let Some(validator) = config.validator {
            validator(&response).map_err(|message| {
                Error::ValidationError(format!("{message}: '{response}'"))
            })?;
        }

        log::debug!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}

impl SingleChoicePrompter for AutomaticPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        self.check_cancel(&config.prompt)?;
        let response = self
            .choice_responses
            .get(&config.prompt)
            .copied()
            .or(config.default_index)
            .unwrap_or(0);

        if response >= config.choices.len() {
            return Err(Error::MissingAnswer {
                prompt: config.prompt.clone(),
            });
        }

        log::debug!(
            "Auto-answering choice prompt '{}' with option {}: '{}'",
            config.prompt,
            response,
            config.choices[response]
        );
        Ok(response)
    }
}

impl MultipleChoicePrompter for AutomaticPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        self.check_cancel(&config.prompt)?;
        let response = self
            .multiple_choice_responses
            .get(&config.prompt)
            .cloned()
            .unwrap_or_else(|| {
                config
                    .defaults
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &selected)| selected.then_some(i))
                    .collect()
            });

        log::debug!(
            "Auto-answering multiple choice prompt '{}' with options: {:?}",
            config.prompt,
            response
        );
        Ok(response)
    }
}

impl ConfirmationPrompter for AutomaticPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.check_cancel(&config.prompt)?;
        let response = self
            .confirmation_responses
            .get(&config.prompt)
            .copied()
            .unwrap_or(config.default);

        log::debug!("Auto-answering confirmation '{}' with: {}", config.prompt, response);
        Ok(response)
    }
}
