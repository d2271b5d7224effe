use std::path::{Path, PathBuf};

use crate::{
    catalog::{ProviderKind, TEMPLATES, PROVIDERS},
    constants::{prompts, DEFAULT_DESCRIPTION, DEFAULT_TARGET_DIR},
    error::{Error, Result},
    ioutils::is_empty_dir,
    prompt::{ConfirmationConfig, PromptProvider, SingleChoiceConfig, TextPromptConfig},
    validation::{
        format_target_dir, is_valid_package_name, project_name_from_target,
        to_valid_package_name, validate_package_name,
    },
};

use super::types::Draft;

/// One step of option resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    ProjectName,
    Overwrite,
    PackageName,
    Description,
    Template,
    Provider,
    Model,
}

/// Steps in the order they are asked.
pub const QUESTIONS: &[Question] = &[
    Question::ProjectName,
    Question::Overwrite,
    Question::PackageName,
    Question::Description,
    Question::Template,
    Question::Provider,
    Question::Model,
];

/// Everything a question needs besides the draft.
pub struct QuestionContext<'a> {
    pub cwd: &'a Path,
    pub force: bool,
    pub prompter: &'a dyn PromptProvider,
}

impl QuestionContext<'_> {
    pub fn root(&self, target_dir: &str) -> PathBuf {
        self.cwd.join(target_dir)
    }

    pub fn project_name(&self, draft: &Draft) -> String {
        let target = draft.target_dir.as_deref().unwrap_or(DEFAULT_TARGET_DIR);
        project_name_from_target(target, self.cwd)
    }
}

impl Question {
    /// Whether this step still needs an answer.
    pub fn is_pending(&self, draft: &Draft, ctx: &QuestionContext) -> Result<bool> {
        Ok(match self {
            Question::ProjectName => draft.target_dir.is_none(),
            Question::Overwrite => {
                let target = draft.target_dir.as_deref().unwrap_or(DEFAULT_TARGET_DIR);
                let non_empty = !is_empty_dir(ctx.root(target))?;
                if non_empty && ctx.force {
                    log::debug!("Target '{target}' is not empty; --force approves clearing it");
                }
                draft.overwrite.is_none() && non_empty && !ctx.force
            }
            Question::PackageName => {
                draft.package_name.is_none() && !is_valid_package_name(&ctx.project_name(draft))
            }
            Question::Description => draft.description.is_none(),
            Question::Template => draft.template.is_none(),
            Question::Provider => draft.provider.is_none(),
            Question::Model => draft.model.is_none(),
        })
    }

    /// Asks the question and records the answer in `draft`.
    pub fn ask(&self, draft: &mut Draft, ctx: &QuestionContext) -> Result<()> {
        let prompter = ctx.prompter;
        match self {
            Question::ProjectName => {
                let answer = prompter.prompt_text(&TextPromptConfig {
                    prompt: prompts::PROJECT_NAME.to_string(),
                    default: Some(DEFAULT_TARGET_DIR.to_string()),
                    validator: None,
                })?;
                let target = format_target_dir(&answer);
                draft.target_dir = Some(if target.is_empty() {
                    DEFAULT_TARGET_DIR.to_string()
                } else {
                    target
                });
            }
            Question::Overwrite => {
                let target = draft.target_dir.as_deref().unwrap_or(DEFAULT_TARGET_DIR);
                let subject = if target == "." {
                    "Current directory".to_string()
                } else {
                    format!("Target directory \"{target}\"")
                };
                let confirmed = prompter.prompt_confirmation(&ConfirmationConfig {
                    prompt: format!("{subject} is not empty. Remove existing files and continue?"),
                    default: false,
                })?;
                if !confirmed {
                    return Err(Error::Cancelled);
                }
                draft.overwrite = Some(true);
            }
            Question::PackageName => {
                let answer = prompter.prompt_text(&TextPromptConfig {
                    prompt: prompts::PACKAGE_NAME.to_string(),
                    default: Some(to_valid_package_name(&ctx.project_name(draft))),
                    validator: Some(validate_package_name),
                })?;
                draft.package_name = Some(answer);
            }
            Question::Description => {
                let answer = prompter.prompt_text(&TextPromptConfig {
                    prompt: prompts::DESCRIPTION.to_string(),
                    default: Some(DEFAULT_DESCRIPTION.to_string()),
                    validator: None,
                })?;
                draft.description = Some(answer);
            }
            Question::Template => {
                let index = prompter.prompt_single_choice(&SingleChoiceConfig {
                    prompt: prompts::TEMPLATE.to_string(),
                    choices: TEMPLATES.iter().map(|t| t.choice_label()).collect(),
                    default_index: Some(0),
                })?;
                draft.template = Some(TEMPLATES[index].name.to_string());
            }
            Question::Provider => {
                let index = prompter.prompt_single_choice(&SingleChoiceConfig {
                    prompt: prompts::PROVIDER.to_string(),
                    choices: PROVIDERS.iter().map(|p| p.name.to_string()).collect(),
                    default_index: Some(0),
                })?;
                draft.provider = Some(PROVIDERS[index].kind);
            }
            Question::Model => {
                let provider = draft.provider.unwrap_or(ProviderKind::PRIMARY);
                draft.model = Some(ask_model(provider, prompter)?);
            }
        }
        Ok(())
    }
}

/// Select from the provider's models, or type one in when it has none.
pub fn ask_model(provider: ProviderKind, prompter: &dyn PromptProvider) -> Result<String> {
    let models = provider.descriptor().models;
    if models.is_empty() {
        return prompter.prompt_text(&TextPromptConfig {
            prompt: prompts::CUSTOM_MODEL.to_string(),
            default: Some(provider.default_model().to_string()),
            validator: Some(validate_model_identifier),
        });
    }
    let index = prompter.prompt_single_choice(&SingleChoiceConfig {
        prompt: prompts::MODEL.to_string(),
        choices: models.iter().map(|m| m.to_string()).collect(),
        default_index: Some(0),
    })?;
    Ok(models[index].to_string())
}

fn validate_model_identifier(model: &str) -> std::result::Result<(), String> {
    if model.trim().is_empty() || model.contains('\'') {
        Err("Model identifier must be non-empty and must not contain quotes".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AutomaticPrompter;

    #[test]
    fn questions_are_ordered() {
        assert_eq!(QUESTIONS.first(), Some(&Question::ProjectName));
        assert_eq!(QUESTIONS.last(), Some(&Question::Model));
    }

    #[test]
    fn answered_questions_are_not_pending() {
        let tmp = tempfile::tempdir().unwrap();
        let prompter = AutomaticPrompter::new();
        let ctx = QuestionContext {
            cwd: tmp.path(),
            force: false,
            prompter: &prompter,
        };
        let draft = Draft {
            target_dir: Some("agent".into()),
            description: Some("d".into()),
            template: Some("basic".into()),
            provider: Some(ProviderKind::Gemini),
            model: Some("m".into()),
            ..Default::default()
        };
        for question in QUESTIONS {
            assert!(!question.is_pending(&draft, &ctx).unwrap(), "{question:?}");
        }
    }

    #[test]
    fn invalid_project_name_makes_package_name_pending() {
        let tmp = tempfile::tempdir().unwrap();
        let prompter = AutomaticPrompter::new();
        let ctx = QuestionContext {
            cwd: tmp.path(),
            force: false,
            prompter: &prompter,
        };
        let draft = Draft {
            target_dir: Some("My Agent".into()),
            ..Default::default()
        };
        assert!(Question::PackageName.is_pending(&draft, &ctx).unwrap());

        let mut draft = draft;
        Question::PackageName.ask(&mut draft, &ctx).unwrap();
        assert_eq!(draft.package_name.as_deref(), Some("my-agent"));
    }

    #[test]
    fn empty_project_name_answer_uses_default() {
        let tmp = tempfile::tempdir().unwrap();
        let prompter = AutomaticPrompter::new().with_text_response(prompts::PROJECT_NAME, "  ");
        let ctx = QuestionContext {
            cwd: tmp.path(),
            force: false,
            prompter: &prompter,
        };
        let mut draft = Draft::default();
        Question::ProjectName.ask(&mut draft, &ctx).unwrap();
        assert_eq!(draft.target_dir.as_deref(), Some(DEFAULT_TARGET_DIR));
    }

    #[test]
    fn custom_provider_asks_for_free_text_model() {
        let prompter =
            AutomaticPrompter::new().with_text_response(prompts::CUSTOM_MODEL, "mistral/large");
        assert_eq!(ask_model(ProviderKind::Custom, &prompter).unwrap(), "mistral/large");
    }

    #[test]
    fn model_select_uses_provider_list() {
        let prompter = AutomaticPrompter::new().with_choice_response(prompts::MODEL, 2);
        assert_eq!(ask_model(ProviderKind::OpenAI, &prompter).unwrap(), "openai/gpt-4-turbo");
    }

    #[test]
    fn model_identifier_rejects_quotes() {
        assert!(validate_model_identifier("gpt'4").is_err());
        assert!(validate_model_identifier("").is_err());
        assert!(validate_model_identifier("gpt-4").is_ok());
    }
}
