//! Option resolution: flags, then interactive answers, then defaults.
//!
//! Resolution never touches the filesystem beyond reading the target
//! directory, so a cancelled run leaves everything as it was.

pub mod question;
pub mod types;

pub use question::{Question, QuestionContext, QUESTIONS};
pub use types::{Draft, Overrides, ResolvedConfig};

use std::path::Path;

use crate::{
    catalog::{ProviderKind, TemplateDescriptor},
    constants::{DEFAULT_DESCRIPTION, DEFAULT_TARGET_DIR},
    error::Result,
    ioutils::is_empty_dir,
    prompt::PromptProvider,
    validation::{format_target_dir, is_valid_package_name},
};

impl Draft {
    /// Seeds a draft from explicit values. Unknown provider keys are rejected here.
    pub fn from_overrides(overrides: &Overrides) -> Result<Self> {
        let provider = overrides
            .model_provider
            .as_deref()
            .map(str::parse::<ProviderKind>)
            .transpose()?;

        Ok(Self {
            target_dir: overrides
                .target_dir
                .as_deref()
                .map(format_target_dir)
                .filter(|dir| !dir.is_empty()),
            overwrite: None,
            package_name: None,
            description: overrides.description.clone(),
            template: overrides.template.clone(),
            provider,
            model: overrides.model.clone(),
        })
    }
}

/// Resolves the final configuration, asking `prompter` for whatever the
/// overrides leave open.
pub fn resolve_options(
    overrides: &Overrides,
    cwd: &Path,
    prompter: &dyn PromptProvider,
) -> Result<ResolvedConfig> {
    let mut draft = Draft::from_overrides(overrides)?;
    let ctx = QuestionContext {
        cwd,
        force: overrides.force,
        prompter,
    };

    for question in QUESTIONS {
        if question.is_pending(&draft, &ctx)? {
            log::debug!("Asking {question:?}");
            question.ask(&mut draft, &ctx)?;
        } else {
            log::trace!("Skipping {question:?}");
        }
    }

    finalize(draft, &ctx)
}

/// Fills the remaining gaps with defaults.
fn finalize(draft: Draft, ctx: &QuestionContext) -> Result<ResolvedConfig> {
    let project_name = ctx.project_name(&draft);
    let target_dir = draft.target_dir.unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string());
    let root = ctx.root(&target_dir);

    let overwrite = match draft.overwrite {
        Some(approved) => approved,
        None => ctx.force && !is_empty_dir(&root)?,
    };

    let package_name = draft.package_name.unwrap_or(project_name);
    if !is_valid_package_name(&package_name) {
        log::warn!("Package name '{package_name}' is not a valid package.json name");
    }

    let provider = draft.provider.unwrap_or(ProviderKind::PRIMARY);
    let model = draft.model.unwrap_or_else(|| provider.default_model().to_string());

    Ok(ResolvedConfig {
        target_dir,
        root,
        package_name,
        description: draft.description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        template: draft
            .template
            .unwrap_or_else(|| TemplateDescriptor::default_template().name.to_string()),
        provider,
        model,
        overwrite,
    })
}
