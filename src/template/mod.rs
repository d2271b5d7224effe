//! Template materialization pipeline
//!
//! - `operation`: Defines operations to be performed on template entries
//! - `processor`: Recursive copy of a template tree with reserved-name renames
//! - `manifest`: Structured patch of the package manifest
//! - `placeholder`: Literal token and import-line substitution

pub mod manifest;
pub mod operation;
pub mod placeholder;
pub mod processor;

use std::path::{Path, PathBuf};

use crate::{
    catalog::{locate_template, provider::FRAMEWORK_MODULE},
    config::ResolvedConfig,
    constants::{files, placeholders, MANIFEST_FILE},
    error::Result,
    ioutils::prepare_target,
};

use self::{
    manifest::{manifest_name, write_manifest},
    placeholder::{replace_placeholders, ImportRewrite, PlaceholderMap, Substitution},
    processor::TemplateProcessor,
};

/// What a successful scaffold produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldOutcome {
    pub root: PathBuf,
    /// `name` from the written manifest.
    pub package_name: String,
    /// Every file written, manifest included.
    pub files: Vec<PathBuf>,
}

/// Edits applied to agent entry files: the model expression, and the import
/// line when the provider needs the LiteLLM wrapper.
pub fn entry_substitutions(config: &ResolvedConfig) -> Vec<Substitution> {
    let mut substitutions = vec![Substitution::Tokens(
        PlaceholderMap::new().with(placeholders::MODEL_CONFIG, config.model_config()),
    )];
    if let Some(statement) = config.provider.import_override() {
        substitutions.push(Substitution::Import(ImportRewrite::new(FRAMEWORK_MODULE, statement)));
    }
    substitutions
}

/// Edits applied to the README.
pub fn readme_substitutions(package_name: &str, description: &str) -> Vec<Substitution> {
    vec![Substitution::Tokens(
        PlaceholderMap::new()
            .with(placeholders::PROJECT_NAME, package_name)
            .with(placeholders::DESCRIPTION, description),
    )]
}

/// Runs target preparation, materialization, manifest patch and placeholder
/// substitution, in that order.
///
/// The template is located first, so an unknown template leaves the
/// filesystem untouched.
pub fn scaffold(config: &ResolvedConfig, templates_root: &Path) -> Result<ScaffoldOutcome> {
    let template_dir = locate_template(templates_root, &config.template)?;
    let root = prepare_target(&config.root, config.overwrite)?;

    let mut written =
        TemplateProcessor::new(template_dir.as_path(), root.as_path()).materialize()?;

    let manifest =
        write_manifest(&template_dir, &root, &config.package_name, &config.description)?;
    written.push(root.join(MANIFEST_FILE));
    let package_name =
        manifest_name(&manifest).unwrap_or(config.package_name.as_str()).to_string();

    replace_placeholders(
        &root,
        &[files::README],
        &readme_substitutions(&package_name, &config.description),
    )?;
    replace_placeholders(&root, &[files::ENTRY], &entry_substitutions(config))?;

    Ok(ScaffoldOutcome {
        root,
        package_name,
        files: written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::provider::LITELLM_IMPORT;
    use crate::catalog::ProviderKind;

    fn config(provider: ProviderKind, model: &str) -> ResolvedConfig {
        ResolvedConfig {
            target_dir: "tmp-agent".into(),
            root: PathBuf::from("tmp-agent"),
            package_name: "tmp-agent".into(),
            description: "d".into(),
            template: "basic".into(),
            provider,
            model: model.into(),
            overwrite: false,
        }
    }

    #[test]
    fn primary_provider_has_no_import_rewrite() {
        let subs = entry_substitutions(&config(ProviderKind::Gemini, "gemini-2.0-flash"));
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].apply("model: __MODEL_CONFIG__,"), "model: 'gemini-2.0-flash',");
    }

    #[test]
    fn litellm_providers_rewrite_imports() {
        let subs = entry_substitutions(&config(ProviderKind::OpenAI, "openai/gpt-4o"));
        assert_eq!(subs.len(), 2);
        assert_eq!(
            subs[1],
            Substitution::Import(ImportRewrite::new(FRAMEWORK_MODULE, LITELLM_IMPORT))
        );
    }

    #[test]
    fn readme_tokens() {
        let subs = readme_substitutions("pkg", "desc");
        assert_eq!(subs[0].apply("# __PROJECT_NAME__\n\n__DESCRIPTION__"), "# pkg\n\ndesc");
    }
}
