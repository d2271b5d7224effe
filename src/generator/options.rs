use anyhow::Context;
use serde::Deserialize;

use crate::cli::InitArgs;
use crate::constants::STDIN_INDICATOR;
use crate::error::Result;
use crate::ioutils::read_from;

/// Generator inputs as they appear in an options document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GeneratorOptions {
    pub name: Option<String>,
    pub directory: Option<String>,
    pub description: Option<String>,
    pub templates: Vec<String>,
    pub model_provider: Option<String>,
    pub model: Option<String>,
    pub install_dependencies: bool,
    pub init_git: bool,
}

impl GeneratorOptions {
    /// Parses an options document.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Reads the `--options` value: inline JSON, or `-` for stdin.
    pub fn from_source(source: &str) -> Result<Self> {
        if source == STDIN_INDICATOR {
            let document =
                read_from(std::io::stdin()).context("Failed to read generator options from stdin")?;
            Self::from_json(&document)
        } else {
            Self::from_json(source)
        }
    }

    /// Layers `other` on top of `self`; values set in `other` win.
    pub fn merge(self, other: GeneratorOptions) -> Self {
        Self {
            name: other.name.or(self.name),
            directory: other.directory.or(self.directory),
            description: other.description.or(self.description),
            templates: if other.templates.is_empty() { self.templates } else { other.templates },
            model_provider: other.model_provider.or(self.model_provider),
            model: other.model.or(self.model),
            install_dependencies: other.install_dependencies || self.install_dependencies,
            init_git: other.init_git || self.init_git,
        }
    }

    /// Options document (if any) overlaid with the command-line flags.
    pub fn from_args(args: &InitArgs) -> Result<Self> {
        let document = match args.options.as_deref() {
            Some(source) => Self::from_source(source)?,
            None => Self::default(),
        };
        Ok(document.merge(Self::from(args)))
    }
}

impl From<&InitArgs> for GeneratorOptions {
    fn from(args: &InitArgs) -> Self {
        Self {
            name: args.name.clone(),
            directory: args.directory.clone(),
            description: args.description.clone(),
            templates: args.templates.clone(),
            model_provider: args.model_provider.clone(),
            model: args.model.clone(),
            install_dependencies: args.install_dependencies,
            init_git: args.init_git,
        }
    }
}
