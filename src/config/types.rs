use std::path::PathBuf;

use crate::catalog::ProviderKind;

/// Values supplied up front, from command-line flags or a generator options
/// document. Anything left `None` may be asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub target_dir: Option<String>,
    pub template: Option<String>,
    pub model_provider: Option<String>,
    pub model: Option<String>,
    pub description: Option<String>,
    /// Approve clearing a non-empty target without asking.
    pub force: bool,
}

/// Answers gathered so far while resolving options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub target_dir: Option<String>,
    pub overwrite: Option<bool>,
    pub package_name: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
}

/// Final, read-only input to the scaffolding pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Target directory as the user wrote it.
    pub target_dir: String,
    /// Absolute destination directory.
    pub root: PathBuf,
    pub package_name: String,
    pub description: String,
    pub template: String,
    pub provider: ProviderKind,
    pub model: String,
    /// Clear the existing contents of `root` before writing.
    pub overwrite: bool,
}

impl ResolvedConfig {
    /// Expression written in place of the model placeholder.
    pub fn model_config(&self) -> String {
        self.provider.model_config(&self.model)
    }
}
