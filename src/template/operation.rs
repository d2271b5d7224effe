use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf },
    CreateDirectory {
        target: PathBuf,
        target_exists: bool,
    },
    /// Left for a later pipeline stage, e.g. the package manifest.
    Skip { source: PathBuf, reason: &'static str },
}

impl TemplateOperation {
    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target } => {
                format!("Copying '{}' to '{}'", source.display(), target.display())
            }
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!("Skipping directory creation '{}' (already exists)", target.display())
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }
            TemplateOperation::Skip { source, reason } => {
                format!("Skipping '{}' ({reason})", source.display())
            }
        }
    }
}
