use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::{MANIFEST_FILE, RENAME_FILES};
use crate::error::{Error, Result};
use crate::ioutils::{copy_file, create_dir_all};

use super::operation::TemplateOperation;

/// Copies a template tree into the output directory.
pub struct TemplateProcessor<P: AsRef<Path>> {
    template_root: P,
    output_root: P,
}

impl<P: AsRef<Path>> TemplateProcessor<P> {
    pub fn new(template_root: P, output_root: P) -> Self {
        Self {
            template_root,
            output_root,
        }
    }

    /// Name a template file is written under.
    ///
    /// Reserved names such as `_gitignore` exist so that package tooling does
    /// not treat the template's own files specially.
    pub fn destination_name(file_name: &str) -> &str {
        RENAME_FILES
            .iter()
            .find(|(reserved, _)| *reserved == file_name)
            .map(|(_, real)| *real)
            .unwrap_or(file_name)
    }

    /// Maps a path inside the template to its place in the output.
    fn target_path(&self, relative: &Path) -> PathBuf {
        let mut target = self.output_root.as_ref().to_path_buf();
        for component in relative.components() {
            let name = component.as_os_str().to_string_lossy();
            target.push(Self::destination_name(&name));
        }
        target
    }

    /// Decides what to do with one template entry.
    pub fn process(&self, template_entry: &Path) -> Result<TemplateOperation> {
        let relative = template_entry.strip_prefix(self.template_root.as_ref()).map_err(|e| {
            Error::ProcessError {
                source_path: template_entry.display().to_string(),
                e: e.to_string(),
            }
        })?;

        if relative == Path::new(MANIFEST_FILE) {
            return Ok(TemplateOperation::Skip {
                source: template_entry.to_path_buf(),
                reason: "package manifest is patched separately",
            });
        }

        let target = self.target_path(relative);
        if template_entry.is_dir() {
            let target_exists = target.exists();
            Ok(TemplateOperation::CreateDirectory {
                target,
                target_exists,
            })
        } else {
            Ok(TemplateOperation::Copy {
                source: template_entry.to_path_buf(),
                target,
            })
        }
    }

    /// Applies a single operation to the filesystem.
    fn apply(&self, operation: &TemplateOperation) -> Result<()> {
        log::debug!("Handling file operation: {operation:?}");
        match operation {
            TemplateOperation::Copy { source, target } => copy_file(source, target),
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if !target_exists {
                    create_dir_all(target)?;
                }
                Ok(())
            }
            TemplateOperation::Skip { .. } => Ok(()),
        }
    }

    /// Copies every entry of the template, returning the files written.
    ///
    /// Entries are visited in name order so runs are reproducible. Any
    /// failure aborts the copy.
    pub fn materialize(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for dir_entry in
            WalkDir::new(self.template_root.as_ref()).min_depth(1).sort_by_file_name()
        {
            let template_entry = dir_entry?.into_path();
            let operation = self.process(&template_entry)?;
            self.apply(&operation).map_err(|e| Error::ProcessError {
                source_path: template_entry.display().to_string(),
                e: e.to_string(),
            })?;
            log::info!("{}", operation.get_message());
            if let TemplateOperation::Copy { target, .. } = operation {
                written.push(target);
            }
        }
        Ok(written)
    }
}
