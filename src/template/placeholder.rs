use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Literal token → replacement, applied in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderMap(IndexMap<String, String>);

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: &str, value: impl Into<String>) -> Self {
        self.0.insert(token.to_string(), value.into());
        self
    }

    /// Replaces every occurrence of every token.
    pub fn apply(&self, content: &str) -> String {
        self.0
            .iter()
            .fold(content.to_string(), |acc, (token, value)| acc.replace(token.as_str(), value))
    }
}

/// Swaps whole import lines for a given module specifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRewrite {
    pub module: String,
    pub statement: String,
}

impl ImportRewrite {
    pub fn new(module: &str, statement: &str) -> Self {
        Self {
            module: module.to_string(),
            statement: statement.to_string(),
        }
    }

    /// Value imports from the module; type-only imports are left alone.
    fn matches(&self, line: &str) -> bool {
        let line = line.trim();
        line.starts_with("import ")
            && !line.starts_with("import type ")
            && (line.contains(&format!("from '{}'", self.module))
                || line.contains(&format!("from \"{}\"", self.module)))
    }

    /// Replaces the first matching line, keeping its indentation and line
    /// ending. Later imports from the same module are left as they are.
    pub fn apply(&self, content: &str) -> String {
        let mut replaced = false;
        content
            .split_inclusive('\n')
            .map(|line| {
                let body = line.trim_end_matches(['\n', '\r']);
                if replaced || !self.matches(body) {
                    return line.to_string();
                }
                replaced = true;
                let ending = &line[body.len()..];
                let indent = &body[..body.len() - body.trim_start().len()];
                format!("{indent}{}{ending}", self.statement)
            })
            .collect()
    }
}

/// One kind of edit applied to a generated file.
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    Tokens(PlaceholderMap),
    Import(ImportRewrite),
}

impl Substitution {
    pub fn apply(&self, content: &str) -> String {
        match self {
            Substitution::Tokens(map) => map.apply(content),
            Substitution::Import(rewrite) => rewrite.apply(content),
        }
    }
}

/// Applies `substitutions` to each of `files` under `root`.
///
/// Files that do not exist are skipped; templates differ in which of them
/// they ship. Returns the files that changed.
pub fn replace_placeholders<S: AsRef<str>>(
    root: &Path,
    files: &[S],
    substitutions: &[Substitution],
) -> Result<Vec<PathBuf>> {
    let mut changed = Vec::new();
    for file in files {
        let path = root.join(file.as_ref());
        if !path.is_file() {
            log::debug!("Skipping placeholders in '{}' (not present)", path.display());
            continue;
        }

        let content = std::fs::read_to_string(&path)?;
        let updated = substitutions
            .iter()
            .fold(content.clone(), |acc, substitution| substitution.apply(&acc));

        if updated != content {
            std::fs::write(&path, &updated)?;
            log::info!("Replaced placeholders in '{}'", path.display());
            changed.push(path);
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::provider::{FRAMEWORK_MODULE, LITELLM_IMPORT, PRIMARY_IMPORT};
    use crate::constants::placeholders::{DESCRIPTION, MODEL_CONFIG, PROJECT_NAME};
    use std::fs;

    #[test]
    fn replaces_every_occurrence() {
        let map = PlaceholderMap::new()
            .with(PROJECT_NAME, "tmp-agent")
            .with(DESCRIPTION, "An agent");
        let out = map.apply("# __PROJECT_NAME__\n__DESCRIPTION__\ncd __PROJECT_NAME__\n");
        assert_eq!(out, "# tmp-agent\nAn agent\ncd tmp-agent\n");
    }

    #[test]
    fn token_substitution_is_idempotent() {
        let map = PlaceholderMap::new()
            .with(MODEL_CONFIG, "'gemini-2.0-flash'")
            .with(PROJECT_NAME, "p")
            .with(DESCRIPTION, "d");
        let input = "model: __MODEL_CONFIG__, name: __PROJECT_NAME__, __DESCRIPTION__";
        let once = map.apply(input);
        assert_eq!(map.apply(&once), once);
        assert!(!once.contains("__"));
    }

    #[test]
    fn import_rewrite_swaps_any_framework_import() {
        let rewrite = ImportRewrite::new(FRAMEWORK_MODULE, LITELLM_IMPORT);
        let input = format!(
            "import 'dotenv/config';\n{PRIMARY_IMPORT}\nimport {{ z }} from 'zod';\n"
        );
        let out = rewrite.apply(&input);
        assert_eq!(
            out,
            format!("import 'dotenv/config';\n{LITELLM_IMPORT}\nimport {{ z }} from 'zod';\n")
        );

        let reordered = "import { FunctionTool, LlmAgent } from '@google/adk';\r\n";
        assert_eq!(rewrite.apply(reordered), format!("{LITELLM_IMPORT}\r\n"));
    }

    #[test]
    fn import_rewrite_is_idempotent_and_skips_type_imports() {
        let rewrite = ImportRewrite::new(FRAMEWORK_MODULE, LITELLM_IMPORT);
        let once =
            rewrite.apply(&format!("{PRIMARY_IMPORT}\nimport type {{ Tool }} from '@google/adk';"));
        assert_eq!(rewrite.apply(&once), once);
        assert!(once.ends_with("import type { Tool } from '@google/adk';"));
    }

    #[test]
    fn only_first_framework_import_is_rewritten() {
        let rewrite = ImportRewrite::new(FRAMEWORK_MODULE, LITELLM_IMPORT);
        let extra = "import { SequentialAgent, ParallelAgent } from '@google/adk';";
        let out = rewrite.apply(&format!("{PRIMARY_IMPORT}\n{extra}\n"));
        assert_eq!(out, format!("{LITELLM_IMPORT}\n{extra}\n"));
    }

    #[test]
    fn missing_files_are_skipped() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("README.md"), "# __PROJECT_NAME__").unwrap();
        let subs = [Substitution::Tokens(PlaceholderMap::new().with(PROJECT_NAME, "demo"))];

        let changed =
            replace_placeholders(root.path(), &["README.md", "src/index.ts"], &subs).unwrap();

        assert_eq!(changed, vec![root.path().join("README.md")]);
        assert_eq!(fs::read_to_string(root.path().join("README.md")).unwrap(), "# demo");

        let again = replace_placeholders(root.path(), &["README.md"], &subs).unwrap();
        assert!(again.is_empty());
    }
}
