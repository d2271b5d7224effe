use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::constants::prompts::INVALID_PACKAGE_NAME;

static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9-*~][a-z0-9-*._~]*/)?[a-z0-9-~][a-z0-9-._~]*$")
        .expect("package name pattern is valid")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static LEADING_DOT_OR_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[._]").expect("leading pattern is valid"));
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-~]+").expect("invalid chars pattern is valid"));

/// Whether `name` is acceptable as the `name` field of a package manifest.
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// Turns a free-form project name into a valid package name.
///
/// `"My Agent"` becomes `"my-agent"`, `"_bad"` becomes `"bad"`.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let stripped = LEADING_DOT_OR_UNDERSCORE.replace(&hyphenated, "");
    INVALID_CHARS.replace_all(&stripped, "-").into_owned()
}

/// Prompt-time validator for package names.
pub fn validate_package_name(name: &str) -> Result<(), String> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err(INVALID_PACKAGE_NAME.to_string())
    }
}

/// Trims whitespace and trailing slashes from a user-supplied target directory.
pub fn format_target_dir(target_dir: &str) -> String {
    target_dir.trim().trim_end_matches('/').to_string()
}

/// Name a project gets from its target directory: the final path segment,
/// or the working directory's own name when the target is `.`.
pub fn project_name_from_target(target_dir: &str, cwd: &Path) -> String {
    let path = if target_dir == "." { cwd } else { Path::new(target_dir) };
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| target_dir.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn accepts_valid_names() {
        for name in ["@scope/name", "my-agent", "agent2", "a.b_c~d"] {
            assert!(is_valid_package_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_invalid_names() {
        for name in ["My Agent", "_bad", "UPPER", "", "@scope/", ".hidden", "a/b"] {
            assert!(!is_valid_package_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn corrects_invalid_names() {
        assert_eq!(to_valid_package_name("My Agent"), "my-agent");
        assert_eq!(to_valid_package_name("_bad"), "bad");
        assert_eq!(to_valid_package_name("UPPER"), "upper");
        assert_eq!(to_valid_package_name("  Hello   World!! "), "hello-world-");
        assert_eq!(to_valid_package_name(".dotted"), "dotted");
    }

    #[test]
    fn validator_reports_message() {
        assert!(validate_package_name("ok-name").is_ok());
        assert_eq!(validate_package_name("Not Ok").unwrap_err(), "Invalid package.json name");
    }

    #[test]
    fn formats_target_dir() {
        assert_eq!(format_target_dir("  my-app///"), "my-app");
        assert_eq!(format_target_dir("nested/dir/"), "nested/dir");
        assert_eq!(format_target_dir("   "), "");
    }

    #[test]
    fn project_name_uses_final_segment() {
        let cwd = PathBuf::from("/work/current-project");
        assert_eq!(project_name_from_target("apps/my-agent", &cwd), "my-agent");
        assert_eq!(project_name_from_target("tmp-agent", &cwd), "tmp-agent");
        assert_eq!(project_name_from_target(".", &cwd), "current-project");
    }
}
