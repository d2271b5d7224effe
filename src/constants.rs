//! Constants used throughout create-adk-agent

/// Target directory used when none is given and the prompt is left empty.
pub const DEFAULT_TARGET_DIR: &str = "my-adk-agent";

/// Description written into the manifest when none is supplied.
pub const DEFAULT_DESCRIPTION: &str = "My ADK Agent";

/// Template selected by the `init` generator when none is requested.
pub const DEFAULT_GENERATOR_TEMPLATE: &str = "multi-tool";

/// Package manifest shipped with every template.
pub const MANIFEST_FILE: &str = "package.json";

/// Version-control metadata directory that does not count as content.
pub const VCS_DIR: &str = ".git";

/// Environment variable overriding the templates root.
pub const TEMPLATES_DIR_ENV: &str = "CREATE_ADK_AGENT_TEMPLATES";

/// Templates shipped alongside the crate sources.
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Printed when the user aborts.
pub const CANCELLED_MESSAGE: &str = "✖ Operation cancelled";

pub const DOCS_URL: &str = "https://google.github.io/adk-docs/";

/// Reserved template filenames and the names they are written under.
pub const RENAME_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Placeholder tokens embedded in template text files.
pub mod placeholders {
    pub const MODEL_CONFIG: &str = "__MODEL_CONFIG__";
    pub const PROJECT_NAME: &str = "__PROJECT_NAME__";
    pub const DESCRIPTION: &str = "__DESCRIPTION__";
}

/// Generated files that carry placeholders.
pub mod files {
    pub const README: &str = "README.md";
    pub const ENTRY: &str = "src/index.ts";
    pub const AGENTS_DIR: &str = "src/agents";
}

/// Prompt labels
pub mod prompts {
    pub const PROJECT_NAME: &str = "Project name:";
    pub const PACKAGE_NAME: &str = "Package name:";
    pub const DESCRIPTION: &str = "Project description:";
    pub const TEMPLATE: &str = "Select a template:";
    pub const TEMPLATES: &str = "Select templates:";
    pub const PROVIDER: &str = "Select LLM provider:";
    pub const MODEL: &str = "Select model:";
    pub const CUSTOM_MODEL: &str = "Model identifier:";
    pub const INVALID_PACKAGE_NAME: &str = "Invalid package.json name";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
