use owo_colors::{AnsiColors, OwoColorize, Stream};
use std::path::{Component, Path, PathBuf};

use crate::constants::{BUNDLED_TEMPLATES_DIR, MANIFEST_FILE};
use crate::error::{Error, Result};

/// One flavour of generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Directory name under the templates root.
    pub name: &'static str,
    pub display: &'static str,
    pub description: &'static str,
    pub color: AnsiColors,
}

pub const TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        name: "basic",
        display: "Basic Agent",
        description: "Single agent with one tool (time example)",
        color: AnsiColors::Green,
    },
    TemplateDescriptor {
        name: "multi-tool",
        display: "Multi-Tool Agent",
        description: "Agent with multiple tools (recommended)",
        color: AnsiColors::Blue,
    },
    TemplateDescriptor {
        name: "streaming",
        display: "Streaming Agent",
        description: "Agent with Live API streaming support",
        color: AnsiColors::Cyan,
    },
    TemplateDescriptor {
        name: "team",
        display: "Multi-Agent Team",
        description: "Multiple agents working together",
        color: AnsiColors::Yellow,
    },
    TemplateDescriptor {
        name: "workflow",
        display: "Workflow Agent",
        description: "Sequential and parallel execution patterns",
        color: AnsiColors::Yellow,
    },
];

impl TemplateDescriptor {
    /// Looks a template up by its directory name.
    pub fn find(name: &str) -> Option<&'static TemplateDescriptor> {
        TEMPLATES.iter().find(|t| t.name == name)
    }

    /// The template used when nothing was selected.
    pub fn default_template() -> &'static TemplateDescriptor {
        &TEMPLATES[0]
    }

    /// Label shown in the selection prompt, coloured when stdout supports it.
    pub fn choice_label(&self) -> String {
        let color = self.color;
        format!(
            "{} - {}",
            self.display.if_supports_color(Stream::Stdout, |s| s.color(color)),
            self.description
        )
    }
}

/// Locates the directory of `template` under `templates_root`.
///
/// The name must be a single plain path segment naming a directory that
/// holds a package manifest; anything else, including `.`, `..`, nested and
/// absolute paths, fails with [`Error::TemplateNotFoundError`]. Names outside
/// [`TEMPLATES`] are accepted when such a directory exists.
pub fn locate_template(templates_root: &Path, template: &str) -> Result<PathBuf> {
    let not_found = || Error::TemplateNotFoundError {
        template: template.to_string(),
    };

    let mut components = Path::new(template).components();
    let (Some(Component::Normal(_)), None) = (components.next(), components.next()) else {
        return Err(not_found());
    };

    let template_dir = templates_root.join(template);
    if !template_dir.join(MANIFEST_FILE).is_file() {
        return Err(not_found());
    }

    match TemplateDescriptor::find(template) {
        Some(descriptor) => log::debug!(
            "Using template '{}' from {}",
            descriptor.display,
            template_dir.display()
        ),
        None => log::debug!("Using custom template directory: {}", template_dir.display()),
    }
    Ok(template_dir)
}

/// Directory holding the templates: the explicit one if given, else the
/// templates shipped with the crate.
pub fn templates_root(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(BUNDLED_TEMPLATES_DIR))
}
