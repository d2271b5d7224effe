use owo_colors::{OwoColorize, Stream};
use std::path::Path;

use crate::config::ResolvedConfig;
use crate::ioutils::relative_to;

/// Line printed before any file is written.
pub fn scaffolding_banner(root: &Path) -> String {
    format!(
        "\n{} Scaffolding project in {}...",
        "✓".if_supports_color(Stream::Stdout, |s| s.green()),
        root.display()
    )
}

/// Closing message: next steps followed by the chosen configuration.
///
/// The `cd` step is omitted when the project was created in `cwd` itself.
pub fn render_summary(config: &ResolvedConfig, cwd: &Path) -> String {
    let mut lines = vec![
        String::new(),
        "✓ Project created successfully!"
            .if_supports_color(Stream::Stdout, |s| s.green())
            .to_string(),
        String::new(),
        "Next steps:".if_supports_color(Stream::Stdout, |s| s.bold()).to_string(),
        String::new(),
    ];

    if config.root != cwd {
        lines.push(format!("  cd {}", relative_to(&config.root, cwd).display()));
    }
    lines.push("  npm install".to_string());
    lines.push("  cp .env.example .env".to_string());
    lines.push(format!(
        "  {}",
        "# Edit .env and add your API key".if_supports_color(Stream::Stdout, |s| s.dimmed())
    ));
    lines.push("  npm run dev".to_string());

    let descriptor = config.provider.descriptor();
    let api_key = descriptor.api_key_var.unwrap_or("(the variable your LiteLLM provider expects)");
    let highlight = |value: &str| value.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string();

    lines.push(String::new());
    lines.push("Configuration:".if_supports_color(Stream::Stdout, |s| s.bold()).to_string());
    lines.push(format!("  Template: {}", highlight(&config.template)));
    lines.push(format!("  Provider: {}", highlight(descriptor.name)));
    lines.push(format!("  Model: {}", highlight(&config.model)));
    lines.push(format!(
        "  API Key: {}",
        api_key.if_supports_color(Stream::Stdout, |s| s.yellow())
    ));
    lines.join("\n")
}
