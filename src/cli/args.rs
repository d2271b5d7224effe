use crate::constants::{exit_codes, verbosity, TEMPLATES_DIR_ENV};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Spelling of the provider flag accepted for compatibility with older scripts.
const LEGACY_PROVIDER_FLAG: &str = "-mp";

/// Scaffold a new ADK agent project.
#[derive(Parser, Debug)]
#[command(
    name = "create-adk-agent",
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub args: Args,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a project from generator options (flags or a JSON document).
    Init(InitArgs),
}

/// Flags shared by every entry point.
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct CommonArgs {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory containing the project templates.
    #[arg(long = "templates-dir", value_name = "DIR", env = TEMPLATES_DIR_ENV)]
    pub templates_dir: Option<PathBuf>,

    /// Approve clearing a non-empty target directory without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Never prompt; anything not given on the command line takes its default.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,
}

/// Arguments of the default scaffolding command.
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct Args {
    /// Directory to create the project in.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<String>,

    /// Template to use (basic, multi-tool, streaming, team, workflow).
    #[arg(short, long)]
    pub template: Option<String>,

    /// Model provider (gemini, openai, anthropic, custom).
    #[arg(short = 'p', long = "modelProvider", visible_alias = "model-provider")]
    pub model_provider: Option<String>,

    /// Model identifier.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Project description.
    #[arg(short, long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments of the `init` generator.
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct InitArgs {
    /// Project name; also the package name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Parent directory of the project.
    #[arg(long)]
    pub directory: Option<String>,

    /// Project description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Templates to include (comma-separated); the first one is the base.
    #[arg(short, long, value_delimiter = ',')]
    pub templates: Vec<String>,

    /// Model provider (gemini, openai, anthropic, custom).
    #[arg(short = 'p', long = "model-provider", visible_alias = "modelProvider")]
    pub model_provider: Option<String>,

    /// Model identifier.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Run `npm install` after generating.
    #[arg(long = "install-dependencies")]
    pub install_dependencies: bool,

    /// Run `git init` in the generated project.
    #[arg(long = "init-git")]
    pub init_git: bool,

    /// Generator options as a JSON object, or `-` to read them from stdin.
    /// Flags take precedence over values in the document.
    #[arg(short, long)]
    pub options: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Cli {
    /// Flags shared by whichever command was invoked.
    pub fn common(&self) -> &CommonArgs {
        match &self.command {
            Some(Commands::Init(args)) => &args.common,
            None => &self.args.common,
        }
    }
}

/// Rewrites the legacy `-mp` spelling to `--modelProvider`.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(LEGACY_PROVIDER_FLAG) => OsString::from("--modelProvider"),
            Some(s) if s.starts_with("-mp=") => {
                OsString::from(format!("--modelProvider={}", &s[LEGACY_PROVIDER_FLAG.len() + 1..]))
            }
            _ => arg,
        })
        .collect()
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse_from(normalize_legacy_flags(std::env::args_os())).unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
