//! `init` generator: builds a project from an options document, flags and
//! prompts, optionally combining several templates.
//!
//! - `options`: Options document and flag merging
//! - `tasks`: Follow-up commands (`git init`, `npm install`)

pub mod options;
pub mod tasks;

pub use options::GeneratorOptions;
pub use tasks::PostTask;

use owo_colors::{OwoColorize, Stream};
use std::path::{Path, PathBuf};

use crate::{
    catalog::{locate_template, templates_root, ProviderKind, PROVIDERS, TEMPLATES},
    cli::InitArgs,
    config::{question::ask_model, ResolvedConfig},
    constants::{files, prompts, DEFAULT_DESCRIPTION, DEFAULT_GENERATOR_TEMPLATE, DOCS_URL},
    error::{Error, Result},
    ioutils::{copy_file, ensure_writable_output, is_empty_dir},
    prompt::{
        get_prompt_provider, MultipleChoiceConfig, PromptProvider, SingleChoiceConfig,
        TextPromptConfig,
    },
    template::{entry_substitutions, placeholder::replace_placeholders, scaffold, ScaffoldOutcome},
    validation::{format_target_dir, to_valid_package_name, validate_package_name},
};

/// Everything the generator needs once all questions are answered.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorPlan {
    /// Configuration of the base template.
    pub config: ResolvedConfig,
    /// Selected templates, base first, without duplicates.
    pub templates: Vec<String>,
    pub tasks: Vec<PostTask>,
}

impl GeneratorPlan {
    /// Templates added on top of the base one.
    pub fn extra_templates(&self) -> &[String] {
        self.templates.get(1..).unwrap_or_default()
    }
}

/// Fills the gaps in `options` from `prompter`, then defaults.
///
/// Questions come in the order name, templates, provider, model,
/// description. A non-empty project directory is refused unless `force`.
pub fn resolve_plan(
    options: GeneratorOptions,
    cwd: &Path,
    force: bool,
    prompter: &dyn PromptProvider,
) -> Result<GeneratorPlan> {
    let provider = options
        .model_provider
        .as_deref()
        .map(str::parse::<ProviderKind>)
        .transpose()?;

    let name = match options.name {
        Some(name) => name,
        None => prompter.prompt_text(&TextPromptConfig {
            prompt: prompts::PROJECT_NAME.to_string(),
            default: None,
            validator: Some(validate_package_name),
        })?,
    };
    validate_package_name(&name).map_err(|message| {
        Error::ValidationError(format!(
            "{message}: '{name}' (try '{}')",
            to_valid_package_name(&name)
        ))
    })?;

    let templates = if options.templates.is_empty() {
        ask_templates(prompter)?
    } else {
        options.templates
    };
    let templates = dedup_templates(templates);

    let provider = match provider {
        Some(provider) => provider,
        None => {
            let index = prompter.prompt_single_choice(&SingleChoiceConfig {
                prompt: prompts::PROVIDER.to_string(),
                choices: PROVIDERS.iter().map(|p| p.name.to_string()).collect(),
                default_index: Some(0),
            })?;
            PROVIDERS[index].kind
        }
    };

    let model = match options.model {
        Some(model) => model,
        None => ask_model(provider, prompter)?,
    };

    let description = match options.description {
        Some(description) => description,
        None => prompter.prompt_text(&TextPromptConfig {
            prompt: prompts::DESCRIPTION.to_string(),
            default: Some(DEFAULT_DESCRIPTION.to_string()),
            validator: None,
        })?,
    };

    let target_dir = match options.directory.as_deref().map(format_target_dir) {
        Some(directory) if !directory.is_empty() => format!("{directory}/{name}"),
        _ => name.clone(),
    };
    let root = cwd.join(&target_dir);
    ensure_writable_output(&root, force)?;
    let overwrite = force && !is_empty_dir(&root)?;

    let mut tasks = Vec::new();
    if options.init_git {
        tasks.push(PostTask::InitGit);
    }
    if options.install_dependencies {
        tasks.push(PostTask::InstallDependencies);
    }

    Ok(GeneratorPlan {
        config: ResolvedConfig {
            target_dir,
            root,
            package_name: name,
            description,
            template: templates[0].clone(),
            provider,
            model,
            overwrite,
        },
        templates,
        tasks,
    })
}

fn ask_templates(prompter: &dyn PromptProvider) -> Result<Vec<String>> {
    let picked = prompter.prompt_multiple_choice(&MultipleChoiceConfig {
        prompt: prompts::TEMPLATES.to_string(),
        choices: TEMPLATES.iter().map(|t| t.choice_label()).collect(),
        defaults: TEMPLATES.iter().map(|t| t.name == DEFAULT_GENERATOR_TEMPLATE).collect(),
    })?;
    Ok(picked.into_iter().filter_map(|i| TEMPLATES.get(i)).map(|t| t.name.to_string()).collect())
}

/// Drops repeats and blanks, keeping first occurrences; an empty selection
/// becomes the default template.
fn dedup_templates(templates: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for template in templates.into_iter().map(|t| t.trim().to_string()) {
        if !template.is_empty() && !unique.contains(&template) {
            unique.push(template);
        }
    }
    if unique.is_empty() {
        unique.push(DEFAULT_GENERATOR_TEMPLATE.to_string());
    }
    unique
}

/// Path an extra template's entry file is written to.
pub fn agent_module_path(template: &str) -> PathBuf {
    Path::new(files::AGENTS_DIR).join(format!("{template}.ts"))
}

/// Writes the project: the base template through the full pipeline, then
/// each extra template's entry file as an agent module.
///
/// Every template is located before anything is written.
pub fn generate(plan: &GeneratorPlan, templates_root: &Path) -> Result<ScaffoldOutcome> {
    let extra_dirs = plan
        .extra_templates()
        .iter()
        .map(|template| Ok((template, locate_template(templates_root, template)?)))
        .collect::<Result<Vec<_>>>()?;

    let mut outcome = scaffold(&plan.config, templates_root)?;
    let substitutions = entry_substitutions(&plan.config);

    for (template, template_dir) in extra_dirs {
        let entry = template_dir.join(files::ENTRY);
        if !entry.is_file() {
            log::warn!("Template '{template}' has no {}; nothing to add", files::ENTRY);
            continue;
        }
        let module = agent_module_path(template);
        let target = outcome.root.join(&module);
        copy_file(entry.as_path(), target.as_path())?;
        log::info!("Adding agent module '{}' from template '{template}'", target.display());
        replace_placeholders(&outcome.root, &[module.to_string_lossy()], &substitutions)?;
        outcome.files.push(target);
    }

    Ok(outcome)
}

/// Runs the plan's follow-up commands in order.
pub fn run_tasks(tasks: &[PostTask], project_root: &Path) -> Result<()> {
    for task in tasks {
        task.run(project_root)?;
    }
    Ok(())
}

/// Closing message of the generator.
pub fn render_summary(plan: &GeneratorPlan) -> String {
    let config = &plan.config;
    let install_step = if plan.tasks.contains(&PostTask::InstallDependencies) {
        "  3. npm install (running now...)"
    } else {
        "  3. npm install"
    };

    [
        String::new(),
        "✅ ADK Agent project created successfully!"
            .if_supports_color(Stream::Stdout, |s| s.green())
            .to_string(),
        String::new(),
        format!("📁 Project: {}", config.target_dir),
        format!("🤖 Model: {}", config.model),
        format!("📦 Templates: {}", plan.templates.join(", ")),
        String::new(),
        "🚀 Next steps:".to_string(),
        format!("  1. cd {}", config.target_dir),
        "  2. Copy .env.example to .env and add your API key".to_string(),
        install_step.to_string(),
        "  4. npm run dev".to_string(),
        String::new(),
        format!("📚 Documentation: {DOCS_URL}"),
    ]
    .join("\n")
}

/// Entry point of the `init` subcommand.
pub fn run(args: InitArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let prompter = get_prompt_provider(args.common.non_interactive);
    let options = GeneratorOptions::from_args(&args)?;
    let plan = resolve_plan(options, &cwd, args.common.force, prompter.as_ref())?;
    log::debug!("Generator plan: {plan:?}");

    let outcome = generate(&plan, &templates_root(args.common.templates_dir.as_deref()))?;

    let (before, after): (Vec<PostTask>, Vec<PostTask>) =
        plan.tasks.iter().copied().partition(|task| *task == PostTask::InitGit);
    run_tasks(&before, &outcome.root)?;
    println!("{}", render_summary(&plan));
    run_tasks(&after, &outcome.root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AutomaticPrompter;
    use std::fs;

    fn options(name: &str) -> GeneratorOptions {
        GeneratorOptions {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_follow_generator_schema() {
        let cwd = tempfile::tempdir().unwrap();
        let prompter = AutomaticPrompter::new();
        let plan = resolve_plan(options("my-agent"), cwd.path(), false, &prompter).unwrap();

        assert_eq!(plan.templates, vec!["multi-tool"]);
        assert_eq!(plan.config.template, "multi-tool");
        assert_eq!(plan.config.provider, ProviderKind::Gemini);
        assert_eq!(plan.config.model, "gemini-2.0-flash");
        assert_eq!(plan.config.description, "My ADK Agent");
        assert_eq!(plan.config.root, cwd.path().join("my-agent"));
        assert!(plan.tasks.is_empty());
    }

    #[test]
    fn name_is_required_without_prompting() {
        let cwd = tempfile::tempdir().unwrap();
        let err = resolve_plan(
            GeneratorOptions::default(),
            cwd.path(),
            false,
            &AutomaticPrompter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingAnswer { prompt } if prompt == prompts::PROJECT_NAME));
    }

    #[test]
    fn invalid_name_is_rejected_with_suggestion() {
        let cwd = tempfile::tempdir().unwrap();
        let err = resolve_plan(options("My Agent"), cwd.path(), false, &AutomaticPrompter::new())
            .unwrap_err();
        assert!(matches!(&err, Error::ValidationError(msg) if msg.contains("my-agent")));
    }

    #[test]
    fn prompts_are_used_in_order() {
        let cwd = tempfile::tempdir().unwrap();
        let prompter = AutomaticPrompter::new()
            .with_text_response(prompts::PROJECT_NAME, "prompted")
            .with_multiple_choice_response(prompts::TEMPLATES, vec![3, 0])
            .with_choice_response(prompts::PROVIDER, 2)
            .with_choice_response(prompts::MODEL, 2)
            .with_text_response(prompts::DESCRIPTION, "A team");
        let plan = resolve_plan(GeneratorOptions::default(), cwd.path(), false, &prompter).unwrap();

        assert_eq!(plan.config.package_name, "prompted");
        assert_eq!(plan.templates, vec!["team", "basic"]);
        assert_eq!(plan.config.provider, ProviderKind::Anthropic);
        assert_eq!(plan.config.model, "anthropic/claude-3-haiku");
        assert_eq!(plan.config.description, "A team");
    }

    #[test]
    fn directory_prefixes_project_root() {
        let cwd = tempfile::tempdir().unwrap();
        let opts = GeneratorOptions {
            directory: Some("apps/".into()),
            ..options("svc")
        };
        let plan = resolve_plan(opts, cwd.path(), false, &AutomaticPrompter::new()).unwrap();
        assert_eq!(plan.config.target_dir, "apps/svc");
        assert_eq!(plan.config.root, cwd.path().join("apps/svc"));
    }

    #[test]
    fn custom_provider_falls_back_to_primary_model() {
        let cwd = tempfile::tempdir().unwrap();
        let opts = GeneratorOptions {
            model_provider: Some("custom".into()),
            ..options("c")
        };
        let plan = resolve_plan(opts, cwd.path(), false, &AutomaticPrompter::new()).unwrap();
        assert_eq!(plan.config.model, "gemini-2.0-flash");
        assert_eq!(plan.config.model_config(), "new LiteLlm({ model: 'gemini-2.0-flash' })");
    }

    #[test]
    fn non_empty_root_is_refused_without_force() {
        let cwd = tempfile::tempdir().unwrap();
        fs::create_dir(cwd.path().join("busy")).unwrap();
        fs::write(cwd.path().join("busy/file"), "x").unwrap();

        let err = resolve_plan(options("busy"), cwd.path(), false, &AutomaticPrompter::new())
            .unwrap_err();
        assert!(matches!(err, Error::OutputDirectoryExistsError { .. }));

        let plan =
            resolve_plan(options("busy"), cwd.path(), true, &AutomaticPrompter::new()).unwrap();
        assert!(plan.config.overwrite);
    }

    #[test]
    fn templates_are_deduplicated() {
        assert_eq!(
            dedup_templates(vec!["team".into(), " team".into(), "basic".into()]),
            vec!["team", "basic"]
        );
        assert_eq!(dedup_templates(vec!["".into()]), vec![DEFAULT_GENERATOR_TEMPLATE]);
    }

    #[test]
    fn tasks_follow_flags() {
        let cwd = tempfile::tempdir().unwrap();
        let opts = GeneratorOptions {
            install_dependencies: true,
            init_git: true,
            ..options("t")
        };
        let plan = resolve_plan(opts, cwd.path(), false, &AutomaticPrompter::new()).unwrap();
        assert_eq!(plan.tasks, vec![PostTask::InitGit, PostTask::InstallDependencies]);
    }

    #[test]
    fn summary_lists_project_model_and_templates() {
        owo_colors::set_override(false);
        let cwd = tempfile::tempdir().unwrap();
        let opts = GeneratorOptions {
            templates: vec!["basic".into(), "team".into()],
            install_dependencies: true,
            ..options("sum")
        };
        let plan = resolve_plan(opts, cwd.path(), false, &AutomaticPrompter::new()).unwrap();
        let summary = render_summary(&plan);

        assert!(summary.contains("📁 Project: sum"));
        assert!(summary.contains("🤖 Model: gemini-2.0-flash"));
        assert!(summary.contains("📦 Templates: basic, team"));
        assert!(summary.contains("1. cd sum"));
        assert!(summary.contains("npm install (running now...)"));
        assert!(summary.ends_with(DOCS_URL));
    }

    #[test]
    fn summary_layout_without_install() {
        owo_colors::set_override(false);
        let cwd = tempfile::tempdir().unwrap();
        let opts = GeneratorOptions {
            templates: vec!["basic".into()],
            ..options("plain")
        };
        let plan = resolve_plan(opts, cwd.path(), false, &AutomaticPrompter::new()).unwrap();

        assert_eq!(
            render_summary(&plan),
            format!(
                "\n✅ ADK Agent project created successfully!\n\n📁 Project: plain\n\
                 🤖 Model: gemini-2.0-flash\n📦 Templates: basic\n\n🚀 Next steps:\n  \
                 1. cd plain\n  2. Copy .env.example to .env and add your API key\n  \
                 3. npm install\n  4. npm run dev\n\n📚 Documentation: {DOCS_URL}"
            )
        );
    }

    #[test]
    fn agent_modules_live_under_agents_dir() {
        assert_eq!(agent_module_path("team"), Path::new("src/agents/team.ts"));
    }
}
