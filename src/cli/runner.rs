use crate::{
    catalog::templates_root,
    cli::{
        report::{render_summary, scaffolding_banner},
        Args,
    },
    config::{resolve_options, Overrides, ResolvedConfig},
    error::Result,
    prompt::{get_prompt_provider, PromptProvider},
    template::{scaffold, ScaffoldOutcome},
};
use std::path::{Path, PathBuf};

/// Main CLI runner that orchestrates the whole scaffolding workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete scaffolding workflow from the current directory
    pub fn run(self) -> Result<()> {
        let cwd = std::env::current_dir()?;
        let prompter = get_prompt_provider(self.args.common.non_interactive);
        let (config, _) = self.run_in(&cwd, prompter.as_ref())?;
        println!("{}", render_summary(&config, &cwd));
        Ok(())
    }

    /// Resolves options against `cwd` and scaffolds the project.
    pub fn run_in(
        &self,
        cwd: &Path,
        prompter: &dyn PromptProvider,
    ) -> Result<(ResolvedConfig, ScaffoldOutcome)> {
        let config = resolve_options(&self.overrides(), cwd, prompter)?;
        log::debug!("Resolved options: {config:?}");

        println!("{}", scaffolding_banner(&config.root));
        let outcome = scaffold(&config, &self.templates_root())?;
        log::info!("Wrote {} files to '{}'", outcome.files.len(), outcome.root.display());

        Ok((config, outcome))
    }

    /// Command-line values that skip their questions
    fn overrides(&self) -> Overrides {
        Overrides {
            target_dir: self.args.target_dir.clone(),
            template: self.args.template.clone(),
            model_provider: self.args.model_provider.clone(),
            model: self.args.model.clone(),
            description: self.args.description.clone(),
            force: self.args.common.force,
        }
    }

    fn templates_root(&self) -> PathBuf {
        templates_root(self.args.common.templates_dir.as_deref())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
