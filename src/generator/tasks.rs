use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Follow-up command run inside the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTask {
    InitGit,
    InstallDependencies,
}

impl PostTask {
    pub fn program(self) -> &'static str {
        match self {
            PostTask::InitGit => "git",
            PostTask::InstallDependencies => "npm",
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            PostTask::InitGit => &["init"],
            PostTask::InstallDependencies => &["install"],
        }
    }

    /// Runs the command in `project_root`, inheriting stdout and stderr.
    pub fn run(self, project_root: &Path) -> Result<()> {
        run_command(self.program(), self.args(), project_root)
    }
}

/// The command as it is logged and reported on failure.
fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

/// Runs `program` with `args` in `cwd` and fails on a non-zero exit.
pub fn run_command(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let command = command_line(program, args);
    log::info!("Running '{command}' in '{}'", cwd.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .status()?;
    if !status.success() {
        return Err(Error::CommandExecutionError { command, status });
    }
    log::debug!("'{command}' finished with {status}");
    Ok(())
}
