#![allow(dead_code)]

use create_adk_agent::cli::{Args, CommonArgs, Runner};
use create_adk_agent::config::ResolvedConfig;
use create_adk_agent::error::Result;
use create_adk_agent::prompt::AutomaticPrompter;
use create_adk_agent::template::ScaffoldOutcome;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Relative paths of every file under `dir`, sorted.
pub fn list_files(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let files1 = list_files(actual);
    let files2 = list_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", actual);
    println!("Expected output: {:?}", expected);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read_to_string(actual.join(file)).unwrap_or_default();
        let content2 = fs::read_to_string(expected.join(file)).unwrap_or_default();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{content1}");
            println!("  --- Expected content:\n{content2}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts two directory trees are identical, printing the differences first.
pub fn assert_same_tree(actual: &Path, expected: &str) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected.as_ref());
        panic!("Directories differ. See above for details.");
    }
}

pub fn args(target: &str) -> Args {
    Args {
        target_dir: Some(target.to_string()),
        common: CommonArgs {
            non_interactive: true,
            verbose: 2,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Runs the scaffolding workflow inside `cwd` with scripted answers.
pub fn scaffold_in(
    cwd: &Path,
    args: Args,
    prompter: &AutomaticPrompter,
) -> Result<(ResolvedConfig, ScaffoldOutcome)> {
    Runner::new(args).run_in(cwd, prompter)
}
