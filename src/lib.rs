/// Handles argument parsing.
pub mod cli;

/// Built-in template and model provider tables.
pub mod catalog;

/// Option resolution from flags, prompts and defaults.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// The `init` generator.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// User input and interaction handling.
pub mod prompt;

/// Core template processing orchestration.
pub mod template;

/// Package name and target directory helpers.
pub mod validation;
