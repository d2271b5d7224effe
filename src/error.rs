use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::{exit_codes, CANCELLED_MESSAGE};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}.")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Prompt failed: {0}.")]
    PromptError(dialoguer::Error),

    #[error("Failed to walk template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    /// The user aborted a prompt or declined to overwrite the target.
    #[error("{}", CANCELLED_MESSAGE)]
    Cancelled,

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A prompt was reached in non-interactive mode without any usable default.
    #[error("No value available for '{prompt}'. Pass it on the command line.")]
    MissingAnswer { prompt: String },

    #[error("Unknown model provider '{key}'. Expected one of: {expected}.")]
    UnknownProviderError { key: String, expected: String },

    #[error("✖ Error: Template \"{template}\" not found!")]
    TemplateNotFoundError { template: String },

    #[error("Package manifest '{manifest}' is not a JSON object.")]
    ManifestError { manifest: String },

    #[error(
        "Cannot proceed: output directory '{output_dir}' already exists and is not empty. \
         Use --force to overwrite it."
    )]
    OutputDirectoryExistsError { output_dir: String },

    /// An external command (`git init`, `npm install`) finished with an error.
    #[error("Command '{command}' failed with status: {status}")]
    CommandExecutionError { command: String, status: ExitStatus },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

impl From<dialoguer::Error> for Error {
    /// Ctrl-C inside a prompt surfaces as an interrupted read and means the same as Escape.
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                Error::Cancelled
            }
            other => Error::PromptError(other),
        }
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Cancellation is not a failure: the message is printed to stdout and the
/// process exits with status 0. Every other error goes to stderr with status 1.
pub fn default_error_handler(err: Error) -> ! {
    if err.is_cancelled() {
        println!("{err}");
        std::process::exit(exit_codes::SUCCESS);
    }
    log::debug!("Aborting: {err:?}");
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_is_detected() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::ValidationError("x".into()).is_cancelled());
    }

    #[test]
    fn template_not_found_names_the_template() {
        let err = Error::TemplateNotFoundError {
            template: "nope".into(),
        };
        assert_eq!(err.to_string(), "✖ Error: Template \"nope\" not found!");
    }

    #[test]
    fn interrupted_prompt_is_a_cancellation() {
        let interrupted = std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c");
        assert!(Error::from(dialoguer::Error::IO(interrupted)).is_cancelled());

        let broken = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = Error::from(dialoguer::Error::IO(broken));
        assert!(matches!(err, Error::PromptError(_)));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn output_directory_message_is_one_line() {
        let err = Error::OutputDirectoryExistsError {
            output_dir: "out".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot proceed: output directory 'out' already exists and is not empty. \
             Use --force to overwrite it."
        );
    }

    #[test]
    fn cancelled_message_matches_constant() {
        assert_eq!(Error::Cancelled.to_string(), CANCELLED_MESSAGE);
    }
}
