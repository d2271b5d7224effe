//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic_impl`: Answers from a script or from prompt defaults

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;

pub use automatic_impl::AutomaticPrompter;
pub use interface::*;

use self::dialoguer::DialoguerPrompter;

/// Picks the prompt backend for a run.
///
/// Non-interactive runs answer every question with its default.
pub fn get_prompt_provider(non_interactive: bool) -> Box<dyn PromptProvider> {
    if non_interactive {
        Box::new(AutomaticPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    }
}
