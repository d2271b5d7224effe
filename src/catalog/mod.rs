//! Static, read-only tables of templates and model providers.

pub mod provider;
pub mod template;

pub use provider::{ProviderDescriptor, ProviderKind, PROVIDERS};
pub use template::{locate_template, templates_root, TemplateDescriptor, TEMPLATES};
