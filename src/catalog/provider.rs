use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// Module specifier of the agent framework imported by every template.
pub const FRAMEWORK_MODULE: &str = "@google/adk";

/// Import line the templates ship with.
pub const PRIMARY_IMPORT: &str = "import { LlmAgent, FunctionTool } from '@google/adk';";

/// Import line needed when the model is routed through LiteLLM.
pub const LITELLM_IMPORT: &str =
    "import { LlmAgent, FunctionTool, LiteLlm } from '@google/adk';";

/// Model service the generated agent talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Gemini,
    OpenAI,
    Anthropic,
    Custom,
}

/// Static description of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub kind: ProviderKind,
    pub key: &'static str,
    pub name: &'static str,
    pub models: &'static [&'static str],
    /// Credential the generated project reads, if the provider has a fixed one.
    pub api_key_var: Option<&'static str>,
    pub import_statement: &'static str,
}

pub const PROVIDERS: &[ProviderDescriptor] = &[
    ProviderDescriptor {
        kind: ProviderKind::Gemini,
        key: "gemini",
        name: "Google Gemini",
        models: &["gemini-2.0-flash", "gemini-2.0-flash-thinking-exp-01-21", "gemini-1.5-pro"],
        api_key_var: Some("GEMINI_API_KEY"),
        import_statement: PRIMARY_IMPORT,
    },
    ProviderDescriptor {
        kind: ProviderKind::OpenAI,
        key: "openai",
        name: "OpenAI",
        models: &["openai/gpt-4o", "openai/gpt-4o-mini", "openai/gpt-4-turbo"],
        api_key_var: Some("OPENAI_API_KEY"),
        import_statement: LITELLM_IMPORT,
    },
    ProviderDescriptor {
        kind: ProviderKind::Anthropic,
        key: "anthropic",
        name: "Anthropic (Claude)",
        models: &[
            "anthropic/claude-3-5-sonnet",
            "anthropic/claude-3-opus",
            "anthropic/claude-3-haiku",
        ],
        api_key_var: Some("ANTHROPIC_API_KEY"),
        import_statement: LITELLM_IMPORT,
    },
    ProviderDescriptor {
        kind: ProviderKind::Custom,
        key: "custom",
        name: "Custom (LiteLLM)",
        models: &[],
        api_key_var: None,
        import_statement: LITELLM_IMPORT,
    },
];

impl ProviderKind {
    pub const PRIMARY: ProviderKind = ProviderKind::Gemini;

    pub fn descriptor(self) -> &'static ProviderDescriptor {
        match self {
            ProviderKind::Gemini => &PROVIDERS[0],
            ProviderKind::OpenAI => &PROVIDERS[1],
            ProviderKind::Anthropic => &PROVIDERS[2],
            ProviderKind::Custom => &PROVIDERS[3],
        }
    }

    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }

    /// First listed model, or the primary provider's first model for
    /// providers without a built-in list.
    pub fn default_model(self) -> &'static str {
        self.descriptor()
            .models
            .first()
            .or_else(|| Self::PRIMARY.descriptor().models.first())
            .copied()
            .unwrap_or_default()
    }

    /// Expression placed in the agent's `model:` field.
    ///
    /// The primary provider takes a bare quoted identifier; every other
    /// provider goes through the LiteLLM wrapper.
    pub fn model_config(self, model: &str) -> String {
        match self {
            ProviderKind::Gemini => format!("'{model}'"),
            ProviderKind::OpenAI | ProviderKind::Anthropic | ProviderKind::Custom => {
                format!("new LiteLlm({{ model: '{model}' }})")
            }
        }
    }

    /// Import statement the entry file needs, or `None` when the template's
    /// own import is already right.
    pub fn import_override(self) -> Option<&'static str> {
        if self.is_primary() {
            None
        } else {
            Some(self.descriptor().import_statement)
        }
    }

    pub fn expected_keys() -> String {
        PROVIDERS.iter().map(|p| p.key).collect::<Vec<_>>().join(", ")
    }
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PROVIDERS.iter().find(|p| p.key == s.trim()).map(|p| p.kind).ok_or_else(|| {
            Error::UnknownProviderError {
                key: s.to_string(),
                expected: Self::expected_keys(),
            }
        })
    }
}
