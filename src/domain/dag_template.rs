//! Placeholder substitution for DAG templates.
//!
//! The template is plain text. Tokens are replaced verbatim with no escaping
//! and no check that they were present; this is not a templating language.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE_TOKEN: &str = "<config_file>";
pub const DEFAULT_DAG_NAME_TOKEN: &str = "<dag_name>";

/// The two literal tokens replaced in a DAG template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PlaceholderTokens {
    /// Replaced with the config-directory-qualified config path.
    pub config_file: String,
    /// Replaced with the DAG name.
    pub dag_name: String,
}

impl Default for PlaceholderTokens {
    fn default() -> Self {
        Self {
            config_file: DEFAULT_CONFIG_FILE_TOKEN.to_string(),
            dag_name: DEFAULT_DAG_NAME_TOKEN.to_string(),
        }
    }
}

/// A loaded DAG template.
#[derive(Debug, Clone)]
pub struct DagTemplate {
    text: String,
    tokens: PlaceholderTokens,
}

impl DagTemplate {
    pub fn new(text: impl Into<String>, tokens: PlaceholderTokens) -> Self {
        Self { text: text.into(), tokens }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &PlaceholderTokens {
        &self.tokens
    }

    /// Substitute both tokens.
    ///
    /// The config path goes in first and the DAG name second, so a DAG-name
    /// token that appears inside the config path is replaced as well.
    pub fn render(&self, config_path: &str, dag_name: &str) -> String {
        self.text
            .replace(&self.tokens.config_file, config_path)
            .replace(&self.tokens.dag_name, dag_name)
    }

    /// Tokens that never occur in the template text.
    pub fn missing_tokens(&self) -> Vec<&str> {
        [self.tokens.config_file.as_str(), self.tokens.dag_name.as_str()]
            .into_iter()
            .filter(|token| !self.text.contains(token))
            .collect()
    }
}
