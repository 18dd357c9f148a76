//! Validator configuration
//!
//! Controls what happens to malformed annotations and how failure messages
//! are rendered. Usually left at its default; a service can also load it
//! from JSON alongside the rest of its settings.

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// What schema compilation does with an annotation it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Malformed bounds turn the field into an always-valid one and log a
    /// warning; parameters after `email` are ignored with a warning; an
    /// uncompilable regex is reported as a violation of that field on every
    /// non-empty value.
    #[default]
    Degrade,
    /// Any malformed annotation, regex included, fails schema compilation.
    Reject,
}

/// Configuration for schema compilation and report rendering.
///
/// # Examples
///
/// ```
/// use fieldcheck::config::{MalformedPolicy, ValidatorConfig};
///
/// let config = ValidatorConfig::from_json(r#"{ "malformed": "reject" }"#).unwrap();
/// assert_eq!(config.malformed, MalformedPolicy::Reject);
/// assert_eq!(config.label_separator, " ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Handling of malformed annotations.
    pub malformed: MalformedPolicy,
    /// Inserted between a field's label and its checker message.
    pub label_separator: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            malformed: MalformedPolicy::default(),
            label_separator: " ".to_owned(),
        }
    }
}

impl ValidatorConfig {
    /// Lenient configuration (the default).
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Configuration that rejects every malformed annotation.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            malformed: MalformedPolicy::Reject,
            ..Self::default()
        }
    }

    /// Sets the malformed-annotation policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Sets the label separator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label_separator(mut self, separator: impl Into<String>) -> Self {
        self.label_separator = separator.into();
        self
    }

    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
