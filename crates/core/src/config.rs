//! Session configuration: the suggestion text and the commit trigger.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a suggestion configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The TOML document could not be parsed.
	#[error("failed to parse suggestion config: {0}")]
	Parse(#[from] toml::de::Error),

	/// The commit trigger is a line break. A line never ends with its own
	/// break, so such a trigger could never fire.
	#[error("commit trigger may not be a line break")]
	LineBreakTrigger,

	/// The commit trigger is a visible character. Matching trims the typed
	/// line, so a visible trigger would become part of the text being
	/// matched and no trigger-terminated line could ever match.
	#[error("commit trigger must be whitespace, got {0:?}")]
	NonWhitespaceTrigger(char),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Host-supplied settings for one suggestion session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionConfig {
	/// The multi-line text offered as ghost text.
	pub template: String,
	/// Character that accepts the suggestion when a matched line ends
	/// with it.
	#[serde(default = "default_commit_trigger")]
	pub commit_trigger: char,
}

fn default_commit_trigger() -> char {
	'\t'
}

impl SuggestionConfig {
	pub fn new(template: impl Into<String>) -> Self {
		Self {
			template: template.into(),
			commit_trigger: default_commit_trigger(),
		}
	}

	/// Parses a TOML document and validates the result.
	pub fn from_toml_str(raw: &str) -> Result<Self> {
		let config: Self = toml::from_str(raw)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that the trigger can actually fire. An empty template is
	/// accepted; the session it configures just never matches.
	pub fn validate(&self) -> Result<()> {
		if matches!(self.commit_trigger, '\n' | '\r') {
			return Err(ConfigError::LineBreakTrigger);
		}
		if !self.commit_trigger.is_whitespace() {
			return Err(ConfigError::NonWhitespaceTrigger(self.commit_trigger));
		}
		Ok(())
	}
}
