use serde::{Deserialize, Serialize};

/// Failure to read a [`ShellConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to parse navigation config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Host-level navigation settings.
///
/// ```toml
/// animate_by_default = true
///
/// [restoration]
/// enabled = true
/// discard_invalid = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
	/// Animation flag used by [`crate::Navigator::push`] and the plain pop calls.
	pub animate_by_default: bool,
	pub restoration: RestorationConfig,
}

impl Default for ShellConfig {
	fn default() -> Self {
		Self {
			animate_by_default: true,
			restoration: RestorationConfig::default(),
		}
	}
}

impl ShellConfig {
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RestorationConfig {
	/// When false, [`crate::NavigationShell::restore`] does nothing.
	pub enabled: bool,
	/// Ask the store to drop a snapshot that failed to decode.
	pub discard_invalid: bool,
}

impl Default for RestorationConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			discard_invalid: true,
		}
	}
}
