//! User selection of the source/target systems and mapping options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// How the backend resolves ambiguous replicate-to-target matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemappingOption {
    /// Match on the normalized leading token, either side containing the other.
    Substring,
    /// Match only identical replicate types once size details are stripped.
    Exact,
    /// Leave target types unresolved.
    #[serde(rename = "none")]
    Disabled,
}

impl RemappingOption {
    pub const ALL: [RemappingOption; 3] = [Self::Substring, Self::Exact, Self::Disabled];

    /// Value sent in the `remapping_option` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Exact => "exact",
            Self::Disabled => "none",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Substring => "Substring match",
            Self::Exact => "Exact match",
            Self::Disabled => "No remapping",
        }
    }
}

impl fmt::Display for RemappingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemappingOption {
    type Err = SelectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SelectionError::UnknownRemappingOption(trimmed.to_string()))
    }
}

/// A validated selection, ready to be turned into a table request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub source: String,
    pub target: String,
    pub use_advanced: bool,
    pub remapping_option: RemappingOption,
    /// Ask the backend to re-scrape its documentation pages before combining.
    #[serde(default)]
    pub refresh_sources: bool,
}

/// Raw form values as read from the controls, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDraft {
    pub source: String,
    pub target: String,
    pub use_advanced: bool,
    pub remapping_option: Option<String>,
    pub refresh_sources: bool,
}

impl SelectionDraft {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_remapping_option(mut self, option: impl Into<String>) -> Self {
        self.remapping_option = Some(option.into());
        self
    }

    #[must_use]
    pub fn with_advanced(mut self, enable: bool) -> Self {
        self.use_advanced = enable;
        self
    }

    #[must_use]
    pub fn with_refresh(mut self, enable: bool) -> Self {
        self.refresh_sources = enable;
        self
    }

    /// Check required fields. Systems are checked before the remapping option.
    pub fn validate(&self) -> Result<Selection, SelectionError> {
        let source = self.source.trim();
        let target = self.target.trim();
        if source.is_empty() || target.is_empty() {
            return Err(SelectionError::MissingSystems);
        }
        let remapping_option = match self.remapping_option.as_deref().map(str::trim) {
            None | Some("") => return Err(SelectionError::MissingRemappingOption),
            Some(value) => value.parse::<RemappingOption>()?,
        };
        Ok(Selection {
            source: source.to_string(),
            target: target.to_string(),
            use_advanced: self.use_advanced,
            remapping_option,
            refresh_sources: self.refresh_sources,
        })
    }
}
