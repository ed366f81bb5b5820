//! Semantic intents that drive widget coloring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classes;

/// The four basic intents, plus the neutral `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    None,
    Primary,
    Success,
    Warning,
    Danger,
}

impl Intent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Whether this is the neutral intent.
    pub fn is_none(&self) -> bool {
        *self == Intent::None
    }

    /// CSS class for this intent; None for the neutral intent.
    pub fn class(&self) -> Option<String> {
        if self.is_none() {
            None
        } else {
            Some(format!("{}-intent-{}", classes::NS, self.as_str()))
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
