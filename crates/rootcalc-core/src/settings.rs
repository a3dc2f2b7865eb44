use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::format::{DEFAULT_PRECISION, MAX_PRECISION};

/// Runtime settings of the utility.
///
/// Loaded from a JSON file and then overridden by command-line flags.
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RootSettings {
    /// Prefix printed at the start of every output line.
    pub label: Option<String>,
    /// Reject malformed numbers instead of reading them like `atof`.
    pub strict: bool,
    /// Significant digits for `%g` output.
    pub precision: usize,
}

impl Default for RootSettings {
    fn default() -> Self {
        Self {
            label: None,
            strict: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl RootSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(SettingsError::InvalidPrecision {
                value: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }

    /// Applies command-line overrides. A flag that was not given keeps the
    /// value from the file.
    pub fn with_overrides(mut self, label: Option<String>, strict: bool) -> Self {
        if label.is_some() {
            self.label = label;
        }
        self.strict |= strict;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }
}
