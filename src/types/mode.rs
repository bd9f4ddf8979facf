use crate::error::CreditError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy turning assessment completion into a grading grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// Full credit only when every allocated assessment is finished.
    All,
    /// Credit proportional to the share of finished assessments.
    #[default]
    Proportional,
    /// Full credit once at least one assessment is finished.
    One,
}

impl EvaluationMode {
    pub const ALL_MODES: [EvaluationMode; 3] = [Self::All, Self::Proportional, Self::One];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Proportional => "proportional",
            Self::One => "one",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All or nothing",
            Self::Proportional => "Proportional",
            Self::One => "At least one",
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationMode {
    type Err = CreditError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(Self::All),
            "proportional" => Ok(Self::Proportional),
            "one" => Ok(Self::One),
            other => Err(CreditError::InvalidMode(other.to_string())),
        }
    }
}
