use crate::types::assessment::WorkshopId;
use crate::types::mode::EvaluationMode;
use serde::Serialize;

/// Per-workshop evaluation settings. One record per workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationSettings {
    pub workshop_id: WorkshopId,
    pub mode: EvaluationMode,
}

impl EvaluationSettings {
    pub fn new(workshop_id: WorkshopId, mode: EvaluationMode) -> Self {
        Self { workshop_id, mode }
    }
}

/// What `persist_mode_if_changed` did to the stored settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistOutcome {
    Inserted,
    Updated,
    Unchanged,
    /// Dry runs never touch the store.
    Skipped,
}

impl PersistOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
            Self::Skipped => "skipped",
        }
    }
}
