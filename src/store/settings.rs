use crate::error::{CreditError, Result};
use crate::store::SettingsStore;
use crate::types::assessment::WorkshopId;
use crate::types::mode::EvaluationMode;
use crate::types::settings::EvaluationSettings;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    workshops: BTreeMap<WorkshopId, StoredSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSettings {
    mode: String,
    updated_at: String,
}

impl StoredSettings {
    fn new(mode: EvaluationMode) -> Self {
        Self {
            mode: mode.as_str().to_string(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Evaluation settings of all workshops in one JSON file. Every mutation
/// rewrites the file.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn read(&self) -> Result<SettingsFile> {
        if !self.path.exists() {
            return Ok(SettingsFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| CreditError::DataParse(format!("{}: {}", self.path.display(), e)))
    }

    fn write(&self, file: &SettingsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn load_settings(&self, workshop_id: WorkshopId) -> Result<Option<EvaluationSettings>> {
        let file = self.read()?;
        let Some(stored) = file.workshops.get(&workshop_id) else {
            return Ok(None);
        };
        match stored.mode.parse::<EvaluationMode>() {
            Ok(mode) => Ok(Some(EvaluationSettings::new(workshop_id, mode))),
            Err(_) => {
                tracing::warn!(
                    workshop_id,
                    mode = %stored.mode,
                    "ignoring stored settings with unrecognized mode"
                );
                Ok(None)
            }
        }
    }

    fn insert_settings(&mut self, settings: &EvaluationSettings) -> Result<()> {
        let mut file = self.read()?;
        file.workshops
            .insert(settings.workshop_id, StoredSettings::new(settings.mode));
        self.write(&file)
    }

    fn update_mode(&mut self, workshop_id: WorkshopId, mode: EvaluationMode) -> Result<()> {
        let mut file = self.read()?;
        match file.workshops.get_mut(&workshop_id) {
            Some(stored) => *stored = StoredSettings::new(mode),
            None => {
                return Err(CreditError::DataParse(format!(
                    "no settings stored for workshop {workshop_id}"
                )));
            }
        }
        self.write(&file)
    }

    fn delete_settings(&mut self, workshop_id: WorkshopId) -> Result<()> {
        let mut file = self.read()?;
        if file.workshops.remove(&workshop_id).is_none() {
            return Ok(());
        }
        self.write(&file)
    }
}
