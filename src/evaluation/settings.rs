use crate::error::Result;
use crate::store::SettingsStore;
use crate::types::assessment::WorkshopId;
use crate::types::mode::EvaluationMode;
use crate::types::settings::{EvaluationSettings, PersistOutcome};

/// Saved workshop mode, or the site default when nothing was saved.
pub fn resolve_mode(
    saved: Option<&EvaluationSettings>,
    site_default: EvaluationMode,
) -> EvaluationMode {
    match saved {
        Some(settings) => settings.mode,
        None => {
            tracing::debug!(mode = %site_default, "no saved settings, using site default");
            site_default
        }
    }
}

/// Stores `mode` for the workshop unless `loaded` already holds it.
pub fn persist_mode_if_changed<S: SettingsStore + ?Sized>(
    store: &mut S,
    workshop_id: WorkshopId,
    loaded: Option<&EvaluationSettings>,
    mode: EvaluationMode,
) -> Result<PersistOutcome> {
    let outcome = match loaded {
        None => {
            store.insert_settings(&EvaluationSettings::new(workshop_id, mode))?;
            PersistOutcome::Inserted
        }
        Some(settings) if settings.mode != mode => {
            store.update_mode(workshop_id, mode)?;
            PersistOutcome::Updated
        }
        Some(_) => PersistOutcome::Unchanged,
    };
    tracing::info!(workshop_id, %mode, ?outcome, "evaluation settings persisted");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemorySettingsStore;

    #[test]
    fn resolve_prefers_saved_mode() {
        let saved = EvaluationSettings::new(22, EvaluationMode::All);
        assert_eq!(
            resolve_mode(Some(&saved), EvaluationMode::Proportional),
            EvaluationMode::All
        );
    }

    #[test]
    fn resolve_falls_back_to_site_default() {
        assert_eq!(resolve_mode(None, EvaluationMode::One), EvaluationMode::One);
    }

    #[test]
    fn first_save_inserts() {
        let mut store = MemorySettingsStore::default();
        let outcome = persist_mode_if_changed(&mut store, 22, None, EvaluationMode::All)
            .expect("persist should succeed");

        assert_eq!(outcome, PersistOutcome::Inserted);
        assert_eq!(
            store.load_settings(22).expect("load should succeed"),
            Some(EvaluationSettings::new(22, EvaluationMode::All))
        );
    }

    #[test]
    fn changed_mode_updates_in_place() {
        let mut store = MemorySettingsStore::default();
        persist_mode_if_changed(&mut store, 22, None, EvaluationMode::All)
            .expect("persist should succeed");
        let loaded = store.load_settings(22).expect("load should succeed");

        let outcome =
            persist_mode_if_changed(&mut store, 22, loaded.as_ref(), EvaluationMode::One)
                .expect("persist should succeed");

        assert_eq!(outcome, PersistOutcome::Updated);
        assert_eq!(store.writes, 2);
        assert_eq!(
            store
                .load_settings(22)
                .expect("load should succeed")
                .map(|settings| settings.mode),
            Some(EvaluationMode::One)
        );
    }

    #[test]
    fn repeated_save_with_same_mode_does_not_write() {
        let mut store = MemorySettingsStore::default();
        persist_mode_if_changed(&mut store, 22, None, EvaluationMode::One)
            .expect("persist should succeed");
        let loaded = store.load_settings(22).expect("load should succeed");

        for _ in 0..3 {
            let outcome =
                persist_mode_if_changed(&mut store, 22, loaded.as_ref(), EvaluationMode::One)
                    .expect("persist should succeed");
            assert_eq!(outcome, PersistOutcome::Unchanged);
        }
        assert_eq!(store.writes, 1);
    }
}
