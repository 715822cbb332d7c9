use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::ProgressSettings;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ArcSafeRecycle";
const APP_NAME: &str = "ArcSafeRecycle";

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Loads saved progress, normalized. A missing or unreadable file just
/// means a fresh start.
pub fn load_progress_settings() -> Option<ProgressSettings> {
    let path = settings_file()?;
    let data = fs::read_to_string(path).ok()?;
    let mut settings: ProgressSettings = serde_json::from_str(&data).ok()?;
    settings.normalize();
    Some(settings)
}

pub fn save_progress_settings(settings: &ProgressSettings) -> Result<(), PersistSaveError> {
    let path = settings_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::ProgressSettings;

    #[test]
    fn sparse_settings_json_normalizes() {
        let mut settings: ProgressSettings =
            serde_json::from_str(r#"{"workstations": {"Workbench": 2}}"#).unwrap();
        settings.normalize();

        assert_eq!(settings.workstation_level("Workbench"), 2);
        assert_eq!(settings.expedition_phase(), 0);
    }

    #[test]
    fn saved_shape_matches_what_load_expects() {
        let mut settings = ProgressSettings::default();
        settings.normalize();
        settings.set_workstation_level("Scrappy", 4);

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let mut back: ProgressSettings = serde_json::from_str(&json).unwrap();
        back.normalize();
        assert_eq!(back, settings);
    }
}
