use crate::api::HabitTracker;
use crate::config::HabitzConfig;
use crate::error::{HabitzError, Result};
use crate::storage::fs::FileStorage;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct HabitzContext {
    pub tracker: HabitTracker<FileStorage>,
    pub config: HabitzConfig,
    pub data_dir: PathBuf,
}

/// Platform data directory for habitz, e.g. `~/.local/share/habitz` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "habitz", "habitz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HabitzError::Config("Could not determine data directory".to_string()))
}

/// Opens a file-backed tracker in `data_dir`, reading `config.json` there.
///
/// A broken config file falls back to defaults, like a broken habits file.
pub fn initialize(data_dir: &Path) -> HabitzContext {
    let config = HabitzConfig::load(data_dir).unwrap_or_else(|err| {
        log::warn!(
            "event=config_load module=init status=defaults dir={} error=\"{}\"",
            data_dir.display(),
            err
        );
        HabitzConfig::default()
    });

    let storage = FileStorage::new(data_dir);
    let tracker =
        HabitTracker::open(storage, config.storage_key.clone()).with_filter(config.default_filter);

    HabitzContext {
        tracker,
        config,
        data_dir: data_dir.to_path_buf(),
    }
}
