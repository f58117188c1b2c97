//! Small key/value persistence for user preferences.
//!
//! Only the interface language is persisted today, under
//! [`LANGUAGE_PREFERENCE_KEY`]. Everything else resets between runs.

use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::{
    error::StoreError,
    i18n::{Language, LANGUAGE_PREFERENCE_KEY},
};

const APP_DIR: &str = "vibe-guide";
const PREFERENCES_FILE: &str = "preferences.json";

pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// JSON object on disk, one string value per key.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform configuration directory.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf, StoreError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(PREFERENCES_FILE))
            .ok_or(StoreError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        // temp file in the same directory so the rename stays on one filesystem
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path).map_err(|err| err.error)?;

        debug!(target: "vibeguide::store", path = %self.path.display(), "preferences written");
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Serialization(err)) => {
                warn!(
                    target: "vibeguide::store",
                    path = %self.path.display(),
                    error = %err,
                    "replacing unreadable preference file"
                );
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }
}

/// In-process store, used by tests and when no config directory exists.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored language, or the default when nothing usable is stored.
///
/// Read failures are logged and treated as "nothing stored".
pub fn load_language<P: PreferenceStore + ?Sized>(store: &P) -> Language {
    match store.load(LANGUAGE_PREFERENCE_KEY) {
        Ok(stored) => Language::from_stored(stored.as_deref()),
        Err(err) => {
            warn!(target: "vibeguide::store", error = %err, "could not read language preference");
            Language::default()
        }
    }
}

pub fn save_language<P: PreferenceStore + ?Sized>(
    store: &P,
    language: Language,
) -> Result<(), StoreError> {
    store.save(LANGUAGE_PREFERENCE_KEY, language.code())
}
