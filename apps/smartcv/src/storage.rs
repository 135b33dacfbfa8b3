//! Settings persistence: one JSON file per concern in the platform-local
//! data directory. Constructed explicitly and passed to whoever needs it;
//! loads degrade to defaults on missing or unreadable files so a damaged
//! settings directory never blocks a generation run.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::UserRecord;
use crate::render::Template;
use crate::sections::{SectionRegistry, SectionSpec};

const SECTION_NAMES_FILE: &str = "section_names.json";
const SECTION_ORDER_FILE: &str = "section_order.json";
const USER_PROFILE_FILE: &str = "user_profile.json";
const APP_PREFERENCES_FILE: &str = "app_preferences.json";

/// A settings concern that can be reset independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFile {
    SectionNames,
    SectionOrder,
    UserProfile,
    AppPreferences,
}

impl SettingsFile {
    fn file_name(&self) -> &'static str {
        match self {
            SettingsFile::SectionNames => SECTION_NAMES_FILE,
            SettingsFile::SectionOrder => SECTION_ORDER_FILE,
            SettingsFile::UserProfile => USER_PROFILE_FILE,
            SettingsFile::AppPreferences => APP_PREFERENCES_FILE,
        }
    }

    const ALL: [SettingsFile; 4] = [
        SettingsFile::SectionNames,
        SettingsFile::SectionOrder,
        SettingsFile::UserProfile,
        SettingsFile::AppPreferences,
    ];
}

#[derive(Debug, Default, Clone, Serialize, serde::Deserialize)]
struct AppPreferences {
    #[serde(default)]
    template: Option<String>,
}

/// File-backed settings store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Opens the store in the platform data directory for `app_name`,
    /// creating it if needed.
    pub fn open(app_name: &str) -> Result<Self, AppError> {
        let dirs = ProjectDirs::from("", "", app_name)
            .ok_or_else(|| AppError::Storage("no usable home directory".to_string()))?;
        Self::at(dirs.data_local_dir())
    }

    /// Opens the store at an explicit directory (tests, portable installs).
    pub fn at(dir: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(dir)?;
        Ok(SettingsStore {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: SettingsFile) -> PathBuf {
        self.dir.join(file.file_name())
    }

    fn load_or<T: DeserializeOwned>(&self, file: SettingsFile, default: impl FnOnce() -> T) -> T {
        let path = self.path(file);
        if !path.exists() {
            return default();
        }
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Unreadable settings in {}: {e}; using defaults", path.display());
                    default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {e}; using defaults", path.display());
                default()
            }
        }
    }

    fn save<T: Serialize>(&self, file: SettingsFile, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Storage(format!("serialize {}: {e}", file.file_name())))?;
        fs::write(self.path(file), raw)?;
        Ok(())
    }

    pub fn load_registry(&self) -> SectionRegistry {
        let specs: Vec<SectionSpec> = self.load_or(SettingsFile::SectionNames, Vec::new);
        if specs.is_empty() {
            SectionRegistry::new()
        } else {
            SectionRegistry::from_specs(specs)
        }
    }

    pub fn save_registry(&self, registry: &SectionRegistry) -> Result<(), AppError> {
        let specs: Vec<&SectionSpec> = registry.iter().collect();
        self.save(SettingsFile::SectionNames, &specs)
    }

    pub fn load_order(&self) -> Vec<String> {
        self.load_or(SettingsFile::SectionOrder, crate::sections::default_section_order)
    }

    pub fn save_order(&self, order: &[String]) -> Result<(), AppError> {
        self.save(SettingsFile::SectionOrder, &order)
    }

    pub fn load_user_record(&self) -> UserRecord {
        self.load_or(SettingsFile::UserProfile, UserRecord::default)
    }

    pub fn save_user_record(&self, record: &UserRecord) -> Result<(), AppError> {
        self.save(SettingsFile::UserProfile, record)
    }

    pub fn load_template(&self) -> Template {
        let preferences: AppPreferences = self.load_or(SettingsFile::AppPreferences, AppPreferences::default);
        preferences
            .template
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    pub fn save_template(&self, template: Template) -> Result<(), AppError> {
        self.save(
            SettingsFile::AppPreferences,
            &AppPreferences {
                template: Some(template.as_str().to_string()),
            },
        )
    }

    /// Deletes one settings file; absent files count as already reset.
    pub fn reset(&self, file: SettingsFile) -> Result<(), AppError> {
        let path = self.path(file);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes every settings file, returning how many existed.
    pub fn reset_all(&self) -> Result<usize, AppError> {
        let mut removed = 0;
        for file in SettingsFile::ALL {
            if self.path(file).exists() {
                self.reset(file)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, Proficiency};

    fn store() -> (tempfile::TempDir, SettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_registry_round_trip() {
        let (_dir, store) = store();
        let mut registry = SectionRegistry::with_profile_name("Summary");
        registry.insert("Key Skills").unwrap();
        store.save_registry(&registry).unwrap();
        assert_eq!(store.load_registry(), registry);
    }

    #[test]
    fn test_missing_files_load_defaults() {
        let (_dir, store) = store();
        assert_eq!(store.load_registry(), SectionRegistry::new());
        assert_eq!(store.load_order(), crate::sections::default_section_order());
        assert_eq!(store.load_user_record(), UserRecord::default());
        assert_eq!(store.load_template(), Template::Modern);
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let (_dir, store) = store();
        fs::write(store.dir().join(SECTION_ORDER_FILE), "{not json").unwrap();
        assert_eq!(store.load_order(), crate::sections::default_section_order());
    }

    #[test]
    fn test_order_round_trip() {
        let (_dir, store) = store();
        let order = vec!["profile".to_string(), "education".to_string()];
        store.save_order(&order).unwrap();
        assert_eq!(store.load_order(), order);
    }

    #[test]
    fn test_user_record_round_trip() {
        let (_dir, store) = store();
        let record = UserRecord {
            name: "Dana Vega".to_string(),
            languages: vec![Language {
                name: "Portuguese".to_string(),
                proficiency: Proficiency::Native,
            }],
            ..UserRecord::default()
        };
        store.save_user_record(&record).unwrap();
        assert_eq!(store.load_user_record(), record);
    }

    #[test]
    fn test_template_preference_round_trip() {
        let (_dir, store) = store();
        store.save_template(Template::Professional).unwrap();
        assert_eq!(store.load_template(), Template::Professional);
    }

    #[test]
    fn test_reset_is_selective_and_idempotent() {
        let (_dir, store) = store();
        store.save_order(&["profile".to_string()]).unwrap();
        store.save_template(Template::Professional).unwrap();

        store.reset(SettingsFile::SectionOrder).unwrap();
        store.reset(SettingsFile::SectionOrder).unwrap(); // already gone
        assert_eq!(store.load_order(), crate::sections::default_section_order());
        assert_eq!(store.load_template(), Template::Professional);
    }

    #[test]
    fn test_reset_all_counts_existing_files() {
        let (_dir, store) = store();
        store.save_order(&["profile".to_string()]).unwrap();
        store.save_user_record(&UserRecord::default()).unwrap();
        assert_eq!(store.reset_all().unwrap(), 2);
        assert_eq!(store.reset_all().unwrap(), 0);
    }
}
