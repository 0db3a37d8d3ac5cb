use crate::{ListViewConfig, ListViewError};
use std::fs;
use std::path::{Path, PathBuf};

/// Named list view configurations persisted as JSON files in one directory.
///
/// Holds only the admin-authored [`ListViewConfig`]. Runtime choices made on a
/// `ListView` (sort, search, filters, text wrap, column widths) are never
/// written here and start fresh on every load.
pub struct ListViewConfigStore {
    dir: PathBuf,
}

impl ListViewConfigStore {
    /// Store rooted at the platform config directory (`<config>/listview/views`).
    pub fn new() -> Result<Self, ListViewError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ListViewError::Io(std::io::Error::other("Could not find config directory"))
        })?;

        Self::from_dir(config_dir.join("listview").join("views"))
    }

    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self, ListViewError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load(&self, name: &str) -> Result<ListViewConfig, ListViewError> {
        let content = fs::read_to_string(self.path_for(name)?)?;
        ListViewConfig::from_json(&content)
    }

    pub fn save(&self, name: &str, config: &ListViewConfig) -> Result<(), ListViewError> {
        config.validate()?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(self.path_for(name)?, content)?;
        log::info!("Saved list view configuration '{}'", name);
        Ok(())
    }

    pub fn remove(&self, name: &str) -> Result<bool, ListViewError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(path)?;
        Ok(true)
    }

    /// Names of all stored configurations, sorted.
    pub fn list(&self) -> Result<Vec<String>, ListViewError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, ListViewError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(ListViewError::InvalidConfig(format!(
                "invalid view name '{}'",
                name
            )));
        }

        Ok(self.dir.join(format!("{}.json", name)))
    }
}
