//! Config management use case

use crate::error::Result;
use crate::infrastructure::{Config, ConfigKey, Workspace};

/// Reads and updates `.snipbox/config.toml` by key name
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let key: ConfigKey = key.parse()?;
        Ok(self.workspace.load_config()?.get(key))
    }

    /// Validate and persist a new value; the file is untouched on error
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let key: ConfigKey = key.parse()?;
        let mut config = self.workspace.load_config()?;
        config.set(key, value)?;
        self.workspace.save_config(&config)
    }

    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterMode;
    use crate::error::SnipboxError;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(Workspace::create(temp.path()).unwrap())
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("default_filter").unwrap(), "all");
        assert_eq!(service.get("export_filename").unwrap(), "snippets.txt");
    }

    #[test]
    fn test_set_persists() {
        let temp = TempDir::new().unwrap();
        service(&temp).set("default_filter", "category").unwrap();

        let reopened = ConfigService::new(Workspace::locate_from(temp.path()).unwrap());
        assert_eq!(reopened.list().unwrap().default_filter, FilterMode::Category);
    }

    #[test]
    fn test_rejected_value_leaves_file_unchanged() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let before = std::fs::read_to_string(temp.path().join(".snipbox/config.toml")).unwrap();

        assert!(service.set("export_filename", "a/b.txt").is_err());

        let after = std::fs::read_to_string(temp.path().join(".snipbox/config.toml")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        match service(&temp).get("editor").unwrap_err() {
            SnipboxError::Config(msg) => assert!(msg.contains("Unknown config key: 'editor'")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
