//! The `.snipbox/` directory: where it is, what it holds

use crate::error::{Result, SnipboxError};
use crate::infrastructure::{Config, JsonFileStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the directory marking a snippet box root
pub const SNIPBOX_DIR: &str = ".snipbox";

/// Environment variable pointing at a snippet box root
pub const SNIPBOX_ROOT_ENV: &str = "SNIPBOX_ROOT";

/// A snippet box rooted at a directory containing `.snipbox/`
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create `.snipbox/` with a default config under `root`
    pub fn create(root: &Path) -> Result<Self> {
        let dir = root.join(SNIPBOX_DIR);
        if dir.exists() {
            return Err(SnipboxError::Config(format!(
                "Directory already initialized: {}",
                root.display()
            )));
        }
        fs::create_dir_all(&dir)?;

        let workspace = Workspace {
            root: root.to_path_buf(),
        };
        workspace.save_config(&Config::default())?;
        Ok(workspace)
    }

    /// `$SNIPBOX_ROOT` if set, else the nearest box above the current directory
    pub fn locate() -> Result<Self> {
        match std::env::var_os(SNIPBOX_ROOT_ENV) {
            Some(root) => Self::at(PathBuf::from(root)),
            None => Self::locate_from(&std::env::current_dir()?),
        }
    }

    /// Nearest box at or above `start`
    pub fn locate_from(start: &Path) -> Result<Self> {
        let root = start
            .ancestors()
            .find(|dir| Self::is_box(dir))
            .ok_or_else(|| SnipboxError::NotSnipboxDirectory(start.to_path_buf()))?;

        debug!(root = %root.display(), "located snippet box");
        Ok(Workspace {
            root: root.to_path_buf(),
        })
    }

    fn at(root: PathBuf) -> Result<Self> {
        if !Self::is_box(&root) {
            return Err(SnipboxError::Config(format!(
                "SNIPBOX_ROOT is set to '{}' but no .snipbox directory found. \
                Run 'snipbox init' in that directory or unset SNIPBOX_ROOT.",
                root.display()
            )));
        }
        Ok(Workspace { root })
    }

    fn is_box(dir: &Path) -> bool {
        dir.join(SNIPBOX_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The JSON store holding categories and snippets
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.root.join(SNIPBOX_DIR).join("store.json"))
    }

    fn config_path(&self) -> PathBuf {
        self.root.join(SNIPBOX_DIR).join("config.toml")
    }

    pub fn load_config(&self) -> Result<Config> {
        match fs::read_to_string(self.config_path()) {
            Ok(contents) => Config::parse(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SnipboxError::NotSnipboxDirectory(self.root.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        fs::write(self.config_path(), config.render()?)?;
        Ok(())
    }
}
