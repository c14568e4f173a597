mod local;

pub use local::FileStore;

use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_FILE_NAME: &str = "medicines.txt";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(PathBuf),

    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only store of reminder lines.
pub trait ReminderStore: Send + Sync {
    /// Append `text` followed by a newline.
    fn append_line(&self, text: &str) -> Result<(), StoreError>;

    /// Every line in file order. Returns `StoreError::NotFound` if the store
    /// has never been written.
    fn read_all_lines(&self) -> Result<Vec<String>, StoreError>;
}

// -- Configuration --

/// Where the reminder file lives.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the file. When `None`, use [`default_data_dir`].
    pub data_dir: Option<PathBuf>,
    /// File name inside `data_dir`.
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl StoreConfig {
    /// Build from `MEDMINDER_DATA_DIR` and `MEDMINDER_FILE`. Unset or empty
    /// variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var_os("MEDMINDER_DATA_DIR")
                .filter(|d| !d.is_empty())
                .map(PathBuf::from),
            file_name: std::env::var("MEDMINDER_FILE")
                .ok()
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
        }
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn file_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.file_name)
    }
}

/// `$XDG_DATA_HOME/medminder`, falling back to `~/.local/share/medminder`.
pub fn default_data_dir() -> PathBuf {
    let base = if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local/share")
    } else {
        PathBuf::from(".")
    };
    base.join("medminder")
}

// -- Factory --

pub fn create_store(config: &StoreConfig) -> Arc<dyn ReminderStore> {
    Arc::new(FileStore::new(config.file_path()))
}
