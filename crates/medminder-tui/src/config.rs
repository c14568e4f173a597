use std::path::PathBuf;

use clap::Parser;
use medminder_store::StoreConfig;

#[derive(Debug, Parser)]
#[command(name = "medminder", about = "Medicine reminder list")]
pub struct Config {
    /// Directory holding the reminder file [env: MEDMINDER_DATA_DIR]
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Reminder file name inside the data directory [env: MEDMINDER_FILE]
    #[arg(long = "file")]
    pub file_name: Option<String>,

    /// Log file. Defaults to medminder.log in the data directory.
    #[arg(long, env = "MEDMINDER_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Store settings from the environment, overridden by any flags given.
    pub fn store_config(&self) -> StoreConfig {
        self.apply_to(StoreConfig::from_env())
    }

    fn apply_to(&self, mut base: StoreConfig) -> StoreConfig {
        if let Some(ref dir) = self.data_dir {
            base.data_dir = Some(dir.clone());
        }
        if let Some(ref name) = self.file_name {
            base.file_name = name.clone();
        }
        base
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.store_config().resolved_data_dir().join("medminder.log"))
    }
}
