use crate::{session::Session, storage::FileStorage};
use std::path::PathBuf;

/// File name of the store inside the data directory.
pub const STORE_FILE_NAME: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub store_path: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    /// Session context over the file-backed store.
    #[must_use]
    pub fn session(&self) -> Session<FileStorage> {
        Session::new(FileStorage::new(&self.store_path))
    }
}

/// Platform data directory for the store, e.g. `~/.local/share/leafdoc/storage.json`.
#[must_use]
pub fn default_store_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "leafdoc", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_dir().join(STORE_FILE_NAME))
}
