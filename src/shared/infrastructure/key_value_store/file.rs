// File backed implementation of the KeyValueStore port.
//
// Each key maps to one file in `directory`; the key is hex encoded into the
// file name so any key is a valid, collision free path. Writes land in a
// temporary sibling first and are renamed over the target.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    directory: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len() * 2 + 5);
        for byte in key.bytes() {
            let _ = write!(name, "{byte:02x}");
        }
        name.push_str(".json");
        self.directory.join(name)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueStoreError> {
        match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), KeyValueStoreError> {
        tokio::fs::create_dir_all(&self.directory).await?;
        let target = self.path_for(key);
        let staging = target.with_extension("json.tmp");
        let written = match tokio::fs::write(&staging, value).await {
            Ok(()) => tokio::fs::rename(&staging, &target).await,
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(err.into());
        }
        Ok(())
    }
}
