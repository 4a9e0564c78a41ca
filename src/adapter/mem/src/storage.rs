/* src/adapter/mem/src/storage.rs */

use std::fs;
use std::io;
use std::path::PathBuf;

use tienda_core::errors::StoreError;
use tienda_core::storage::CartStorage;

/// Durable storage backed by one file per key under a directory. The
/// non-browser stand-in for local storage: a cart persisted here survives
/// a "page reload" (a new storefront over the same directory).
#[derive(Debug, Clone)]
pub struct FileStorage {
  dir: PathBuf,
}

impl FileStorage {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  fn key_path(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }
}

impl CartStorage for FileStorage {
  fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(self.key_path(key)) {
      Ok(raw) => Ok(Some(raw)),
      Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(StoreError::read(err.to_string())),
    }
  }

  fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
    fs::create_dir_all(&self.dir).map_err(|err| StoreError::write(err.to_string()))?;
    fs::write(self.key_path(key), value).map_err(|err| StoreError::write(err.to_string()))
  }
}
