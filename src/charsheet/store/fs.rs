use super::ProfileStore;
use crate::error::{CharsheetError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(CharsheetError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CharsheetError::Io)?;
        }
        Ok(())
    }
}

impl ProfileStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CharsheetError::Io(e)),
        }
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        self.ensure_dir()?;

        // Atomic replace: write beside the target, then rename over it.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, blob).map_err(CharsheetError::Io)?;
        fs::rename(&tmp, &path).map_err(CharsheetError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CharsheetError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert_eq!(store.load("profile").unwrap(), None);
    }

    #[test]
    fn test_save_creates_dir_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone());

        store.save("profile", "{\"age\":\"30\"}").unwrap();
        store.save("profile", "{\"age\":\"31\"}").unwrap();

        assert_eq!(
            store.load("profile").unwrap().as_deref(),
            Some("{\"age\":\"31\"}")
        );
        assert!(root.join("profile.json").exists());
        assert!(!root.join("profile.json.tmp").exists());
    }

    #[test]
    fn test_remove_deletes_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.save("profile", "{}").unwrap();
        store.remove("profile").unwrap();

        assert_eq!(store.load("profile").unwrap(), None);
        // Second remove is a no-op
        store.remove("profile").unwrap();
    }

    #[test]
    fn test_keys_are_isolated() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.save("a", "1").unwrap();
        store.save("b", "2").unwrap();
        assert_eq!(store.load("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.load("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.load("../escape"),
            Err(CharsheetError::Store(_))
        ));
        assert!(store.blob_path("").is_err());
    }
}
