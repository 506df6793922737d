use super::ProfileStore;
use crate::error::{CharsheetError, Result};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. with a corrupt blob.
    pub fn with_blob(mut self, key: &str, blob: &str) -> Self {
        self.blobs.insert(key.to_string(), blob.to_string());
        self
    }

    /// Make every `save`/`remove` fail, to exercise the session's error handling.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn blob(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(CharsheetError::Store("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl ProfileStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<()> {
        self.check_writable()?;
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.blobs.remove(key);
        Ok(())
    }
}
