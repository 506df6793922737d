use crate::model::Document;
use crate::store::ProfileStore;
use tracing::{debug, error, warn};

/// Read the stored profile. Anything short of a valid blob is an empty document:
/// a missing key silently, a failed read or corrupt JSON with a log line.
pub fn load_document<S: ProfileStore>(store: &S, storage_key: &str) -> Document {
    let blob = match store.load(storage_key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!(storage_key, "no stored profile, starting empty");
            return Document::new();
        }
        Err(e) => {
            error!(storage_key, error = %e, "failed to load stored profile");
            return Document::new();
        }
    };

    match serde_json::from_str::<Document>(&blob) {
        Ok(doc) => {
            debug!(storage_key, fields = doc.len(), "loaded stored profile");
            doc
        }
        Err(e) => {
            warn!(storage_key, error = %e, "stored profile is corrupt, starting empty");
            Document::new()
        }
    }
}

/// Overwrite the stored profile with `doc`. Failures are logged and reported as
/// `false`; the in-memory document stays authoritative either way.
pub fn persist_document<S: ProfileStore>(store: &mut S, storage_key: &str, doc: &Document) -> bool {
    let blob = match serde_json::to_string(doc) {
        Ok(blob) => blob,
        Err(e) => {
            error!(storage_key, error = %e, "failed to encode profile");
            return false;
        }
    };

    match store.save(storage_key, &blob) {
        Ok(()) => {
            debug!(storage_key, bytes = blob.len(), "saved profile");
            true
        }
        Err(e) => {
            error!(storage_key, error = %e, "failed to save profile");
            false
        }
    }
}

/// Drop the stored profile entirely. Failures are logged only.
pub fn remove_document<S: ProfileStore>(store: &mut S, storage_key: &str) -> bool {
    match store.remove(storage_key) {
        Ok(()) => {
            debug!(storage_key, "removed stored profile");
            true
        }
        Err(e) => {
            error!(storage_key, error = %e, "failed to remove stored profile");
            false
        }
    }
}
