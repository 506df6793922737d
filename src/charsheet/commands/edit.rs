use crate::commands::helpers::persist_document;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::schema;
use crate::store::ProfileStore;

/// Set one field and persist the whole document.
///
/// Any key is accepted. Keys outside the schema get a warning but are stored, and
/// a failed save leaves the edit in place.
pub fn run<S: ProfileStore>(
    store: &mut S,
    storage_key: &str,
    doc: &mut Document,
    key: &str,
    value: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !schema::is_registered(key) {
        result.add_message(CmdMessage::warning(format!(
            "{} is not a profile field; storing it anyway",
            key
        )));
    }

    let cleared = value.is_empty();
    doc.set(key, value);
    persist_document(store, storage_key, doc);

    let label = schema::lookup(key).map(|d| d.label).unwrap_or(key);
    if cleared {
        result.add_message(CmdMessage::success(format!("Cleared {}", label)));
    } else {
        result.add_message(CmdMessage::success(format!("Updated {}", label)));
    }
    Ok(result)
}

pub fn get(doc: &Document, key: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_value(doc.get(key)))
}
