use crate::commands::helpers::remove_document;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::store::ProfileStore;

/// Empty the document and drop the stored key. Without `confirmed` nothing changes.
pub fn run<S: ProfileStore>(
    store: &mut S,
    storage_key: &str,
    doc: &mut Document,
    confirmed: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !confirmed {
        result.add_message(CmdMessage::warning(
            "This clears every field and cannot be undone. Re-run with --yes to confirm.",
        ));
        return Ok(result);
    }

    doc.clear();
    remove_document(store, storage_key);
    result.add_message(CmdMessage::success("Profile cleared"));
    Ok(result)
}
