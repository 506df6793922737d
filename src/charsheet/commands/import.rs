use crate::commands::helpers::persist_document;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::parse;
use crate::store::ProfileStore;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportKind {
    /// `Label: value` lines, as written by the fillable template export
    #[default]
    Fillable,
    /// `- **Label:** value` bullets, as written by the Markdown export
    Markdown,
}

/// Parse `text`, merge the result into `doc`, persist, and hand the merged
/// document back for the read view. Never fails on content.
pub fn run_text<S: ProfileStore>(
    store: &mut S,
    storage_key: &str,
    doc: &mut Document,
    text: &str,
    kind: ImportKind,
) -> Result<CmdResult> {
    let partial = match kind {
        ImportKind::Fillable => parse::parse_fillable(text),
        ImportKind::Markdown => parse::parse_markdown(text),
    };
    let filled = partial.set_entries().count();
    let blank = partial.len() - filled;
    debug!(?kind, filled, blank, "parsed import");

    let mut result = CmdResult::default();
    if partial.is_empty() {
        result.add_message(CmdMessage::info("Nothing to import"));
        return Ok(result.with_profile(doc.clone()));
    }

    doc.merge(partial);
    persist_document(store, storage_key, doc);

    let summary = match blank {
        0 => format!("Imported {} fields", filled),
        _ => format!("Imported {} fields ({} left blank)", filled, blank),
    };
    result.add_message(CmdMessage::success(summary));
    Ok(result.with_profile(doc.clone()))
}

/// Read `path` and import it. An unreadable file leaves the document untouched and
/// produces a warning rather than an error.
pub fn run_file<S: ProfileStore>(
    store: &mut S,
    storage_key: &str,
    doc: &mut Document,
    path: &Path,
    kind: ImportKind,
) -> Result<CmdResult> {
    match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            run_text(store, storage_key, doc, &text, kind)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read import file");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "Failed to import: {}",
                path.display()
            )));
            Ok(result)
        }
    }
}
