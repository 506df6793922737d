use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;

pub fn run(doc: &Document) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if doc.set_entries().next().is_none() {
        result.add_message(CmdMessage::info(
            "The profile is empty. Use `charsheet set <field> <value>` or `charsheet import <file>`.",
        ));
    }
    Ok(result.with_profile(doc.clone()))
}
