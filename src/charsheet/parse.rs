//! # Import Parsers
//!
//! Best-effort decoders that turn exported text back into a partial [`Document`].
//! Neither parser can fail: lines or items they do not understand are skipped and
//! a completely foreign input simply yields an empty document.
//!
//! Keys are always derived from labels with [`label_to_key`], so they follow the
//! label convention rather than the registry keys.

use crate::codec::label_to_key;
use crate::format::template::SECTION_MARKER;
use crate::model::Document;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Parse the fillable template format: `Label: value` per line, `=== ... ===`
/// section markers ignored. The value is everything after the first colon,
/// trimmed, and is recorded even when empty.
pub fn parse_fillable(text: &str) -> Document {
    let mut doc = Document::new();

    for line in strip_bom(text).split('\n') {
        if line.starts_with(SECTION_MARKER) {
            continue;
        }
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        doc.set(label_to_key(label), value.trim());
    }

    doc
}

/// Text saved by some editors starts with a UTF-8 byte order mark.
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[derive(Default)]
struct ListItem {
    in_label: bool,
    label: Option<String>,
    label_buf: String,
    value: String,
    seen_text: bool,
}

/// Parse a Markdown export: every list item that opens with bold text ending in a
/// colon (`- **Label:** value`) becomes one entry. Headings and other content are
/// ignored.
pub fn parse_markdown(text: &str) -> Document {
    let mut doc = Document::new();
    let mut item: Option<ListItem> = None;

    for event in Parser::new(strip_bom(text)) {
        match event {
            Event::Start(Tag::Item) => item = Some(ListItem::default()),
            Event::Start(Tag::Strong) => {
                if let Some(it) = item.as_mut() {
                    if !it.seen_text && it.label.is_none() {
                        it.in_label = true;
                    }
                }
            }
            Event::End(TagEnd::Strong) => {
                if let Some(it) = item.as_mut() {
                    if it.in_label {
                        it.in_label = false;
                        it.label = Some(std::mem::take(&mut it.label_buf));
                    }
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some(it) = item.as_mut() {
                    if it.in_label {
                        it.label_buf.push_str(&t);
                    } else {
                        it.seen_text = true;
                        it.value.push_str(&t);
                    }
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(it) = item.as_mut() {
                    it.value.push('\n');
                }
            }
            Event::End(TagEnd::Item) => {
                if let Some(it) = item.take() {
                    record_item(&mut doc, it);
                }
            }
            _ => {}
        }
    }

    doc
}

fn record_item(doc: &mut Document, item: ListItem) {
    let Some(label) = item.label else {
        return;
    };
    let Some(label) = label.trim().strip_suffix(':') else {
        return;
    };
    let label = label.trim();
    if label.is_empty() {
        return;
    }
    doc.set(label_to_key(label), item.value.trim());
}
