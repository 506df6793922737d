use charsheet::api::{CmdMessage, MessageLevel};
use charsheet::codec::key_to_label;
use charsheet::config::{CharsheetConfig, CONFIG_KEYS};
use charsheet::model::Document;
use charsheet::schema::{self, FieldDescriptor};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const UNTITLED: &str = "Character Profile";
const OTHER_SECTION: &str = "OTHER";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// A titled run of `label: value` rows in the read view.
#[derive(Debug, PartialEq, Eq)]
struct Block {
    section: &'static str,
    subsection: Option<&'static str>,
    rows: Vec<(String, String)>,
}

fn profile_title(doc: &Document) -> &str {
    match doc.get("characterName") {
        "" => UNTITLED,
        name => name,
    }
}

/// Set fields grouped as in the schema, followed by any keys the schema lacks.
fn profile_blocks(doc: &Document) -> Vec<Block> {
    let mut blocks = Vec::new();

    for section in schema::sections() {
        for group in section.groups {
            let rows: Vec<_> = group
                .fields
                .iter()
                .filter(|f| doc.is_set(f.key))
                .map(|f| (f.label.to_string(), doc.get(f.key).to_string()))
                .collect();
            if !rows.is_empty() {
                blocks.push(Block {
                    section: section.title,
                    subsection: group.title,
                    rows,
                });
            }
        }
    }

    let extra: Vec<_> = doc
        .set_entries()
        .filter(|(k, _)| !schema::is_registered(k))
        .map(|(k, v)| (key_to_label(k), v.to_string()))
        .collect();
    if !extra.is_empty() {
        blocks.push(Block {
            section: OTHER_SECTION,
            subsection: None,
            rows: extra,
        });
    }

    blocks
}

/// `label:` padded to `width` columns, continuation lines of `value` aligned under
/// its first line.
fn format_row(label: &str, value: &str, width: usize) -> String {
    let head = format!("{}:", label);
    let pad = width.saturating_sub(head.width());
    let indent = " ".repeat(width + 1);

    let mut lines = value.lines();
    let mut out = format!("{}{} {}", head, " ".repeat(pad), lines.next().unwrap_or(""));
    for line in lines {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(line);
    }
    out
}

pub(super) fn print_profile(doc: &Document) {
    println!("{}", profile_title(doc).bold());

    let blocks = profile_blocks(doc);
    let width = blocks
        .iter()
        .flat_map(|b| b.rows.iter())
        .map(|(label, _)| label.width() + 1)
        .max()
        .unwrap_or(0);

    let mut last_section = "";
    for block in &blocks {
        if block.section != last_section {
            println!();
            println!("{}", block.section.magenta().bold());
            last_section = block.section;
        }
        if let Some(sub) = block.subsection {
            println!("  {}", sub.cyan());
        }
        for (label, value) in &block.rows {
            let row = format_row(label, value, width);
            for line in row.lines() {
                println!("    {}", line);
            }
        }
    }
}

pub(super) fn print_fields(fields: &[FieldDescriptor]) {
    let key_width = fields.iter().map(|d| d.key.width()).max().unwrap_or(0);

    let mut last_heading = (None, None);
    for d in fields {
        let heading = (Some(d.section), d.subsection);
        if heading != last_heading {
            println!();
            match d.subsection {
                Some(sub) => println!("{} {} {}", d.section.bold(), "/".dimmed(), sub.cyan()),
                None => println!("{}", d.section.bold()),
            }
            last_heading = heading;
        }
        let pad = key_width.saturating_sub(d.key.width());
        println!(
            "  {}{}  {} {}",
            d.key.yellow(),
            " ".repeat(pad),
            d.label,
            format!("({})", d.kind).dimmed()
        );
    }
}

pub(super) fn print_config(config: &CharsheetConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_falls_back() {
        assert_eq!(profile_title(&Document::new()), "Character Profile");
        assert_eq!(
            profile_title(&Document::new().with("characterName", "Vex")),
            "Vex"
        );
    }

    #[test]
    fn test_blocks_follow_schema_then_extras() {
        let doc = Document::new()
            .with("favouriteColour", "Neon")
            .with("height", "190cm")
            .with("age", "29")
            .with("weight", "");

        let blocks = profile_blocks(&doc);
        assert_eq!(
            blocks,
            vec![
                Block {
                    section: "CONCEPT & IDENTITY",
                    subsection: None,
                    rows: vec![("Age".into(), "29".into())],
                },
                Block {
                    section: "PHYSICAL ATTRIBUTES",
                    subsection: Some("Natural Characteristics"),
                    rows: vec![("Height".into(), "190cm".into())],
                },
                Block {
                    section: "OTHER",
                    subsection: None,
                    rows: vec![("Favourite Colour".into(), "Neon".into())],
                },
            ]
        );
    }

    #[test]
    fn test_empty_profile_has_no_blocks() {
        assert!(profile_blocks(&Document::new().with("age", "")).is_empty());
    }

    #[test]
    fn test_format_row_pads_and_indents() {
        assert_eq!(format_row("Age", "29", 8), "Age:     29");
        assert_eq!(
            format_row("Fears", "Heights\nWater", 6),
            "Fears: Heights\n       Water"
        );
    }

    #[test]
    fn test_format_row_wide_chars() {
        // Two columns per CJK glyph
        assert_eq!(format_row("名前", "x", 6), "名前:  x");
    }
}
