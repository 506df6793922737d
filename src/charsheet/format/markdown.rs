use crate::model::Document;
use crate::schema::{self, Field, PROFILE_TITLE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Drop section and subsection headings that would have no bullets.
    pub skip_empty_headings: bool,
}

/// Walks the whole registry. Fields without a value are omitted; headings are
/// kept unless `skip_empty_headings` is set.
pub fn render(doc: &Document, options: &MarkdownOptions) -> String {
    let mut md = format!("# {}\n\n", PROFILE_TITLE);

    for section in schema::sections() {
        if options.skip_empty_headings && !section.fields().any(|f| doc.is_set(f.key)) {
            continue;
        }
        md.push_str(&format!("## {}\n\n", section.title));

        for group in section.groups {
            if let Some(title) = group.title {
                if options.skip_empty_headings && !group.fields.iter().any(|f| doc.is_set(f.key)) {
                    continue;
                }
                md.push_str(&format!("### {}\n\n", title));
            }
            push_bullets(&mut md, doc, group.fields);
            md.push('\n');
        }
    }

    md
}

fn push_bullets(md: &mut String, doc: &Document, fields: &[Field]) {
    for field in fields {
        let value = doc.get(field.key);
        if !value.is_empty() {
            md.push_str(&format!("- **{}:** {}\n", field.label, value));
        }
    }
}
