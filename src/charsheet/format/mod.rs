//! # Export Formats
//!
//! Three independent encoders, each a pure function from a [`Document`] to text:
//!
//! - [`text`]: `Label: value` per set key, in document order, labels derived with
//!   [`crate::codec::key_to_label`]. Unknown keys included, no headings.
//! - [`markdown`]: registry order, `##`/`###` headings, registry labels in bold.
//! - [`template`]: a blank fillable form, one `Label: ` line per registered field
//!   under `=== SECTION ===` markers. Ignores the document entirely.
//!
//! [`export`] wraps the text in an [`Artifact`] carrying the suggested filename
//! and MIME type.

use crate::model::Document;
use std::fmt;

pub mod markdown;
pub mod template;
pub mod text;

pub use markdown::MarkdownOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
    Template,
}

impl ExportFormat {
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::Text => "character-profile.txt",
            ExportFormat::Markdown => "character-profile.md",
            ExportFormat::Template => "character-profile-template.txt",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Text | ExportFormat::Template => "text/plain",
            ExportFormat::Markdown => "text/markdown",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Text => "text",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Template => "template",
        };
        write!(f, "{}", name)
    }
}

/// A produced export: not retained after the caller writes it somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: &'static str,
    pub mime: &'static str,
    pub content: String,
}

pub fn export(doc: &Document, format: ExportFormat, options: &MarkdownOptions) -> Artifact {
    let content = match format {
        ExportFormat::Text => text::render(doc),
        ExportFormat::Markdown => markdown::render(doc, options),
        ExportFormat::Template => template::render(),
    };
    Artifact {
        filename: format.filename(),
        mime: format.mime(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_metadata() {
        let doc = Document::new();
        let opts = MarkdownOptions::default();

        let a = export(&doc, ExportFormat::Text, &opts);
        assert_eq!(a.filename, "character-profile.txt");
        assert_eq!(a.mime, "text/plain");

        let a = export(&doc, ExportFormat::Markdown, &opts);
        assert_eq!(a.filename, "character-profile.md");
        assert_eq!(a.mime, "text/markdown");

        let a = export(&doc, ExportFormat::Template, &opts);
        assert_eq!(a.filename, "character-profile-template.txt");
        assert_eq!(a.mime, "text/plain");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ExportFormat::Text.to_string(), "text");
        assert_eq!(ExportFormat::Markdown.to_string(), "markdown");
        assert_eq!(ExportFormat::Template.to_string(), "template");
    }
}
