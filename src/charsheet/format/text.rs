use crate::codec::key_to_label;
use crate::model::Document;
use crate::schema::PROFILE_TITLE;

pub fn render(doc: &Document) -> String {
    let mut out = format!("{}\n\n", PROFILE_TITLE);
    for (key, value) in doc.set_entries() {
        out.push_str(&format!("{}: {}\n", key_to_label(key), value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_header_only() {
        assert_eq!(render(&Document::new()), "CYBER DYSTOPIAN CHARACTER PROFILE\n\n");
    }

    #[test]
    fn test_document_order_and_unset_skipped() {
        let doc = Document::new()
            .with("eyeColor", "Amber")
            .with("age", "")
            .with("characterName", "Vex");

        let out = render(&doc);
        let lines: Vec<_> = out.lines().skip(2).collect();
        assert_eq!(lines, vec!["Eye Color: Amber", "Character Name: Vex"]);
    }

    #[test]
    fn test_unknown_keys_are_emitted() {
        let doc = Document::new().with("favouriteColour", "Neon pink");
        assert!(render(&doc).contains("Favourite Colour: Neon pink\n"));
    }

    #[test]
    fn test_uses_derived_labels_not_registry_labels() {
        let doc = Document::new().with("aliases", "Smith");
        let out = render(&doc);
        assert!(out.contains("Aliases: Smith"));
        assert!(!out.contains("Aliases/Handle"));
    }
}
