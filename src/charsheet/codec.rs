//! # Label/Key Codec
//!
//! Two transforms between field keys (`digitalIdentity`) and human labels
//! (`Digital Identity`). They are deliberately **not** inverses of each other:
//!
//! - [`key_to_label`] is used by the plain text export for every document key,
//!   registered or not.
//! - [`label_to_key`] is used by the importers to turn a template label back
//!   into a document key.
//!
//! The template export writes *registry* labels, so re-importing a template yields
//! keys derived from those labels, which may differ from the registry keys
//! (`Aliases/Handle` becomes `aliasesHandle`, not `aliases`). The pair is
//! self-consistent and the tests below pin the exact behaviour.

/// Insert a space before each uppercase ASCII letter after the first character,
/// then uppercase the first character.
pub fn key_to_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 8);
    for (i, c) in key.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the label, then collapse every run of non-alphanumeric characters
/// into an uppercase version of the character that follows it.
///
/// A run at the very end has no following character. Only its last character
/// survives there, so `Species (if applicable)` ends in `)`.
pub fn label_to_key(label: &str) -> String {
    let chars: Vec<char> = label.to_lowercase().chars().collect();
    let mut key = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_alphanumeric() {
            key.push(chars[i]);
            i += 1;
            continue;
        }

        let mut end = i;
        while end < chars.len() && !chars[end].is_ascii_alphanumeric() {
            end += 1;
        }

        if end < chars.len() {
            key.extend(chars[end].to_uppercase());
            i = end + 1;
        } else if end - i >= 2 {
            key.extend(chars[end - 1].to_uppercase());
            i = end;
        } else {
            key.push(chars[i]);
            i = end;
        }
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    fn test_key_to_label() {
        assert_eq!(key_to_label("digitalIdentity"), "Digital Identity");
        assert_eq!(key_to_label("aiPartnerships"), "Ai Partnerships");
        assert_eq!(key_to_label("age"), "Age");
        assert_eq!(
            key_to_label("professionalUndergroundConnections"),
            "Professional Underground Connections"
        );
    }

    #[test]
    fn test_key_to_label_edge_cases() {
        assert_eq!(key_to_label(""), "");
        assert_eq!(key_to_label("x"), "X");
        // A leading capital gets no space in front of it
        assert_eq!(key_to_label("HTMLColor"), "H T M L Color");
        assert_eq!(key_to_label("level2Access"), "Level2 Access");
    }

    #[test]
    fn test_label_to_key() {
        assert_eq!(label_to_key("Aliases/Handle"), "aliasesHandle");
        assert_eq!(label_to_key("Character Name"), "characterName");
        assert_eq!(label_to_key("Techno-Futuristic Elements"), "technoFuturisticElements");
        assert_eq!(label_to_key("Public vs Private Persona"), "publicVsPrivatePersona");
        assert_eq!(label_to_key("Age"), "age");
    }

    #[test]
    fn test_label_to_key_trailing_punctuation() {
        assert_eq!(label_to_key("Species (if applicable)"), "speciesIfApplicable)");
        assert_eq!(label_to_key("Primary Device(s)"), "primaryDeviceS)");
        assert_eq!(
            label_to_key("Origin (Corporate/Black Market)"),
            "originCorporateBlackMarket)"
        );
        assert_eq!(label_to_key("Done.)"), "done)");
    }

    #[test]
    fn test_label_to_key_collapses_runs() {
        assert_eq!(label_to_key("a -- b"), "aB");
        assert_eq!(label_to_key("Success/Failure Rate"), "successFailureRate");
    }

    #[test]
    fn test_round_trip_is_lossy() {
        // Single-word keys survive; multi-word keys lose their capitals.
        assert_eq!(label_to_key(&key_to_label("age")), "age");
        assert_eq!(label_to_key(&key_to_label("eyeColor")), "eyeColor");
        assert_eq!(label_to_key(&key_to_label("level2Access")), "level2Access");

        // Registry labels do not always lead back to registry keys.
        let aliases = schema::lookup("aliases").unwrap();
        assert_eq!(label_to_key(aliases.label), "aliasesHandle");
    }

    #[test]
    fn test_some_registry_labels_map_to_their_keys() {
        let exact: Vec<_> = schema::descriptors()
            .filter(|d| label_to_key(d.label) == d.key)
            .map(|d| d.key)
            .collect();
        assert!(exact.contains(&"characterName"));
        assert!(exact.contains(&"eyeColor"));
        assert!(!exact.contains(&"aliases"));
    }
}
