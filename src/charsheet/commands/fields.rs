use crate::commands::CmdResult;
use crate::error::Result;
use crate::schema;

/// List the schema, optionally only the sections whose title contains `section`
/// (case-insensitive).
pub fn run(section: Option<&str>) -> Result<CmdResult> {
    let needle = section.map(str::to_lowercase);
    let fields = schema::descriptors()
        .filter(|d| match &needle {
            Some(n) => d.section.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .collect();
    Ok(CmdResult::default().with_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_everything_in_order() {
        let res = run(None).unwrap();
        assert_eq!(res.fields.len(), schema::field_count());
        assert_eq!(res.fields[0].key, "characterName");
        assert_eq!(res.fields.last().unwrap().key, "futurePossibilities");
    }

    #[test]
    fn test_section_filter() {
        let res = run(Some("quotes")).unwrap();
        let keys: Vec<_> = res.fields.iter().map(|d| d.key).collect();
        assert_eq!(
            keys,
            vec![
                "notableQuotes",
                "commonPhrases",
                "philosophicalStatements",
                "codeWords",
                "personalMantras"
            ]
        );
    }
}
