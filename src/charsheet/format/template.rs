use crate::schema::{self, PROFILE_TITLE};

/// Prefix of the lines that separate sections in a fillable template.
pub const SECTION_MARKER: &str = "===";

/// The blank form. Subsections are flattened into their section; values are always
/// empty regardless of what the live document holds.
pub fn render() -> String {
    let mut out = format!("{}\n\n", PROFILE_TITLE);
    for section in schema::sections() {
        out.push_str(&format!(
            "{} {} {}\n\n",
            SECTION_MARKER, section.title, SECTION_MARKER
        ));
        for field in section.fields() {
            out.push_str(&format!("{}: \n", field.label));
        }
        out.push('\n');
    }
    out
}
