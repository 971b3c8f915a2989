//! HTML-entity decoding for provider text.
//!
//! The provider entity-encodes question text, category names, and every
//! answer string. Decoding has to be complete: a stray `&quot;` in an
//! answer breaks the value-equality search that locates the correct
//! answer after shuffling. The table below is the fixed set the provider
//! is known to emit -- ASCII escapes first, then the accented letters
//! that show up in game titles.

/// Entity table applied as sequential replacements, in this order.
/// Keep `&quot;` and `&#039;` ahead of `&amp;` so a double-encoded
/// `&amp;quot;` resolves the ampersand last.
const ENTITY_TABLE: &[(&str, &str)] = &[
    ("&quot;", "\""),
    ("&#039;", "'"),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&eacute;", "é"),
    ("&ouml;", "ö"),
    ("&uuml;", "ü"),
    ("&auml;", "ä"),
    ("&iacute;", "í"),
    ("&oacute;", "ó"),
    ("&uacute;", "ú"),
    ("&agrave;", "à"),
    ("&egrave;", "è"),
    ("&igrave;", "ì"),
    ("&ograve;", "ò"),
    ("&ugrave;", "ù"),
    ("&atilde;", "ã"),
    ("&otilde;", "õ"),
    ("&ntilde;", "ñ"),
];

/// Decode every known entity in `input`.
pub fn decode_entities(input: &str) -> String {
    ENTITY_TABLE
        .iter()
        .fold(input.to_string(), |text, (entity, replacement)| {
            text.replace(entity, replacement)
        })
}
