use unicode_general_category::{get_general_category, GeneralCategory};

/// Quoted, escaped literal for a single codepoint, e.g. `'A'`, `"'"` or `'\x7f'`.
///
/// Single quotes are used unless the character itself is one. Non-printable codepoints
/// are written as `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
pub fn quote_codepoint(codepoint: u32) -> String {
    let quote = if codepoint == u32::from('\'') { '"' } else { '\'' };

    let mut literal = String::with_capacity(12);
    literal.push(quote);
    match char::from_u32(codepoint) {
        Some(ch) if ch == quote || ch == '\\' => {
            literal.push('\\');
            literal.push(ch);
        },
        Some('\t') => literal.push_str("\\t"),
        Some('\n') => literal.push_str("\\n"),
        Some('\r') => literal.push_str("\\r"),
        Some(ch) if is_printable(ch) => literal.push(ch),
        _ => {
            let escape = match codepoint {
                0..=0xff => format!("\\x{codepoint:02x}"),
                0x100..=0xffff => format!("\\u{codepoint:04x}"),
                _ => format!("\\U{codepoint:08x}"),
            };
            literal.push_str(&escape);
        },
    }
    literal.push(quote);
    literal
}

/// Whether a codepoint can appear verbatim in an annotation.
///
/// Everything but the ASCII space is escaped in the control, format, surrogate, private use,
/// unassigned and separator categories.
fn is_printable(ch: char) -> bool {
    use GeneralCategory::*;

    ch == ' '
        || !matches!(
            get_general_category(ch),
            Control
                | Format
                | Surrogate
                | PrivateUse
                | Unassigned
                | LineSeparator
                | ParagraphSeparator
                | SpaceSeparator
        )
}
