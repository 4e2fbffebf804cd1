//! Small text helpers shared by the formatters

/// Escapes text for Telegram's HTML parse mode.
///
/// Only `&`, `<` and `>` need escaping outside of attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}
