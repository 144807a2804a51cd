/// HTML escaping for text that ends up inside list markup

/// Replace `& < > " '` with their entity equivalents
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// True if `text` has no raw markup characters left, i.e. it can only be
/// plain text or output of `escape_html`
///
/// Stored tasks are escaped when created, but storage can hold entries
/// this crate never wrote; those must not be rendered as markup.
pub fn is_escaped(text: &str) -> bool {
    !text.contains(['<', '>', '"', '\''])
}
