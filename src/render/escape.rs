//! Escaping helpers

/// Neutralize HTML structural characters.
///
/// Braces are untouched so `{{name}}` placeholders pass through.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text with each line break turned into `<br>`
pub(crate) fn multiline_html(s: &str) -> String {
    s.lines().map(escape_html).collect::<Vec<_>>().join("<br>")
}

/// Whether `url` may be used as a link target.
///
/// Rejects schemes that execute or embed content. Relative URLs and
/// unsubstituted placeholders are allowed.
pub fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    !["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}
