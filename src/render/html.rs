//! Markup helpers.

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A `<div class="stat-card">` with an icon, a big value and a caption.
pub(crate) fn stat_card(icon: &str, value: &str, caption: &str) -> String {
    format!(
        "<div class=\"stat-card\"><div class=\"stat-icon\">{}</div><div><h3>{}</h3><p>{}</p></div></div>",
        icon,
        escape(value),
        escape(caption)
    )
}
