//! Input sanitization
//!
//! Neutralizes untrusted form input before validation and storage. Applied
//! to every rendered field (email, name, address) and never to passwords,
//! which are hashed rather than displayed.

/// Escape markup-significant characters to their entity equivalents.
///
/// The escape set matches the templating-safety helpers used by web
/// frameworks: `&`, `<`, `>`, and both quote characters. Single pass, one
/// mapping per input character.
fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Sanitize a display field: trim surrounding whitespace, then escape markup.
///
/// Runs unconditionally before any validation so that stored and rendered
/// values can never execute as markup.
pub fn sanitize_field(input: &str) -> String {
    escape_markup(input.trim())
}

/// Normalize an email address: sanitize, then lowercase.
///
/// Registration and login both go through this, so lookups are
/// case-insensitive on the email. Escaped markup in an address makes it
/// fail the syntax check downstream rather than reaching the store.
pub fn normalize_email(input: &str) -> String {
    sanitize_field(input).to_ascii_lowercase()
}
