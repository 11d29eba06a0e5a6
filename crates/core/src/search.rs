//! Helpers for the case-insensitive name search.
//!
//! Searches use `ILIKE` with the default backslash escape character, so the
//! user's term has its wildcard characters escaped before it is wrapped in
//! `%...%`.

/// Escape `%`, `_` and `\` so they match themselves in a `LIKE` pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Build a substring pattern for `ILIKE`. An empty term matches every name.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
