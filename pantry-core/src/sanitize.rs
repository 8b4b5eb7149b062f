//! Ingredient query sanitisation.

/// Keep ASCII letters, digits, commas and whitespace; drop everything else.
///
/// This only keeps the downstream search query well-formed. It is not a
/// security boundary.
pub fn sanitize_ingredients(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ',' || c.is_whitespace())
        .collect()
}

/// Sanitise a raw ingredient parameter, returning `None` when nothing usable
/// remains (absent, blank, or blank after stripping).
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let cleaned = sanitize_ingredients(raw);
    if cleaned.trim().is_empty() {
        return None;
    }
    Some(cleaned)
}
