/// Returns `true` if `id` looks like a grammar identifier: one or more of
/// `[a-z0-9-]`.
///
/// Catalog lookups are plain case-sensitive string comparisons; this check
/// only guards configuration values and flags odd user input.
pub fn is_valid_language_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
