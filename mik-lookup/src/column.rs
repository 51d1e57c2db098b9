//! Column name checks for whitelist configuration.

/// Maximum length for SQL identifiers (`PostgreSQL` limit is 63).
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Whether `s` is a plain SQL identifier.
///
/// Starts with an ASCII letter or underscore, continues with ASCII
/// alphanumerics or underscores, and is 1..=63 chars long.
///
/// ```
/// use mik_lookup::is_valid_column_name;
///
/// assert!(is_valid_column_name("created_at"));
/// assert!(!is_valid_column_name("users.name"));
/// assert!(!is_valid_column_name("1col"));
/// ```
#[must_use]
pub fn is_valid_column_name(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_IDENTIFIER_LENGTH {
        return false;
    }

    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `s` is an identifier or a `qualifier.identifier` pair.
///
/// ```
/// use mik_lookup::is_valid_column_reference;
///
/// assert!(is_valid_column_reference("name"));
/// assert!(is_valid_column_reference("users.name"));
/// assert!(!is_valid_column_reference("db.users.name"));
/// assert!(!is_valid_column_reference("users.name; --"));
/// ```
#[must_use]
pub fn is_valid_column_reference(s: &str) -> bool {
    match s.split_once('.') {
        None => is_valid_column_name(s),
        Some((qualifier, column)) => {
            is_valid_column_name(qualifier) && is_valid_column_name(column)
        },
    }
}
