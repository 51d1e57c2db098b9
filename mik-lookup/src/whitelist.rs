//! Column whitelist with per-column name rewriting.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Rewrites a whitelisted column name into the SQL reference used in the fragment.
pub type ColumnRewrite = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Columns that may appear in a generated filter.
///
/// Each column maps to a rewrite function. Identity is the common case; an
/// alias lets a `SELECT t.col AS name` query filter on `name`, since aliases
/// cannot be referenced from `WHERE`.
///
/// Rewrite functions must be pure: the same input always yields the same
/// output and no side effects.
///
/// ```
/// use mik_lookup::ColumnWhitelist;
///
/// let whitelist = ColumnWhitelist::new()
///     .allow("status")
///     .alias("author", "users.name")
///     .rewrite("tag", |c| format!("LOWER({c})"));
///
/// assert_eq!(whitelist.resolve("status").as_deref(), Some("status"));
/// assert_eq!(whitelist.resolve("author").as_deref(), Some("users.name"));
/// assert_eq!(whitelist.resolve("tag").as_deref(), Some("LOWER(tag)"));
/// assert_eq!(whitelist.resolve("password"), None);
/// ```
#[derive(Clone, Default)]
pub struct ColumnWhitelist {
    columns: HashMap<String, ColumnRewrite>,
}

impl ColumnWhitelist {
    /// Create an empty whitelist. Every column is rejected until allowed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `column` under its own name.
    #[must_use]
    pub fn allow(self, column: impl Into<String>) -> Self {
        self.rewrite(column, str::to_string)
    }

    /// Allow every column in `columns` under its own name.
    #[must_use]
    pub fn allow_all(self, columns: &[&str]) -> Self {
        columns.iter().fold(self, |wl, column| wl.allow(*column))
    }

    /// Allow `column`, emitting `target` in its place.
    #[must_use]
    pub fn alias(self, column: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        self.rewrite(column, move |_| target.clone())
    }

    /// Allow `column`, emitting whatever `f` returns for it.
    ///
    /// Replaces any rewrite already registered for the column.
    #[must_use]
    pub fn rewrite<F>(mut self, column: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.columns.insert(column.into(), Arc::new(f));
        self
    }

    /// Whether `column` is whitelisted.
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Final SQL reference for `column`, or `None` if it is not whitelisted.
    #[must_use]
    pub fn resolve(&self, column: &str) -> Option<String> {
        self.columns.get(column).map(|rewrite| rewrite(column))
    }

    /// Number of whitelisted columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column is whitelisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whitelisted column names, sorted.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ColumnWhitelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnWhitelist")
            .field("columns", &self.columns())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejects_everything() {
        let whitelist = ColumnWhitelist::new();
        assert!(whitelist.is_empty());
        assert_eq!(whitelist.resolve("id"), None);
    }

    #[test]
    fn test_allow_is_identity() {
        let whitelist = ColumnWhitelist::new().allow_all(&["col1", "col2"]);
        assert_eq!(whitelist.len(), 2);
        assert_eq!(whitelist.resolve("col1").as_deref(), Some("col1"));
        assert_eq!(whitelist.resolve("col2").as_deref(), Some("col2"));
        assert!(!whitelist.contains("col3"));
    }

    #[test]
    fn test_alias_ignores_input() {
        let whitelist = ColumnWhitelist::new().alias("col1", "table_name.col1");
        assert_eq!(whitelist.resolve("col1").as_deref(), Some("table_name.col1"));
    }

    #[test]
    fn test_later_registration_wins() {
        let whitelist = ColumnWhitelist::new().allow("col").alias("col", "t.col");
        assert_eq!(whitelist.len(), 1);
        assert_eq!(whitelist.resolve("col").as_deref(), Some("t.col"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let whitelist = ColumnWhitelist::new().allow("Status");
        assert!(whitelist.contains("Status"));
        assert!(!whitelist.contains("status"));
    }

    #[test]
    fn test_debug_lists_sorted_columns() {
        let whitelist = ColumnWhitelist::new().allow_all(&["b", "a"]);
        assert_eq!(
            format!("{whitelist:?}"),
            r#"ColumnWhitelist { columns: ["a", "b"] }"#
        );
    }
}
