//! SQL predicate generation for a single parameter.

use super::operator::SqlOperator;
use super::param::ParsedParameter;

/// Positional placeholder token.
pub(crate) const PLACEHOLDER: &str = "?";

impl ParsedParameter {
    /// Render the predicate for this parameter.
    ///
    /// The fragment holds exactly one `?` per value:
    ///
    /// | Lookup | Values | SQL |
    /// |--------|--------|-----|
    /// | `in` | 1 | `col = ?` |
    /// | `not_in` | 1 | `col <> ?` |
    /// | `like` | 1 | `LOWER(col) LIKE CONCAT('%', ?, '%')` |
    /// | `in` | n | `col IN (?,?,...)` |
    /// | `not_in` | n | `col NOT IN (?,?,...)` |
    #[must_use]
    pub fn to_sql(&self) -> String {
        let column = self.column();
        match self.sql_operator() {
            op @ (SqlOperator::Equals | SqlOperator::NotEquals) => {
                format!("{column} {op} {PLACEHOLDER}")
            },
            SqlOperator::Like => {
                format!("LOWER({column}) LIKE CONCAT('%', {PLACEHOLDER}, '%')")
            },
            op @ (SqlOperator::In | SqlOperator::NotIn) => {
                format!("{column} {op} ({})", placeholder_list(self.values().len()))
            },
        }
    }
}

/// `count` placeholders separated by commas, without a trailing comma.
fn placeholder_list(count: usize) -> String {
    let mut list = String::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            list.push(',');
        }
        list.push_str(PLACEHOLDER);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::operator::Lookup;

    fn param(column: &str, lookup: Lookup, values: &[&str]) -> ParsedParameter {
        ParsedParameter::new(
            column,
            lookup,
            values.iter().map(|v| (*v).to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_in_single_value_is_equals() {
        assert_eq!(param("col", Lookup::In, &["1"]).to_sql(), "col = ?");
    }

    #[test]
    fn test_not_in_single_value_is_not_equals() {
        assert_eq!(param("col", Lookup::NotIn, &["1"]).to_sql(), "col <> ?");
    }

    #[test]
    fn test_in_many_values() {
        assert_eq!(
            param("col1", Lookup::In, &["1", "2", "3"]).to_sql(),
            "col1 IN (?,?,?)"
        );
    }

    #[test]
    fn test_not_in_many_values() {
        assert_eq!(
            param("col", Lookup::NotIn, &["1", "2"]).to_sql(),
            "col NOT IN (?,?)"
        );
    }

    #[test]
    fn test_like() {
        assert_eq!(
            param("col1", Lookup::Like, &["foo"]).to_sql(),
            "LOWER(col1) LIKE CONCAT('%', ?, '%')"
        );
    }

    #[test]
    fn test_qualified_column() {
        assert_eq!(
            param("table_name.col1", Lookup::In, &["1", "2"]).to_sql(),
            "table_name.col1 IN (?,?)"
        );
    }

    #[test]
    fn test_values_never_inlined() {
        let sql = param("col", Lookup::In, &["1'; DROP TABLE users; --", "2"]).to_sql();
        assert!(!sql.contains("DROP"));
        assert_eq!(sql, "col IN (?,?)");
    }

    #[test]
    fn test_placeholder_list() {
        assert_eq!(placeholder_list(1), "?");
        assert_eq!(placeholder_list(2), "?,?");
        assert_eq!(placeholder_list(5), "?,?,?,?,?");
    }

    #[test]
    fn test_placeholder_count_matches_values() {
        for n in 1..=20 {
            let values: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            let p = ParsedParameter::new("c", Lookup::NotIn, values).unwrap();
            assert_eq!(p.to_sql().matches('?').count(), n);
        }
    }
}
