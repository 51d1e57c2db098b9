//! Input and output types of the filter pipeline.

use serde::Serialize;
use std::collections::HashMap;

/// Query parameters as supplied by the HTTP layer: key to values, in request order.
pub type RawParameters = HashMap<String, Vec<String>>;

/// Parameters whose column is not whitelisted, keyed by their original key.
pub type RejectedParameters = HashMap<String, Vec<String>>;

/// SQL fragment for a `WHERE` clause and its bind values.
///
/// `params` holds one entry per `?` in `sql`, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use = "FilterResult must be passed on to the query"]
#[non_exhaustive]
pub struct FilterResult {
    /// Predicates joined with `AND`, e.g. `col1 IN (?,?) AND col2 = ?`. Empty when nothing matched.
    pub sql: String,
    /// Bind values for the placeholders.
    pub params: Vec<String>,
}

impl FilterResult {
    /// Whether there is no predicate at all.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Number of `?` placeholders in the fragment.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// `WHERE <sql>`, or an empty string when there is nothing to filter on.
    ///
    /// ```
    /// use mik_lookup::{ColumnWhitelist, build};
    /// use std::collections::HashMap;
    ///
    /// let whitelist = ColumnWhitelist::new().allow("id");
    /// let params = HashMap::from([("id".to_string(), vec!["7".to_string()])]);
    /// let filter = build(&whitelist, &params).unwrap();
    ///
    /// let sql = format!("SELECT * FROM t {}", filter.result.where_clause());
    /// assert_eq!(sql.trim_end(), "SELECT * FROM t WHERE id = ?");
    /// ```
    pub fn where_clause(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.sql)
        }
    }

    /// Split into `(sql, params)`.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql, self.params)
    }
}

/// Outcome of a successful [`build`](crate::build).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Filter {
    /// The generated fragment and bind values.
    pub result: FilterResult,
    /// Parameters dropped because their column is not whitelisted.
    pub rejected: RejectedParameters,
}

impl Filter {
    /// Whether any parameter was dropped by the whitelist.
    pub fn has_rejected(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Group `(key, value)` pairs into [`RawParameters`], keeping value order per key.
///
/// ```
/// use mik_lookup::raw_params_from_pairs;
///
/// let params = raw_params_from_pairs([("id__in", "1"), ("id__in", "2"), ("name", "x")]);
/// assert_eq!(params["id__in"], ["1", "2"]);
/// assert_eq!(params["name"], ["x"]);
/// ```
pub fn raw_params_from_pairs<I, K, V>(pairs: I) -> RawParameters
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut params = RawParameters::new();
    for (key, value) in pairs {
        params.entry(key.into()).or_default().push(value.into());
    }
    params
}
