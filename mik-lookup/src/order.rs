//! Deterministic parameter ordering.
//!
//! `HashMap` iteration order varies between runs; predicates are always
//! emitted in sorted key order instead.

use crate::types::RawParameters;

/// Parameters as `(key, values)` pairs sorted by key, ascending.
///
/// ```
/// use mik_lookup::{ordered_params, raw_params_from_pairs};
///
/// let params = raw_params_from_pairs([("b", "1"), ("a__in", "2"), ("a", "3")]);
/// let keys: Vec<&str> = ordered_params(&params).into_iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["a", "a__in", "b"]);
/// ```
pub fn ordered_params(params: &RawParameters) -> Vec<(&str, &[String])> {
    let mut ordered: Vec<(&str, &[String])> = params
        .iter()
        .map(|(key, values)| (key.as_str(), values.as_slice()))
        .collect();
    ordered.sort_unstable_by(|a, b| a.0.cmp(b.0));
    ordered
}
