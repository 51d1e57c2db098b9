//! Joining per-parameter predicates into one fragment.

use crate::types::FilterResult;
use crate::validate::ValidParams;

/// Join all predicates with `AND` and flatten their bind values in the same order.
///
/// No valid parameters gives an empty fragment and no bind values.
pub fn assemble_filter(valid: ValidParams) -> FilterResult {
    let mut predicates = Vec::with_capacity(valid.len());
    let mut params = Vec::new();

    for param in valid {
        predicates.push(param.to_sql());
        params.extend(param.into_values());
    }

    FilterResult {
        sql: predicates.join(" AND "),
        params,
    }
}
