//! Whitelist check and column rewriting over ordered parameters.

use crate::error::FilterError;
use crate::lookup::{ParsedParameter, split_param_name};
use crate::types::RejectedParameters;
use crate::whitelist::ColumnWhitelist;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Whitelisted parameters in build order, keyed by their final column name.
///
/// A parameter whose final column is already present replaces the earlier
/// entry in place, so each column appears at most once in the fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidParams {
    params: Vec<ParsedParameter>,
    index: HashMap<String, usize>,
}

impl ValidParams {
    fn insert(&mut self, param: ParsedParameter) {
        if let Some(&slot) = self.index.get(param.column()) {
            debug!(column = param.column(), "later parameter replaces earlier filter on column");
            if let Some(existing) = self.params.get_mut(slot) {
                *existing = param;
            }
            return;
        }
        self.index.insert(param.column().to_string(), self.params.len());
        self.params.push(param);
    }

    /// Number of distinct columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether nothing survived the whitelist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameters in build order.
    pub fn iter(&self) -> impl Iterator<Item = &ParsedParameter> {
        self.params.iter()
    }
}

impl<'a> IntoIterator for &'a ValidParams {
    type Item = &'a ParsedParameter;
    type IntoIter = std::slice::Iter<'a, ParsedParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl IntoIterator for ValidParams {
    type Item = ParsedParameter;
    type IntoIter = std::vec::IntoIter<ParsedParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

/// Parse each ordered parameter and split it by whitelist membership.
///
/// Whitelisted parameters get their column rewritten; the others are
/// copied verbatim (original key and values) into the rejected map. A
/// parameter is kept or rejected as a whole.
///
/// # Errors
///
/// - [`FilterError::AttemptedEmptyFilteringParams`] when `ordered` is empty
/// - the first parse error in `ordered`, aborting the scan
pub fn validate_params(
    whitelist: &ColumnWhitelist,
    ordered: &[(&str, &[String])],
) -> Result<(ValidParams, RejectedParameters), FilterError> {
    if ordered.is_empty() {
        warn!("filter build attempted without any parameters");
        return Err(FilterError::AttemptedEmptyFilteringParams);
    }

    let mut valid = ValidParams::default();
    let mut rejected = RejectedParameters::new();

    for &(key, values) in ordered {
        let mut param = split_param_name(key, values)?;

        match whitelist.resolve(param.column()) {
            Some(column) => {
                param.rename(column);
                valid.insert(param);
            },
            None => {
                debug!(param = key, column = param.column(), "column not whitelisted");
                rejected.insert(key.to_string(), values.to_vec());
            },
        }
    }

    Ok((valid, rejected))
}
