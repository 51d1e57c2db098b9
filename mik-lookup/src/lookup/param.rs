//! Parameter key splitting and the parsed parameter type.

use super::operator::{DEFAULT_LOOKUP, Lookup, OPERATOR_SEPARATOR, SqlOperator};
use crate::error::FilterError;

/// A query parameter split into column, lookup and values.
///
/// Always holds at least one value, and exactly one for [`Lookup::Like`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedParameter {
    column: String,
    lookup: Lookup,
    values: Vec<String>,
}

impl ParsedParameter {
    /// Create a parameter for `column`.
    ///
    /// # Errors
    ///
    /// - [`FilterError::EmptyValues`] if `values` is empty
    /// - [`FilterError::LikeRequiresSingleValue`] for `Like` with more than one value
    ///
    /// ```
    /// use mik_lookup::{Lookup, ParsedParameter};
    ///
    /// let param = ParsedParameter::new("status", Lookup::In, vec!["active".into()]).unwrap();
    /// assert_eq!(param.to_sql(), "status = ?");
    ///
    /// assert!(ParsedParameter::new("status", Lookup::In, vec![]).is_err());
    /// ```
    pub fn new(
        column: impl Into<String>,
        lookup: Lookup,
        values: Vec<String>,
    ) -> Result<Self, FilterError> {
        let column = column.into();
        let param_name = if lookup == DEFAULT_LOOKUP {
            column.clone()
        } else {
            format!("{column}{OPERATOR_SEPARATOR}{lookup}")
        };
        Self::from_parts(&param_name, column, lookup, values)
    }

    fn from_parts(
        param_name: &str,
        column: String,
        lookup: Lookup,
        values: Vec<String>,
    ) -> Result<Self, FilterError> {
        if values.is_empty() {
            return Err(FilterError::EmptyValues {
                param_name: param_name.to_string(),
            });
        }
        if lookup == Lookup::Like && values.len() > 1 {
            return Err(FilterError::LikeRequiresSingleValue {
                param_name: param_name.to_string(),
                count: values.len(),
            });
        }
        Ok(Self {
            column,
            lookup,
            values,
        })
    }

    /// Column name used in the fragment.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Lookup parsed from the key suffix.
    #[must_use]
    pub const fn lookup(&self) -> Lookup {
        self.lookup
    }

    /// Values in the order they were supplied.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// SQL operator after singular collapsing.
    #[must_use]
    pub fn sql_operator(&self) -> SqlOperator {
        if self.values.len() == 1 {
            self.lookup.singular_operator()
        } else {
            self.lookup.sql_operator()
        }
    }

    /// Replace the column name, keeping lookup and values.
    pub(crate) fn rename(&mut self, column: String) {
        self.column = column;
    }

    pub(crate) fn into_values(self) -> Vec<String> {
        self.values
    }
}

/// Split a raw parameter key into a [`ParsedParameter`].
///
/// Keys are either a bare column (`status`, implicit `in`) or
/// `column__lookup`. The lookup is validated before the values.
///
/// # Errors
///
/// - [`FilterError::WrongQueryParamName`] when the key holds more than one separator
/// - [`FilterError::WrongOperator`] when the suffix is not a known lookup
/// - the value errors of [`ParsedParameter::new`]
///
/// ```
/// use mik_lookup::{Lookup, split_param_name};
///
/// let param = split_param_name("status__not_in", &["archived".to_string()]).unwrap();
/// assert_eq!(param.column(), "status");
/// assert_eq!(param.lookup(), Lookup::NotIn);
///
/// assert!(split_param_name("a__b__c", &["x".to_string()]).is_err());
/// ```
pub fn split_param_name(param_name: &str, values: &[String]) -> Result<ParsedParameter, FilterError> {
    match param_name.split_once(OPERATOR_SEPARATOR) {
        None => ParsedParameter::from_parts(
            param_name,
            param_name.to_string(),
            DEFAULT_LOOKUP,
            values.to_vec(),
        ),
        Some((_, rest)) if rest.contains(OPERATOR_SEPARATOR) => {
            Err(FilterError::WrongQueryParamName {
                param_name: param_name.to_string(),
            })
        },
        Some((column, token)) => {
            let lookup = Lookup::from_token(token).ok_or_else(|| FilterError::WrongOperator {
                operator: token.to_string(),
                param_name: param_name.to_string(),
            })?;
            ParsedParameter::from_parts(param_name, column.to_string(), lookup, values.to_vec())
        },
    }
}
