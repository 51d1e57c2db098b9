//! Error types for filter building and whitelist configuration.

use thiserror::Error;

/// Error returned by [`build`](crate::build).
///
/// The whole call aborts on the first error met while scanning parameters in
/// sorted key order. A column missing from the whitelist is not an error; it is
/// reported through [`Filter::rejected`](crate::Filter::rejected).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FilterError {
    /// The key has more than one `__` separator, e.g. `col__name__like`.
    #[error("wrong filtering param name: {param_name}")]
    WrongQueryParamName {
        /// The full parameter key.
        param_name: String,
    },
    /// The suffix after `__` is not a known lookup, e.g. `col__between`.
    #[error("wrong filtering operator name '{operator}' in parameter '{param_name}'")]
    WrongOperator {
        /// The unknown suffix token.
        operator: String,
        /// The full parameter key.
        param_name: String,
    },
    /// `__like` was given more than one value.
    #[error("like operator only supports single value (parameter '{param_name}' got {count})")]
    LikeRequiresSingleValue {
        /// The full parameter key.
        param_name: String,
        /// Number of values supplied.
        count: usize,
    },
    /// A parameter key mapped to an empty value list.
    #[error("parameter '{param_name}' has no values")]
    EmptyValues {
        /// The full parameter key.
        param_name: String,
    },
    /// `build` was called without any parameters.
    #[error("attempted to build a filter from empty filtering params")]
    AttemptedEmptyFilteringParams,
}

impl FilterError {
    /// Whether the error was caused by the shape of the incoming request.
    ///
    /// `false` means the caller broke a precondition (an empty parameter map or
    /// an empty value list), which an HTTP layer should treat as a server bug.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::WrongQueryParamName { .. }
                | Self::WrongOperator { .. }
                | Self::LikeRequiresSingleValue { .. }
        )
    }

    /// The parameter key the error refers to, if any.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::WrongQueryParamName { param_name }
            | Self::WrongOperator { param_name, .. }
            | Self::LikeRequiresSingleValue { param_name, .. }
            | Self::EmptyValues { param_name } => Some(param_name),
            Self::AttemptedEmptyFilteringParams => None,
        }
    }
}

/// Error returned when turning a [`WhitelistConfig`](crate::WhitelistConfig)
/// into a [`ColumnWhitelist`](crate::ColumnWhitelist).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid whitelist config: {0}")]
    Parse(String),
    /// A column name is not a plain SQL identifier.
    #[error("invalid whitelist column name '{column}'")]
    InvalidColumn {
        /// The rejected column name.
        column: String,
    },
    /// An alias target is not an identifier or `table.column` reference.
    #[error("invalid alias '{alias}' for column '{column}'")]
    InvalidAlias {
        /// The column being aliased.
        column: String,
        /// The rejected alias target.
        alias: String,
    },
    /// A column is listed more than once.
    #[error("column '{column}' is listed more than once")]
    DuplicateColumn {
        /// The repeated column name.
        column: String,
    },
}
