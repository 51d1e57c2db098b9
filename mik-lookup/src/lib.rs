// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Code items in docs
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder methods on ColumnWhitelist
#![allow(clippy::format_push_string)] // String building style preference

//! # mik-lookup - Django-style Lookup Filters to SQL
//!
//! Turns query-string parameters such as `?status__in=a&status__in=b&name__like=jo`
//! into a parameterized `WHERE` fragment plus bind values. Columns must be
//! whitelisted; everything else is handed back untouched.
//!
//! ## Quick Start
//!
//! ```
//! use mik_lookup::prelude::*;
//!
//! let whitelist = ColumnWhitelist::new()
//!     .alias("col1", "table_name.col1")
//!     .allow("col2");
//!
//! let params = raw_params_from_pairs([
//!     ("col1__in", "1"),
//!     ("col1__in", "2"),
//!     ("col2__not_in", "1"),
//!     ("col3", "val"),
//! ]);
//!
//! let filter = build(&whitelist, &params).unwrap();
//!
//! assert_eq!(filter.result.sql, "table_name.col1 IN (?,?) AND col2 <> ?");
//! assert_eq!(filter.result.params, ["1", "2", "1"]);
//! assert_eq!(filter.rejected["col3"], ["val"]);
//! ```
//!
//! ## Supported Lookups
//!
//! | Key | Values | SQL |
//! |-----|--------|-----|
//! | `col` / `col__in` | 1 | `col = ?` |
//! | `col` / `col__in` | n | `col IN (?,...)` |
//! | `col__not_in` | 1 | `col <> ?` |
//! | `col__not_in` | n | `col NOT IN (?,...)` |
//! | `col__like` | 1 | `LOWER(col) LIKE CONCAT('%', ?, '%')` |
//!
//! Predicates are joined with `AND` in ascending key order, so the same
//! request always produces the same SQL string.

mod assemble;
mod column;
mod config;
mod error;
mod lookup;
mod order;
mod types;
mod validate;
mod whitelist;

pub use assemble::assemble_filter;
pub use column::{is_valid_column_name, is_valid_column_reference};
pub use config::WhitelistConfig;
pub use error::{ConfigError, FilterError};
pub use lookup::{
    DEFAULT_LOOKUP, Lookup, OPERATOR_SEPARATOR, ParsedParameter, SqlOperator, split_param_name,
};
pub use order::ordered_params;
pub use types::{Filter, FilterResult, RawParameters, RejectedParameters, raw_params_from_pairs};
pub use validate::{ValidParams, validate_params};
pub use whitelist::{ColumnRewrite, ColumnWhitelist};

use tracing::debug;

/// Build a `WHERE` fragment from lookup parameters.
///
/// Parameters are processed in ascending key order. Whitelisted columns are
/// rewritten and rendered; the rest land in [`Filter::rejected`]. When every
/// parameter is rejected the fragment is empty.
///
/// # Errors
///
/// Fails on the first malformed key, unknown lookup, or bad value count, and
/// when `params` is empty. No partial result is returned.
///
/// ```
/// use mik_lookup::{ColumnWhitelist, FilterError, build, raw_params_from_pairs};
///
/// let whitelist = ColumnWhitelist::new().allow("name");
///
/// let filter = build(&whitelist, &raw_params_from_pairs([("name__like", "jo")])).unwrap();
/// assert_eq!(filter.result.sql, "LOWER(name) LIKE CONCAT('%', ?, '%')");
///
/// let err = build(&whitelist, &raw_params_from_pairs([("name__between", "a")])).unwrap_err();
/// assert!(matches!(err, FilterError::WrongOperator { .. }));
/// ```
pub fn build(whitelist: &ColumnWhitelist, params: &RawParameters) -> Result<Filter, FilterError> {
    let ordered = ordered_params(params);
    let (valid, rejected) = validate_params(whitelist, &ordered)?;
    let predicates = valid.len();
    let result = assemble_filter(valid);

    debug!(
        predicates,
        bind_values = result.params.len(),
        rejected = rejected.len(),
        "built lookup filter"
    );

    Ok(Filter { result, rejected })
}

/// Prelude module for convenient imports.
///
/// ```
/// use mik_lookup::prelude::*;
/// let whitelist = ColumnWhitelist::new().allow("id");
/// let filter = build(&whitelist, &raw_params_from_pairs([("id", "1")])).unwrap();
/// assert_eq!(filter.result.sql, "id = ?");
/// ```
pub mod prelude {
    pub use crate::{
        ColumnWhitelist, ConfigError, Filter, FilterError, FilterResult, Lookup, RawParameters,
        RejectedParameters, WhitelistConfig, build, raw_params_from_pairs,
    };
}


// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
