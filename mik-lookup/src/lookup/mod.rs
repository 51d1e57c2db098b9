//! Lookup parsing and per-parameter SQL generation.

mod operator;
mod param;
mod sql;

pub use operator::{DEFAULT_LOOKUP, Lookup, OPERATOR_SEPARATOR, SqlOperator};
pub use param::{ParsedParameter, split_param_name};
