//! Lookup suffix tokens and the SQL operators they map to.

use std::fmt;

/// Separator between the column name and the lookup suffix in a parameter key.
///
/// `status__not_in=archived` splits into column `status` and lookup `not_in`.
pub const OPERATOR_SEPARATOR: &str = "__";

/// Lookup applied to a parameter key that carries no suffix.
pub const DEFAULT_LOOKUP: Lookup = Lookup::In;

/// Lookup suffix accepted in a query parameter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Lookup {
    /// `column__in=a&column__in=b`
    In,
    /// `column__not_in=a`
    NotIn,
    /// `column__like=foo` (case-insensitive substring match)
    Like,
}

/// SQL operator token emitted into the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SqlOperator {
    /// `IN (...)`
    In,
    /// `NOT IN (...)`
    NotIn,
    /// `=`
    Equals,
    /// `<>`
    NotEquals,
    /// `LIKE`
    Like,
}

impl Lookup {
    /// All lookups, in the order they are documented.
    pub const ALL: [Self; 3] = [Self::In, Self::NotIn, Self::Like];

    /// Resolve a suffix token. Matching is case-sensitive.
    ///
    /// ```
    /// use mik_lookup::Lookup;
    ///
    /// assert_eq!(Lookup::from_token("not_in"), Some(Lookup::NotIn));
    /// assert_eq!(Lookup::from_token("NOT_IN"), None);
    /// assert_eq!(Lookup::from_token("between"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "in" => Some(Self::In),
            "not_in" => Some(Self::NotIn),
            "like" => Some(Self::Like),
            _ => None,
        }
    }

    /// The suffix token as it appears in a parameter key.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Like => "like",
        }
    }

    /// SQL operator used when the lookup carries a list of values.
    #[must_use]
    pub const fn sql_operator(self) -> SqlOperator {
        match self {
            Self::In => SqlOperator::In,
            Self::NotIn => SqlOperator::NotIn,
            Self::Like => SqlOperator::Like,
        }
    }

    /// SQL operator used when the lookup carries exactly one value.
    ///
    /// `IN` collapses to `=` and `NOT IN` to `<>`.
    #[must_use]
    pub const fn singular_operator(self) -> SqlOperator {
        match self {
            Self::In => SqlOperator::Equals,
            Self::NotIn => SqlOperator::NotEquals,
            Self::Like => SqlOperator::Like,
        }
    }
}

impl SqlOperator {
    /// The operator as written in SQL.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Equals => "=",
            Self::NotEquals => "<>",
            Self::Like => "LIKE",
        }
    }

    /// Whether the operator takes a parenthesised placeholder list.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for SqlOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
