//! Range checks applied before a number is accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A predicate over a candidate `i64` value.
///
/// `MinMax` passes iff the value lies between the optional bounds; an
/// absent bound is unbounded on that side. `AnyOf` passes iff at least one
/// of its sub-checks passes — an `AnyOf` with no sub-checks rejects every
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeCheck {
    /// Lower and/or upper bound, both inclusive.
    MinMax {
        /// Inclusive lower bound, or unbounded.
        min: Option<i64>,
        /// Inclusive upper bound, or unbounded.
        max: Option<i64>,
    },
    /// Passes when at least one sub-check passes.
    AnyOf(Vec<RangeCheck>),
}

impl RangeCheck {
    /// A check with both bounds set.
    pub const fn min_max(min: i64, max: i64) -> Self {
        RangeCheck::MinMax {
            min: Some(min),
            max: Some(max),
        }
    }

    /// A check that accepts every value.
    pub const fn unbounded() -> Self {
        RangeCheck::MinMax {
            min: None,
            max: None,
        }
    }

    /// A compound check that passes when any of `checks` passes.
    pub fn any_of(checks: impl Into<Vec<RangeCheck>>) -> Self {
        RangeCheck::AnyOf(checks.into())
    }

    /// Whether `value` satisfies this check.
    pub fn contains(&self, value: i64) -> bool {
        match self {
            RangeCheck::MinMax { min, max } => {
                min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
            }
            RangeCheck::AnyOf(checks) => checks.iter().any(|check| check.contains(value)),
        }
    }
}

impl fmt::Display for RangeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeCheck::MinMax { min, max } => {
                match min {
                    Some(min) => write!(f, "[{min}, ")?,
                    None => write!(f, "[-inf, ")?,
                }
                match max {
                    Some(max) => write!(f, "{max}]"),
                    None => write!(f, "+inf]"),
                }
            }
            RangeCheck::AnyOf(checks) => {
                write!(f, "any of (")?;
                for (i, check) in checks.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{check}")?;
                }
                write!(f, ")")
            }
        }
    }
}
