//! # Building blocks to describe linear programs.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Neg;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

/// Multiplying both sides of a constraint by `-1` flips the relation.
impl Neg for ConstraintType {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
            Self::Less => Self::Greater,
        }
    }
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Self::Equal => "=",
            Self::Greater => ">=",
            Self::Less => "<=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

impl Objective {
    /// Whether the objective function is maximized.
    #[must_use]
    pub fn is_max(self) -> bool {
        self == Self::Maximize
    }
}

impl From<bool> for Objective {
    /// Read an `is_max` flag.
    fn from(is_max: bool) -> Self {
        if is_max { Self::Maximize } else { Self::Minimize }
    }
}
