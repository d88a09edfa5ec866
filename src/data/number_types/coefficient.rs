//! # Tableau coefficients
//!
//! The Big-M method adds artificial variables to the problem which are penalized by an "infinitely
//! large" constant `M`. Rather than picking a large float and losing all precision in the cells
//! that carry it, coefficients keep the multiple of `M` separate from the constant part. Only when
//! a decision has to be made (a sign test or an ordering), the symbol is substituted by
//! `BIG_M_SUBSTITUTE`.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};
use thiserror::Error;

/// Value substituted for the symbol `M` when comparing coefficients.
pub const BIG_M_SUBSTITUTE: f64 = 1_000_000_f64;

/// Magnitude below which results of row operations are considered to be exactly zero.
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// A single cell of a simplex tableau.
///
/// The `BigM` variant is never constructed with a zero multiple of `M`; all constructors and
/// operations collapse such values into the `Number` variant. As such, the derived equality is
/// structural equality of the represented values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Coefficient {
    /// A plain number.
    Number(f64),
    /// The value `constant + m * M`.
    BigM {
        /// Multiple of the symbol `M`, never zero.
        m: f64,
        /// Constant part.
        constant: f64,
    },
}

impl Coefficient {
    /// The symbol `M` itself.
    pub const M: Self = Self::BigM { m: 1_f64, constant: 0_f64 };

    /// Create a value `constant + m * M`.
    ///
    /// # Return value
    ///
    /// A `Number` if `m` is zero, a `BigM` otherwise.
    #[must_use]
    pub fn big_m(m: f64, constant: f64) -> Self {
        if m == 0_f64 {
            Self::Number(constant)
        } else {
            Self::BigM { m, constant }
        }
    }

    /// Multiple of `M` in this value, zero for plain numbers.
    #[must_use]
    pub fn m_part(self) -> f64 {
        match self {
            Self::Number(_) => 0_f64,
            Self::BigM { m, .. } => m,
        }
    }

    /// The part of this value that doesn't depend on `M`.
    #[must_use]
    pub fn constant_part(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::BigM { constant, .. } => constant,
        }
    }

    /// Numeric value used for decision making.
    ///
    /// The symbol `M` is replaced by `BIG_M_SUBSTITUTE`; the coefficient itself is not changed.
    #[must_use]
    pub fn evaluate(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::BigM { m, constant } => constant + m * BIG_M_SUBSTITUTE,
        }
    }

    /// Whether the substituted value is strictly negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.evaluate() < 0_f64
    }

    /// Whether the substituted value is strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.evaluate() > 0_f64
    }

    /// Round both components to a number of decimals.
    ///
    /// Only used for presentation and for writing solutions; the solver never rounds.
    #[must_use]
    pub fn rounded(self, decimals: usize) -> Self {
        let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
        let round = |value: f64| {
            let rounded = (value * factor).round() / factor;
            if !rounded.is_finite() {
                value
            } else if rounded == 0_f64 {
                // No negative zero
                0_f64
            } else {
                rounded
            }
        };
        Self::big_m(round(self.m_part()), round(self.constant_part()))
    }

    /// Snap components with a negligible magnitude to zero.
    ///
    /// Applied to the results of row operations so that exact comparisons against zero remain
    /// meaningful after a few pivots.
    #[must_use]
    pub(crate) fn cleaned(self) -> Self {
        let clean = |value: f64| if value.abs() < ZERO_TOLERANCE { 0_f64 } else { value };
        match self {
            Self::Number(value) => Self::Number(clean(value)),
            Self::BigM { m, constant } => Self::big_m(clean(m), clean(constant)),
        }
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Coefficient {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl Zero for Coefficient {
    fn zero() -> Self {
        Self::Number(0_f64)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Self::Number(value) if *value == 0_f64)
    }
}

impl One for Coefficient {
    fn one() -> Self {
        Self::Number(1_f64)
    }

    fn is_one(&self) -> bool {
        matches!(self, Self::Number(value) if *value == 1_f64)
    }
}

/// Ordering by substituted value.
///
/// Values that substitute to the same number are ordered by their multiple of `M`, such that the
/// ordering never claims equality for values that are not equal.
impl PartialOrd for Coefficient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.evaluate().partial_cmp(&other.evaluate())? {
            Ordering::Equal => self.m_part().partial_cmp(&other.m_part()),
            ordering => Some(ordering),
        }
    }
}

impl Neg for Coefficient {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Number(value) => Self::Number(-value),
            Self::BigM { m, constant } => Self::BigM { m: -m, constant: -constant },
        }
    }
}

impl Add for Coefficient {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Number(left), Self::Number(right)) => Self::Number(left + right),
            _ => Self::big_m(
                self.m_part() + rhs.m_part(),
                self.constant_part() + rhs.constant_part(),
            ),
        }
    }
}

impl Sub for Coefficient {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for Coefficient {
    type Output = Self;

    /// Multiply two values.
    ///
    /// A product of two symbolic values would contain `M²`. That term is folded into the multiple
    /// of `M` by substituting one of the factors, which keeps the substituted value correct.
    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Number(left), Self::Number(right)) => Self::Number(left * right),
            (Self::Number(factor), Self::BigM { m, constant })
            | (Self::BigM { m, constant }, Self::Number(factor)) => {
                Self::big_m(m * factor, constant * factor)
            },
            (Self::BigM { m: m1, constant: c1 }, Self::BigM { m: m2, constant: c2 }) => {
                Self::big_m(m1 * c2 + m2 * c1 + m1 * m2 * BIG_M_SUBSTITUTE, c1 * c2)
            },
        }
    }
}

impl Div for Coefficient {
    type Output = Self;

    /// Divide two values.
    ///
    /// Division by a symbolic value has no exact representation; the quotient of the substituted
    /// values is returned instead.
    fn div(self, rhs: Self) -> Self::Output {
        match rhs {
            Self::Number(divisor) => match self {
                Self::Number(value) => Self::Number(value / divisor),
                Self::BigM { m, constant } => Self::big_m(m / divisor, constant / divisor),
            },
            Self::BigM { .. } => Self::Number(self.evaluate() / rhs.evaluate()),
        }
    }
}

/// Writes `M`-dependent values as e.g. `-2M + 1.5`.
///
/// A precision given to the formatter (`{:.2}`) is applied to both components.
impl Display for Coefficient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let write_number = |f: &mut Formatter<'_>, value: f64| match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, value),
            None => write!(f, "{}", value),
        };

        match *self {
            Self::Number(value) => write_number(f, value),
            Self::BigM { m, constant } => {
                if m == 1_f64 {
                    f.write_str("M")?;
                } else if m == -1_f64 {
                    f.write_str("-M")?;
                } else {
                    write_number(f, m)?;
                    f.write_str("M")?;
                }

                if constant > 0_f64 {
                    f.write_str(" + ")?;
                    write_number(f, constant)
                } else if constant < 0_f64 {
                    f.write_str(" - ")?;
                    write_number(f, -constant)
                } else {
                    Ok(())
                }
            },
        }
    }
}

/// A text could not be read as a coefficient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not read \"{0}\" as a coefficient")]
pub struct CoefficientParseError(pub String);

/// Reads values like `3`, `-M`, `2.5M - 1`, `1 + 2*M`.
impl FromStr for Coefficient {
    type Err = CoefficientParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || CoefficientParseError(text.to_string());

        let compact = text.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        if compact.is_empty() {
            return Err(error());
        }

        // Split into signed terms, keeping the sign of exponents like `1e-3` with their number
        let mut terms = Vec::new();
        let mut current = String::new();
        let mut previous = None;
        for character in compact.chars() {
            let is_exponent_sign = matches!(previous, Some('e' | 'E'));
            if (character == '+' || character == '-') && !current.is_empty() && !is_exponent_sign {
                terms.push(std::mem::take(&mut current));
            }
            current.push(character);
            previous = Some(character);
        }
        terms.push(current);

        let mut m = 0_f64;
        let mut constant = 0_f64;
        for term in terms {
            let (sign, body) = match term.strip_prefix('-') {
                Some(rest) => (-1_f64, rest),
                None => (1_f64, term.strip_prefix('+').unwrap_or(&term)),
            };

            match body.strip_suffix('M') {
                Some(multiple) => {
                    let multiple = multiple.strip_suffix('*').unwrap_or(multiple);
                    let value = if multiple.is_empty() {
                        1_f64
                    } else {
                        multiple.parse::<f64>().map_err(|_| error())?
                    };
                    m += sign * value;
                },
                None => {
                    let value = body.parse::<f64>().map_err(|_| error())?;
                    constant += sign * value;
                },
            }
        }

        Ok(Self::big_m(m, constant))
    }
}

#[cfg(test)]
mod test {
    use num_traits::{One, Zero};

    use super::{BIG_M_SUBSTITUTE, Coefficient};

    #[test]
    fn zero_multiple_collapses() {
        assert_eq!(Coefficient::big_m(0_f64, 3_f64), Coefficient::Number(3_f64));
        assert_eq!(Coefficient::M - Coefficient::M, Coefficient::zero());
        assert!((Coefficient::M + Coefficient::from(1) - Coefficient::M).is_one());
    }

    #[test]
    fn arithmetic_keeps_symbol_exact() {
        let value = Coefficient::from(-2) - Coefficient::from(2) * Coefficient::M;
        assert_eq!(value, Coefficient::big_m(-2_f64, -2_f64));

        let row_operation = value - Coefficient::from(-3) * Coefficient::big_m(1_f64, 0.5);
        assert_eq!(row_operation, Coefficient::big_m(1_f64, -0.5));

        assert_eq!(Coefficient::big_m(4_f64, 2_f64) / Coefficient::from(2), Coefficient::big_m(2_f64, 1_f64));
        assert_eq!(-Coefficient::M, Coefficient::big_m(-1_f64, 0_f64));
    }

    #[test]
    fn product_of_symbols_substitutes_once() {
        let product = Coefficient::M * Coefficient::M;
        assert_eq!(product.evaluate(), BIG_M_SUBSTITUTE * BIG_M_SUBSTITUTE);
        assert!(matches!(product, Coefficient::BigM { .. }));
    }

    #[test]
    fn ordering_substitutes() {
        assert!(Coefficient::big_m(-2_f64, -2_f64) < Coefficient::big_m(-1_f64, -2_f64));
        assert!(Coefficient::M > Coefficient::from(999_999));
        assert!(Coefficient::big_m(-1_f64, 5_f64).is_negative());
        assert!(Coefficient::from(-0.375).is_negative());

        // Equal after substitution, but not equal
        let symbolic = Coefficient::M;
        let number = Coefficient::from(BIG_M_SUBSTITUTE);
        assert_ne!(symbolic, number);
        assert!(symbolic > number);
    }

    #[test]
    fn display() {
        assert_eq!(Coefficient::from(1.5).to_string(), "1.5");
        assert_eq!(Coefficient::M.to_string(), "M");
        assert_eq!((-Coefficient::M).to_string(), "-M");
        assert_eq!(Coefficient::big_m(-2_f64, 1.5).to_string(), "-2M + 1.5");
        assert_eq!(Coefficient::big_m(0.5, -3_f64).to_string(), "0.5M - 3");
        assert_eq!(format!("{:.2}", Coefficient::big_m(2_f64, 1_f64 / 3_f64)), "2.00M + 0.33");
    }

    #[test]
    fn parse() {
        assert_eq!("3".parse(), Ok(Coefficient::from(3)));
        assert_eq!("-M".parse(), Ok(-Coefficient::M));
        assert_eq!("M".parse(), Ok(Coefficient::M));
        assert_eq!("2.5M - 1".parse(), Ok(Coefficient::big_m(2.5, -1_f64)));
        assert_eq!("1 + 2*M".parse(), Ok(Coefficient::big_m(2_f64, 1_f64)));
        assert_eq!("1e-3".parse(), Ok(Coefficient::from(0.001)));
        assert!("".parse::<Coefficient>().is_err());
        assert!("x + 1".parse::<Coefficient>().is_err());
    }

    #[test]
    fn display_parse_identity() {
        for value in [
            Coefficient::from(-0.125),
            Coefficient::big_m(-999_999.5, 0.25),
            Coefficient::big_m(1_f64, -4_f64),
        ] {
            assert_eq!(value.to_string().parse(), Ok(value));
        }
    }

    #[test]
    fn cleaning_and_rounding() {
        assert!(Coefficient::from(1e-14).cleaned().is_zero());
        assert_eq!(Coefficient::big_m(1e-13, 2_f64).cleaned(), Coefficient::from(2));
        assert_eq!(Coefficient::from(2_f64 / 3_f64).rounded(3), Coefficient::from(0.667));
        assert_eq!(Coefficient::from(-0.0001).rounded(2).to_string(), "0");
    }
}
