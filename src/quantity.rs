//! # Quantity Module
//!
//! Exact rational quantities for ingredient amounts. Recipe amounts are often
//! non-decimal ("1/3 TL", "1 1/2 kg"), so values are held as reduced fractions
//! and never pass through floating point. Numerator and denominator are
//! big integers, so sums of large amounts never overflow.
//!
//! ## Text forms
//!
//! - `""` (no quantity)
//! - `"3"`, `"-1"` (integers)
//! - `"1.5"` (decimals, read exactly as 3/2)
//! - `"3/4"` (proper or improper fractions)
//! - `"1 1/2"` (mixed fractions)
//!
//! ## Two readings of the empty string
//!
//! [`Quantity::parse_fraction_text`] reads `""` as zero, while
//! [`Quantity::implied_quantity_of`] reads it as one: an ingredient listed
//! without an amount means "one of it" when lists are merged. Keep the two
//! call sites apart.
//!
//! ```rust
//! use foodplanner::quantity::Quantity;
//!
//! let third = Quantity::parse_fraction_text("1/3")?;
//! let total = third.add(&third).add(&third);
//! assert_eq!(total.to_mixed_string(), "1");
//! # Ok::<(), foodplanner::quantity_errors::ParseError>(())
//! ```

use crate::quantity_errors::ParseError;
use fraction::{BigFraction, BigUint, Zero};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

lazy_static! {
    /// "3", "250"
    static ref INTEGER: Regex = Regex::new(r"^\d+$").expect("integer pattern should be valid");
    /// "1.5", ".5", "2."
    static ref DECIMAL: Regex =
        Regex::new(r"^(?P<int>\d*)\.(?P<frac>\d*)$").expect("decimal pattern should be valid");
    /// "3/4", "1 1/2"
    static ref FRACTION: Regex = Regex::new(r"^(?:(?P<whole>\d+)\s+)?(?P<num>\d+)\s*/\s*(?P<den>\d+)$")
        .expect("fraction pattern should be valid");
}

/// An exact, reduced rational amount of arbitrary size
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Quantity(BigFraction);

impl Quantity {
    /// The absent amount, rendered as `""`
    pub fn zero() -> Self {
        Self(BigFraction::new(0u64, 1u64))
    }

    /// One unit of an ingredient
    pub fn one() -> Self {
        Self(BigFraction::new(1u64, 1u64))
    }

    /// Read quantity text, treating the empty string as zero
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the text is not an integer, decimal,
    /// fraction or mixed fraction. Malformed text is never coerced to zero.
    pub fn parse_fraction_text(text: &str) -> Result<Self, ParseError> {
        let normalized = text.split_whitespace().collect::<Vec<&str>>().join(" ");
        if normalized.is_empty() {
            return Ok(Self::zero());
        }

        let (negative, unsigned) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, normalized.as_str()),
        };

        let magnitude = Self::parse_unsigned(unsigned, text)?;
        trace!("Parsed quantity text '{}' -> {}{}", text, if negative { "-" } else { "" }, magnitude);

        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Read an ingredient's quantity for merging, treating the empty string as one
    ///
    /// An ingredient written without an amount ("Salz", "Ei") counts as one
    /// unit of itself when it is summed with others.
    ///
    /// # Errors
    ///
    /// Same as [`Quantity::parse_fraction_text`] for non-empty text.
    pub fn implied_quantity_of(text: &str) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            return Ok(Self::one());
        }
        Self::parse_fraction_text(text)
    }

    fn parse_unsigned(unsigned: &str, original: &str) -> Result<Self, ParseError> {
        if INTEGER.is_match(unsigned) {
            let value = parse_digits(unsigned, original)?;
            return Ok(Self(BigFraction::new(value, 1u64)));
        }

        if let Some(captures) = FRACTION.captures(unsigned) {
            let numerator = parse_digits(&captures["num"], original)?;
            let denominator = parse_digits(&captures["den"], original)?;
            if denominator == 0 {
                return Err(ParseError::DivisionByZero(original.to_string()));
            }

            let mut value = BigFraction::new(numerator, denominator);
            if let Some(whole) = captures.name("whole") {
                value = value + BigFraction::new(parse_digits(whole.as_str(), original)?, 1u64);
            }
            return Ok(Self(value));
        }

        if unsigned.contains('/') {
            return Err(ParseError::InvalidFraction(original.to_string()));
        }

        if let Some(captures) = DECIMAL.captures(unsigned) {
            let int_part = &captures["int"];
            let frac_part = &captures["frac"];
            if int_part.is_empty() && frac_part.is_empty() {
                return Err(ParseError::InvalidNumber(original.to_string()));
            }

            let digits = format!("{int_part}{frac_part}");
            let numerator = parse_digits(&digits, original)?;
            let exponent = u32::try_from(frac_part.len())
                .map_err(|_| ParseError::Overflow(original.to_string()))?;
            let denominator = BigUint::from(10u32).pow(exponent);
            return Ok(Self(BigFraction::new(numerator, denominator)));
        }

        Err(ParseError::InvalidNumber(original.to_string()))
    }

    /// Exact sum, reduced to lowest terms
    pub fn add(&self, other: &Quantity) -> Quantity {
        Quantity(self.0.clone() + other.0.clone())
    }

    /// The same amount with the opposite sign
    pub fn negate(&self) -> Quantity {
        -self.clone()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.0.is_sign_negative()
    }

    /// Render as `""`, `"2"`, `"3/4"` or `"1 1/2"`, with a leading `-` when negative
    pub fn to_mixed_string(&self) -> String {
        let (numerator, denominator) = match (self.0.numer(), self.0.denom()) {
            (Some(numerator), Some(denominator)) => (numerator, denominator),
            _ => return String::new(),
        };
        if numerator.is_zero() {
            return String::new();
        }

        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        let whole = numerator / denominator;
        let remainder = numerator % denominator;

        if remainder.is_zero() {
            format!("{sign}{whole}")
        } else if whole.is_zero() {
            format!("{sign}{remainder}/{denominator}")
        } else {
            format!("{sign}{whole} {remainder}/{denominator}")
        }
    }
}

fn parse_digits(digits: &str, original: &str) -> Result<u64, ParseError> {
    digits
        .parse::<u64>()
        .map_err(|_| ParseError::Overflow(original.to_string()))
}

impl Default for Quantity {
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity(-self.0)
    }
}

impl FromStr for Quantity {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_fraction_text(text)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_mixed_string())
    }
}
