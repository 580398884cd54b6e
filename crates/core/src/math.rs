//! Textbook math operations behind the endpoints.

use std::fmt;

use crate::{CoreError, MAX_RANGE_FACTORIAL, MathErrorKind};

pub fn divide(numerator: f64, denominator: f64) -> Result<f64, MathErrorKind> {
    if denominator == 0.0 {
        return Err(MathErrorKind::DivisionByZero);
    }
    Ok(numerator / denominator)
}

pub fn square_root(radicand: f64) -> Result<f64, MathErrorKind> {
    if radicand < 0.0 {
        return Err(MathErrorKind::NegativeRadicand);
    }
    Ok(radicand.sqrt())
}

/// Square root that answers negative radicands with an imaginary result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SquareRoot {
    Real(f64),
    Imaginary(f64),
}

impl SquareRoot {
    pub fn of(radicand: f64) -> Self {
        if radicand < 0.0 { Self::Imaginary((-radicand).sqrt()) } else { Self::Real(radicand.sqrt()) }
    }
}

impl fmt::Display for SquareRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v}"),
            Self::Imaginary(v) => write!(f, "{v}i"),
        }
    }
}

pub fn logarithm(value: f64) -> Result<f64, MathErrorKind> {
    if value <= 0.0 {
        return Err(MathErrorKind::InvalidLogarithm);
    }
    Ok(value.ln())
}

pub fn inverse_cosine(value: f64) -> Result<f64, MathErrorKind> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(MathErrorKind::InvalidTrigonometricArgument);
    }
    Ok(value.acos())
}

/// `n!` in 64-bit signed arithmetic.
///
/// Negative `n` is a programming error for callers ([`CoreError::NegativeFactorial`]);
/// a result that does not fit is [`MathErrorKind::Overflow`].
pub fn factorial_checked(n: i32) -> Result<i64, CoreError> {
    if n < 0 {
        return Err(CoreError::NegativeFactorial);
    }
    (2..=i64::from(n)).try_fold(1_i64, |acc, k| acc.checked_mul(k).ok_or(CoreError::Math(MathErrorKind::Overflow)))
}

/// Exact `n!` for `0 <= n <= 100`, as a decimal string.
pub fn factorial_exact(n: i32) -> Result<String, MathErrorKind> {
    if !(0..=MAX_RANGE_FACTORIAL).contains(&n) {
        return Err(MathErrorKind::OutOfRangeFactorial);
    }
    let mut value = DecimalLimbs::one();
    for k in 2..=n.unsigned_abs() {
        value.mul_small(k);
    }
    Ok(value.to_string())
}

/// Unsigned integer stored as little-endian base 10^9 limbs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DecimalLimbs {
    limbs: Vec<u32>,
}

const LIMB_BASE: u64 = 1_000_000_000;

impl DecimalLimbs {
    fn one() -> Self {
        Self { limbs: vec![1] }
    }

    fn mul_small(&mut self, factor: u32) {
        let mut carry = 0_u64;
        for limb in &mut self.limbs {
            let product = u64::from(*limb) * u64::from(factor) + carry;
            *limb = (product % LIMB_BASE) as u32;
            carry = product / LIMB_BASE;
        }
        while carry > 0 {
            self.limbs.push((carry % LIMB_BASE) as u32);
            carry /= LIMB_BASE;
        }
    }
}

impl fmt::Display for DecimalLimbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut limbs = self.limbs.iter().rev();
        match limbs.next() {
            Some(most_significant) => write!(f, "{most_significant}")?,
            None => return f.write_str("0"),
        }
        for limb in limbs {
            write!(f, "{limb:09}")?;
        }
        Ok(())
    }
}
