//! Floating-point operations.
//!
//! IEEE arithmetic already saturates to infinity instead of trapping, so the
//! only checked forms are the `_zer` variants of division and modulo.
//!
//! `float_mod` is the native floating remainder (`fmod`): its sign follows the
//! dividend, like truncating division. It is deliberately not floor-adjusted
//! the way `int_mod` is.

use crate::{Fault, FloatWord, OpResult};

#[inline]
pub fn float_is_true<F: FloatWord>(x: F) -> bool {
    x != F::zero()
}

#[inline]
pub fn float_neg<F: FloatWord>(x: F) -> F {
    -x
}

#[inline]
pub fn float_abs<F: FloatWord>(x: F) -> F {
    x.abs()
}

#[inline]
pub fn float_floor<F: FloatWord>(x: F) -> F {
    x.floor()
}

#[inline]
pub fn float_eq<F: FloatWord>(x: F, y: F) -> bool {
    x == y
}

#[inline]
pub fn float_ne<F: FloatWord>(x: F, y: F) -> bool {
    x != y
}

#[inline]
pub fn float_lt<F: FloatWord>(x: F, y: F) -> bool {
    x < y
}

#[inline]
pub fn float_le<F: FloatWord>(x: F, y: F) -> bool {
    x <= y
}

#[inline]
pub fn float_gt<F: FloatWord>(x: F, y: F) -> bool {
    x > y
}

#[inline]
pub fn float_ge<F: FloatWord>(x: F, y: F) -> bool {
    x >= y
}

/// Three-way compare: -1, 0 or 1. Unordered operands compare as 0.
#[inline]
pub fn float_cmp<F: FloatWord>(x: F, y: F) -> i32 {
    i32::from(x > y) - i32::from(x < y)
}

#[inline]
pub fn float_add<F: FloatWord>(x: F, y: F) -> F {
    x + y
}

#[inline]
pub fn float_sub<F: FloatWord>(x: F, y: F) -> F {
    x - y
}

#[inline]
pub fn float_mul<F: FloatWord>(x: F, y: F) -> F {
    x * y
}

#[inline]
pub fn float_div<F: FloatWord>(x: F, y: F) -> F {
    x / y
}

#[inline]
pub fn float_truediv<F: FloatWord>(x: F, y: F) -> F {
    float_div(x, y)
}

/// `floor(x / y)`.
#[inline]
pub fn float_floordiv<F: FloatWord>(x: F, y: F) -> F {
    (x / y).floor()
}

/// Native floating remainder; the result has the sign of `x`.
#[inline]
pub fn float_mod<F: FloatWord>(x: F, y: F) -> F {
    x % y
}

#[inline]
pub fn float_fmod<F: FloatWord>(x: F, y: F) -> F {
    float_mod(x, y)
}

#[inline]
pub fn float_pow<F: FloatWord>(x: F, y: F) -> F {
    x.powf(y)
}

pub fn float_div_zer<F: FloatWord>(x: F, y: F) -> OpResult<F> {
    if y == F::zero() {
        return Err(Fault::division_by_zero("float division"));
    }
    Ok(float_div(x, y))
}

pub fn float_truediv_zer<F: FloatWord>(x: F, y: F) -> OpResult<F> {
    float_div_zer(x, y)
}

pub fn float_floordiv_zer<F: FloatWord>(x: F, y: F) -> OpResult<F> {
    if y == F::zero() {
        return Err(Fault::division_by_zero("float division"));
    }
    Ok(float_floordiv(x, y))
}

pub fn float_mod_zer<F: FloatWord>(x: F, y: F) -> OpResult<F> {
    if y == F::zero() {
        return Err(Fault::division_by_zero("float modulo"));
    }
    Ok(float_mod(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FaultKind;

    #[test]
    fn unary() {
        assert!(float_is_true(0.5f64));
        assert!(!float_is_true(-0.0f64));
        assert!(float_is_true(f64::NAN));
        assert_eq!(float_neg(3.0f32), -3.0);
        assert_eq!(float_abs(-2.5f64), 2.5);
        assert_eq!(float_floor(-3.2f64), -4.0);
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(float_mul(f64::MAX, 2.0), f64::INFINITY);
        assert_eq!(float_div(1.0f64, 0.0), f64::INFINITY);
        assert_eq!(float_div(-1.0f64, 0.0), f64::NEG_INFINITY);
        assert_eq!(float_truediv(7.0f64, 2.0), 3.5);
        assert_eq!(float_add(0.5f32, 0.25), 0.75);
        assert_eq!(float_sub(0.5f32, 0.25), 0.25);
    }

    #[test]
    fn mod_follows_dividend_sign() {
        assert_eq!(float_mod(-7.0f64, 2.0), -1.0);
        assert_eq!(float_mod(7.0f64, -2.0), 1.0);
        assert_eq!(float_fmod(7.5f64, 2.0), 1.5);
        assert!(float_mod(1.0f64, 0.0).is_nan());
    }

    #[test]
    fn floordiv_rounds_down() {
        assert_eq!(float_floordiv(-7.0f64, 2.0), -4.0);
        assert_eq!(float_floordiv(7.0f64, 2.0), 3.0);
    }

    #[test]
    fn pow() {
        assert_eq!(float_pow(2.0f64, 10.0), 1024.0);
        assert_eq!(float_pow(2.0f64, -1.0), 0.5);
    }

    #[test]
    fn compare() {
        assert!(float_lt(1.0f64, 2.0));
        assert!(float_ge(2.0f64, 2.0));
        assert_eq!(float_cmp(1.0f64, 2.0), -1);
        assert_eq!(float_cmp(2.0f64, 1.0), 1);
        assert_eq!(float_cmp(f64::NAN, 1.0), 0);
        assert!(float_ne(f64::NAN, f64::NAN));
        assert!(!float_eq(f64::NAN, f64::NAN));
    }

    #[test]
    fn zer_variants() {
        assert_eq!(
            float_div_zer(1.0f64, 0.0),
            Err(Fault::division_by_zero("float division"))
        );
        assert_eq!(
            float_truediv_zer(1.0f64, -0.0).unwrap_err().kind,
            FaultKind::DivisionByZero
        );
        assert_eq!(
            float_mod_zer(1.0f64, 0.0),
            Err(Fault::division_by_zero("float modulo"))
        );
        assert_eq!(float_floordiv_zer(1.0f32, 0.0).unwrap_err().kind, FaultKind::DivisionByZero);
        assert_eq!(float_div_zer(1.0f64, 4.0), Ok(0.25));
        assert_eq!(float_mod_zer(-7.0f64, 2.0), Ok(-1.0));
    }
}
