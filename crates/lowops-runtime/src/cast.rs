//! Value conversions.
//!
//! All casts reinterpret, truncate, or zero/sign-extend exactly as the
//! native `as` cast does for the widths involved, and none of them fault,
//! with one exception: [`cast_float_to_int_ovf`] rejects NaN and
//! out-of-range input instead of saturating.
//!
//! Characters are bytes (`u8`) and unicode characters are raw code points
//! (`u32`), since a translated program can hold code points that are not
//! valid Rust `char`s.

use crate::{Fault, FloatWord, OpResult, SignedWord, UnsignedWord};
use num_traits::AsPrimitive;

#[inline]
pub fn cast_bool_to_int<T: SignedWord>(x: bool) -> T {
    if x {
        T::one()
    } else {
        T::zero()
    }
}

#[inline]
pub fn cast_bool_to_uint<U: UnsignedWord>(x: bool) -> U {
    if x {
        U::one()
    } else {
        U::zero()
    }
}

#[inline]
pub fn cast_bool_to_float<F: FloatWord>(x: bool) -> F {
    if x {
        F::one()
    } else {
        F::zero()
    }
}

/// Same-width reinterpretation.
#[inline]
pub fn cast_uint_to_int<U: UnsignedWord>(x: U) -> U::Signed {
    x.reinterpret()
}

/// Same-width reinterpretation.
#[inline]
pub fn cast_int_to_uint<T: SignedWord>(x: T) -> T::Unsigned {
    x.reinterpret()
}

/// Byte zero-extended to the integer width.
#[inline]
pub fn cast_char_to_int<T: SignedWord>(x: u8) -> T
where
    u8: AsPrimitive<T>,
{
    x.as_()
}

/// Integer truncated to its low byte.
#[inline]
pub fn cast_int_to_char<T: SignedWord + AsPrimitive<u8>>(x: T) -> u8 {
    x.as_()
}

/// Code point zero-extended (or truncated, for narrower targets).
#[inline]
pub fn cast_unichar_to_int<T: SignedWord>(x: u32) -> T
where
    u32: AsPrimitive<T>,
{
    x.as_()
}

/// Integer truncated to 32 bits.
#[inline]
pub fn cast_int_to_unichar<T: SignedWord>(x: T) -> u32 {
    x.as_()
}

/// Address of a pointer as a signed machine word.
#[inline]
pub fn cast_ptr_to_int<P: ?Sized>(x: *const P) -> isize {
    x as *const () as isize
}

#[inline]
pub fn cast_int_to_float<T: SignedWord>(x: T) -> f64 {
    x.as_()
}

#[inline]
pub fn cast_uint_to_float<U: UnsignedWord>(x: U) -> f64 {
    x.as_()
}

/// Widen (or keep) a signed word as a 64-bit signed integer.
#[inline]
pub fn cast_int_to_longlong<T: SignedWord + AsPrimitive<i64>>(x: T) -> i64 {
    x.as_()
}

/// Keep the low bits of a 64-bit integer that fit `T`.
#[inline]
pub fn truncate_longlong_to_int<T: SignedWord>(x: i64) -> T
where
    i64: AsPrimitive<T>,
{
    x.as_()
}

/// Truncate toward zero. NaN and negative values map to 0, values above the
/// range saturate.
#[inline]
pub fn cast_float_to_uint<F, U>(x: F) -> U
where
    F: FloatWord + AsPrimitive<U>,
    U: UnsignedWord,
{
    x.as_()
}

/// Truncate toward zero. NaN maps to 0 and out-of-range values saturate.
#[inline]
pub fn cast_float_to_int<F, T>(x: F) -> T
where
    F: FloatWord + AsPrimitive<T>,
    T: SignedWord,
{
    x.as_()
}

/// Truncate toward zero, faulting on NaN or a value outside `T`'s range.
///
/// The truncated value is compared against `-2^(BITS-1)` (inclusive) and
/// `2^(BITS-1)` (exclusive). Both bounds are exactly representable in any
/// binary float, so the check is exact even where `T::MAX` is not.
pub fn cast_float_to_int_ovf<F, T>(x: F) -> OpResult<T>
where
    F: FloatWord + AsPrimitive<T>,
    T: SignedWord + AsPrimitive<F>,
{
    let min: F = T::min_value().as_();
    let truncated = x.trunc();
    if x.is_nan() || truncated < min || truncated >= -min {
        return Err(Fault::overflow("float to integer conversion"));
    }
    Ok(x.as_())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FaultKind;

    #[test]
    fn bool_casts() {
        assert_eq!(cast_bool_to_int::<i64>(true), 1);
        assert_eq!(cast_bool_to_uint::<u8>(false), 0);
        assert_eq!(cast_bool_to_float::<f64>(true), 1.0);
    }

    #[test]
    fn sign_reinterpretation_round_trips() {
        for x in 0..=u8::MAX {
            assert_eq!(cast_int_to_uint(cast_uint_to_int(x)), x);
        }
        for x in i8::MIN..=i8::MAX {
            assert_eq!(cast_uint_to_int(cast_int_to_uint(x)), x);
        }
        assert_eq!(cast_uint_to_int(u64::MAX), -1i64);
        assert_eq!(cast_int_to_uint(i64::MIN), 1u64 << 63);
    }

    #[test]
    fn char_casts() {
        // Bytes above 0x7F zero-extend.
        assert_eq!(cast_char_to_int::<i32>(0xFF), 255);
        assert_eq!(cast_char_to_int::<i8>(0xFF), -1);
        assert_eq!(cast_int_to_char(0x1_41i32), b'A');
        assert_eq!(cast_int_to_char(-1i64), 0xFF);
    }

    #[test]
    fn unichar_casts() {
        assert_eq!(cast_unichar_to_int::<i64>(0x10FFFF), 0x10FFFF);
        assert_eq!(cast_unichar_to_int::<i64>(u32::MAX), 0xFFFF_FFFF);
        assert_eq!(cast_int_to_unichar(0x1_0000_0041i64), 0x41);
        assert_eq!(cast_int_to_unichar(-1i32), u32::MAX);
    }

    #[test]
    fn ptr_cast() {
        let value = 7u32;
        let ptr: *const u32 = &value;
        assert_eq!(cast_ptr_to_int(ptr), ptr as isize);
        assert_eq!(cast_ptr_to_int(core::ptr::null::<u8>()), 0);
    }

    #[test]
    fn float_to_int_truncates() {
        assert_eq!(cast_float_to_int::<f64, i32>(1.9), 1);
        assert_eq!(cast_float_to_int::<f64, i32>(-1.9), -1);
        assert_eq!(cast_float_to_int::<f64, i32>(f64::NAN), 0);
        assert_eq!(cast_float_to_int::<f64, i32>(1e20), i32::MAX);
    }

    #[test]
    fn float_to_int_ovf() {
        assert_eq!(cast_float_to_int_ovf::<f64, i32>(2147483647.0), Ok(i32::MAX));
        assert_eq!(cast_float_to_int_ovf::<f64, i32>(-2147483648.0), Ok(i32::MIN));
        assert_eq!(
            cast_float_to_int_ovf::<f64, i32>(2147483648.0),
            Err(Fault::overflow("float to integer conversion"))
        );
        assert_eq!(
            cast_float_to_int_ovf::<f64, i32>(-2147483649.0).unwrap_err().kind,
            FaultKind::Overflow
        );
        assert!(cast_float_to_int_ovf::<f64, i64>(f64::NAN).is_err());
        assert!(cast_float_to_int_ovf::<f32, i64>(f32::INFINITY).is_err());
        assert!(cast_float_to_int_ovf::<f64, i64>(9223372036854775808.0).is_err());
        assert_eq!(
            cast_float_to_int_ovf::<f64, i64>(9223372036854774784.0),
            Ok(9223372036854774784)
        );
        // -0.5 truncates to 0, still in range
        assert_eq!(cast_float_to_int_ovf::<f32, i8>(-0.5), Ok(0));
    }

    #[test]
    fn float_to_int_ovf_accepts_fractions_truncating_to_min() {
        assert_eq!(cast_float_to_int_ovf::<f64, i32>(-2147483648.5), Ok(i32::MIN));
        assert_eq!(cast_float_to_int_ovf::<f64, i32>(-2147483648.999), Ok(i32::MIN));
        assert!(cast_float_to_int_ovf::<f64, i32>(-2147483649.0).is_err());
        assert_eq!(cast_float_to_int_ovf::<f64, i8>(-128.75), Ok(-128));
        assert_eq!(cast_float_to_int_ovf::<f64, i8>(127.75), Ok(127));
        assert!(cast_float_to_int_ovf::<f64, i8>(128.0).is_err());
    }

    #[test]
    fn longlong_casts() {
        assert_eq!(cast_int_to_longlong(-5i32), -5i64);
        assert_eq!(cast_int_to_longlong(isize::MIN), isize::MIN as i64);
        assert_eq!(truncate_longlong_to_int::<i32>(0x1_0000_0007), 7);
        assert_eq!(truncate_longlong_to_int::<i32>(-1), -1);
        assert_eq!(truncate_longlong_to_int::<i64>(i64::MIN), i64::MIN);
    }

    #[test]
    fn float_to_uint() {
        assert_eq!(cast_float_to_uint::<f64, u32>(3.9), 3);
        assert_eq!(cast_float_to_uint::<f64, u32>(-1.0), 0);
        assert_eq!(cast_float_to_uint::<f64, u32>(f64::NAN), 0);
        assert_eq!(cast_float_to_uint::<f64, u8>(300.0), u8::MAX);
        assert_eq!(cast_float_to_uint::<f64, u64>(1e19), 10_000_000_000_000_000_000);
    }

    #[test]
    fn int_to_float() {
        assert_eq!(cast_int_to_float(-3i32), -3.0);
        assert_eq!(cast_uint_to_float(u32::MAX), 4294967295.0);
        assert_eq!(cast_int_to_float(i64::MIN), -9223372036854775808.0);
    }
}
