//! Width traits — one implementation per machine width.
//!
//! The host's type system decides the concrete width of every operand; the
//! operation sets are written once against these traits and instantiated per
//! width at the call site (`int::int_add_ovf::<i64>`), so there is no runtime
//! dispatch in the kernel.

use core::fmt::Debug;
use num_traits::{
    AsPrimitive, Float, PrimInt, Signed, Unsigned, WrappingAdd, WrappingMul, WrappingNeg,
    WrappingShl, WrappingShr, WrappingSub,
};

/// A fixed-width signed machine integer.
pub trait SignedWord:
    PrimInt
    + Signed
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + WrappingShl
    + WrappingShr
    + AsPrimitive<u32>
    + AsPrimitive<f64>
    + Debug
    + 'static
{
    /// Unsigned integer of the same width.
    type Unsigned: UnsignedWord;
    /// Signed integer of twice the width, used for exact products.
    type Wide: PrimInt + 'static;

    const BITS: u32;

    fn widen(self) -> Self::Wide;

    /// Narrow a double-width value, `None` if it does not fit.
    fn narrow(wide: Self::Wide) -> Option<Self>;

    /// Bit-pattern reinterpretation as the unsigned type.
    fn reinterpret(self) -> Self::Unsigned;

    /// Native truncating division. `MIN / -1` wraps to `MIN`.
    ///
    /// The divisor must be nonzero.
    fn wrapping_div_trunc(self, rhs: Self) -> Self;
}

/// A fixed-width unsigned machine integer.
pub trait UnsignedWord:
    PrimInt
    + Unsigned
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + WrappingShl
    + WrappingShr
    + AsPrimitive<u32>
    + AsPrimitive<f64>
    + Debug
    + 'static
{
    /// Signed integer of the same width.
    type Signed: SignedWord<Unsigned = Self>;

    const BITS: u32;

    /// Bit-pattern reinterpretation as the signed type.
    fn reinterpret(self) -> Self::Signed;
}

/// An IEEE binary floating-point type.
pub trait FloatWord: Float + AsPrimitive<f64> + Debug + 'static {}

macro_rules! impl_words {
    ($($s:ty, $u:ty, $wide:ty);* $(;)?) => {$(
        impl SignedWord for $s {
            type Unsigned = $u;
            type Wide = $wide;

            const BITS: u32 = <$s>::BITS;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }

            #[inline(always)]
            fn narrow(wide: $wide) -> Option<$s> {
                <$s>::try_from(wide).ok()
            }

            #[inline(always)]
            fn reinterpret(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn wrapping_div_trunc(self, rhs: $s) -> $s {
                self.wrapping_div(rhs)
            }
        }

        impl UnsignedWord for $u {
            type Signed = $s;

            const BITS: u32 = <$u>::BITS;

            #[inline(always)]
            fn reinterpret(self) -> $s {
                self as $s
            }
        }
    )*};
}

impl_words! {
    i8, u8, i16;
    i16, u16, i32;
    i32, u32, i64;
    i64, u64, i128;
    isize, usize, i128;
}

impl FloatWord for f32 {}
impl FloatWord for f64 {}
