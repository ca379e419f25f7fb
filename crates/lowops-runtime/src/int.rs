//! Signed integer operations.
//!
//! ## Overflow detection
//!
//! Addition and subtraction wrap natively and detect overflow from the signs
//! of the operands and the wrapped result: a sum overflows iff both operands
//! share a sign the result does not have. Subtraction checks `x` and `!y`
//! the same way, since `x - y` is `x + !y + 1`.
//!
//! Multiplication computes the exact product in the double-width type and
//! checks that it narrows back. [`int_mul_ovf_approx`] keeps the portable
//! floating-point check for hosts without a double-width multiply; its 1/32
//! tolerance is a fixed historical constant, changing it changes which
//! products are classified as overflowing.
//!
//! ## Floor division
//!
//! Division rounds toward negative infinity and the remainder takes the sign
//! of the divisor. Both come from one adjustment of the native truncating
//! quotient, see [`divmod_adj`].
//!
//! No function here panics, including the unchecked forms on inputs their
//! checked siblings would reject.

use crate::{Fault, OpResult, SignedWord};
use num_traits::Zero;

const NEG_SHIFT: &str = "negative shift count";

// ── Unary ───────────────────────────────────────────────────────────────────

#[inline]
pub fn int_is_true<T: SignedWord>(x: T) -> bool {
    x != T::zero()
}

#[inline]
pub fn int_pos<T: SignedWord>(x: T) -> T {
    x
}

#[inline]
pub fn int_invert<T: SignedWord>(x: T) -> T {
    !x
}

/// Negation; `MIN` wraps to itself.
#[inline]
pub fn int_neg<T: SignedWord>(x: T) -> T {
    x.wrapping_neg()
}

pub fn int_neg_ovf<T: SignedWord>(x: T) -> OpResult<T> {
    let r = int_neg(x);
    if x >= T::zero() || x != r {
        Ok(r)
    } else {
        Err(Fault::overflow("integer negate"))
    }
}

/// Absolute value; `MIN` wraps to itself.
#[inline]
pub fn int_abs<T: SignedWord>(x: T) -> T {
    if x >= T::zero() {
        x
    } else {
        x.wrapping_neg()
    }
}

pub fn int_abs_ovf<T: SignedWord>(x: T) -> OpResult<T> {
    let r = int_abs(x);
    if x >= T::zero() || x != x.wrapping_neg() {
        Ok(r)
    } else {
        Err(Fault::overflow("integer absolute"))
    }
}

// ── Comparison and bitwise ──────────────────────────────────────────────────

#[inline]
pub fn int_eq<T: SignedWord>(x: T, y: T) -> bool {
    x == y
}

#[inline]
pub fn int_ne<T: SignedWord>(x: T, y: T) -> bool {
    x != y
}

#[inline]
pub fn int_lt<T: SignedWord>(x: T, y: T) -> bool {
    x < y
}

#[inline]
pub fn int_le<T: SignedWord>(x: T, y: T) -> bool {
    x <= y
}

#[inline]
pub fn int_gt<T: SignedWord>(x: T, y: T) -> bool {
    x > y
}

#[inline]
pub fn int_ge<T: SignedWord>(x: T, y: T) -> bool {
    x >= y
}

/// Three-way compare: -1, 0 or 1.
#[inline]
pub fn int_cmp<T: SignedWord>(x: T, y: T) -> i32 {
    i32::from(x > y) - i32::from(x < y)
}

#[inline]
pub fn int_and<T: SignedWord>(x: T, y: T) -> T {
    x & y
}

#[inline]
pub fn int_or<T: SignedWord>(x: T, y: T) -> T {
    x | y
}

#[inline]
pub fn int_xor<T: SignedWord>(x: T, y: T) -> T {
    x ^ y
}

#[inline]
pub fn bool_not(x: bool) -> bool {
    !x
}

// ── Addition, subtraction, multiplication ───────────────────────────────────

#[inline]
pub fn int_add<T: SignedWord>(x: T, y: T) -> T {
    x.wrapping_add(&y)
}

pub fn int_add_ovf<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    let r = int_add(x, y);
    if (r ^ x) >= T::zero() || (r ^ y) >= T::zero() {
        Ok(r)
    } else {
        Err(Fault::overflow("integer addition"))
    }
}

#[inline]
pub fn int_sub<T: SignedWord>(x: T, y: T) -> T {
    x.wrapping_sub(&y)
}

pub fn int_sub_ovf<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    let r = int_sub(x, y);
    if (r ^ x) >= T::zero() || (r ^ !y) >= T::zero() {
        Ok(r)
    } else {
        Err(Fault::overflow("integer subtraction"))
    }
}

#[inline]
pub fn int_mul<T: SignedWord>(x: T, y: T) -> T {
    x.wrapping_mul(&y)
}

/// Algorithm used to detect multiplication overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MulOverflowCheck {
    /// Exact product in the double-width type.
    #[default]
    Widening,
    /// Floating-point approximation with a 1/32 relative tolerance.
    FloatApprox,
}

/// Overflow-checked multiplication via the double-width product.
pub fn int_mul_ovf<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    T::narrow(x.widen() * y.widen()).ok_or(Fault::overflow("integer multiplication"))
}

/// Overflow-checked multiplication without a double-width type.
///
/// The wrapped machine product is accepted if, converted to `f64`, it equals
/// the `f64` product of the operands, or differs from it by at most 1/32 of
/// its magnitude (5 good bits). Otherwise the product overflowed.
pub fn int_mul_ovf_approx<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    let longprod = int_mul(x, y);
    let xf: f64 = x.as_();
    let yf: f64 = y.as_();
    let doubleprod = xf * yf;
    let doubled_longprod: f64 = longprod.as_();

    if doubled_longprod == doubleprod || close_enough(doubled_longprod, doubleprod) {
        Ok(longprod)
    } else {
        Err(Fault::overflow("integer multiplication"))
    }
}

/// `|diff| / |prod| <= 1/32`, written without a division.
pub(crate) fn close_enough(doubled_longprod: f64, doubleprod: f64) -> bool {
    let diff = doubled_longprod - doubleprod;
    let absdiff = if diff >= 0.0 { diff } else { -diff };
    let absprod = if doubleprod >= 0.0 {
        doubleprod
    } else {
        -doubleprod
    };
    32.0 * absdiff <= absprod
}

/// Overflow-checked multiplication with a host-selected algorithm.
pub fn int_mul_ovf_with<T: SignedWord>(check: MulOverflowCheck, x: T, y: T) -> OpResult<T> {
    match check {
        MulOverflowCheck::Widening => int_mul_ovf(x, y),
        MulOverflowCheck::FloatApprox => int_mul_ovf_approx(x, y),
    }
}

// ── Shifts ──────────────────────────────────────────────────────────────────
//
// Unchecked shifts mask the count to the width. The `_val` forms reject a
// negative count and treat a count of `BITS` or more as shifting every bit
// out.

/// Low 32 bits of the count. Only the low `log2(BITS)` of them survive the
/// mask in `wrapping_shl`/`wrapping_shr`.
#[inline]
fn shift_count<T: SignedWord>(y: T) -> u32 {
    y.as_()
}

/// Negative, or at least `BITS`, compared in `T`'s own width.
#[inline]
fn oversized<T: SignedWord>(y: T) -> bool {
    y.to_u32().map_or(true, |count| count >= T::BITS)
}

#[inline]
pub fn int_lshift<T: SignedWord>(x: T, y: T) -> T {
    x.wrapping_shl(shift_count(y))
}

/// Arithmetic right shift.
#[inline]
pub fn int_rshift<T: SignedWord>(x: T, y: T) -> T {
    x.wrapping_shr(shift_count(y))
}

/// Left shift that faults if bits are lost or the sign changes.
///
/// A negative count is read as an oversized one and overflows unless `x` is
/// zero; use [`int_lshift_ovf_val`] to reject it instead.
pub fn int_lshift_ovf<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    const LOST: &str = "x<<y losing bits or changing sign";
    if y < T::zero() || oversized(y) {
        return if x == T::zero() {
            Ok(x)
        } else {
            Err(Fault::overflow(LOST))
        };
    }
    let r = int_lshift(x, y);
    if int_rshift(r, y) != x {
        return Err(Fault::overflow(LOST));
    }
    Ok(r)
}

pub fn int_lshift_val<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if y < T::zero() {
        return Err(Fault::invalid_value(NEG_SHIFT));
    }
    if oversized(y) {
        return Ok(T::zero());
    }
    Ok(int_lshift(x, y))
}

pub fn int_rshift_val<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if y < T::zero() {
        return Err(Fault::invalid_value(NEG_SHIFT));
    }
    if oversized(y) {
        return Ok(if x < T::zero() {
            -T::one()
        } else {
            T::zero()
        });
    }
    Ok(int_rshift(x, y))
}

pub fn int_lshift_ovf_val<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if y < T::zero() {
        return Err(Fault::invalid_value(NEG_SHIFT));
    }
    int_lshift_ovf(x, y)
}

// ── Division and modulo ─────────────────────────────────────────────────────

/// Floor quotient and remainder from the native truncating division.
///
/// If the remainder is nonzero and its sign differs from the divisor's, the
/// quotient is one too high: decrement it and add the divisor to the
/// remainder. `MIN / -1` wraps to `(MIN, 0)`. A zero divisor yields `(0, 0)`;
/// the `_zer` forms reject it before getting here.
pub fn divmod_adj<T: SignedWord>(x: T, y: T) -> (T, T) {
    if y == T::zero() {
        return (T::zero(), T::zero());
    }
    let mut xdivy = x.wrapping_div_trunc(y);
    let mut xmody = x.wrapping_sub(&xdivy.wrapping_mul(&y));
    if xmody != T::zero() && (y ^ xmody) < T::zero() {
        xmody = xmody.wrapping_add(&y);
        xdivy = xdivy.wrapping_sub(&T::one());
    }
    (xdivy, xmody)
}

/// `x` is `MIN` and `y` is -1, tested on the bit pattern of `x`.
#[inline]
fn min_over_minus_one<T: SignedWord>(x: T, y: T) -> bool {
    y == -T::one() && x < T::zero() && (x.reinterpret() << 1usize) == <T::Unsigned as Zero>::zero()
}

#[inline]
pub fn int_floordiv<T: SignedWord>(x: T, y: T) -> T {
    divmod_adj(x, y).0
}

#[inline]
pub fn int_mod<T: SignedWord>(x: T, y: T) -> T {
    divmod_adj(x, y).1
}

pub fn int_floordiv_ovf<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if min_over_minus_one(x, y) {
        return Err(Fault::overflow("integer division"));
    }
    Ok(int_floordiv(x, y))
}

pub fn int_floordiv_zer<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if y == T::zero() {
        return Err(Fault::division_by_zero("integer division"));
    }
    Ok(int_floordiv(x, y))
}

pub fn int_floordiv_ovf_zer<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if y == T::zero() {
        return Err(Fault::division_by_zero("integer division"));
    }
    int_floordiv_ovf(x, y)
}

pub fn int_mod_ovf<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if min_over_minus_one(x, y) {
        return Err(Fault::overflow("integer modulo"));
    }
    Ok(int_mod(x, y))
}

pub fn int_mod_zer<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if y == T::zero() {
        return Err(Fault::division_by_zero("integer modulo"));
    }
    Ok(int_mod(x, y))
}

pub fn int_mod_ovf_zer<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if y == T::zero() {
        return Err(Fault::division_by_zero("integer modulo"));
    }
    int_mod_ovf(x, y)
}

/// Native truncating division (C semantics). Zero divisor yields 0.
#[inline]
pub fn int_div<T: SignedWord>(x: T, y: T) -> T {
    if y == T::zero() {
        return T::zero();
    }
    x.wrapping_div_trunc(y)
}

pub fn int_div_zer<T: SignedWord>(x: T, y: T) -> OpResult<T> {
    if y == T::zero() {
        return Err(Fault::division_by_zero("integer division"));
    }
    Ok(int_div(x, y))
}

/// True division of two integers, producing a float.
#[inline]
pub fn int_truediv<T: SignedWord>(x: T, y: T) -> f64 {
    let xf: f64 = x.as_();
    let yf: f64 = y.as_();
    xf / yf
}


// ── Verification ────────────────────────────────────────────────────────────
//
// Bounded model checking of the checked operations. Run with:
// cargo kani -p lowops-runtime

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: add_ovf agrees with the native checked addition for every pair.
    #[kani::proof]
    fn add_ovf_matches_checked_add() {
        let x: i32 = kani::any();
        let y: i32 = kani::any();
        kani::assert(
            int_add_ovf(x, y).ok() == x.checked_add(y),
            "add_ovf must fault exactly on overflow",
        );
    }

    /// Proof: sub_ovf agrees with the native checked subtraction.
    #[kani::proof]
    fn sub_ovf_matches_checked_sub() {
        let x: i32 = kani::any();
        let y: i32 = kani::any();
        kani::assert(
            int_sub_ovf(x, y).ok() == x.checked_sub(y),
            "sub_ovf must fault exactly on overflow",
        );
    }

    /// Proof: mul_ovf agrees with the native checked multiplication.
    #[kani::proof]
    fn mul_ovf_matches_checked_mul() {
        let x: i16 = kani::any();
        let y: i16 = kani::any();
        kani::assert(
            int_mul_ovf(x, y).ok() == x.checked_mul(y),
            "mul_ovf must fault exactly on overflow",
        );
    }

    /// Proof: floor division never panics and satisfies q*y + r == x with
    /// the remainder carrying the divisor's sign.
    #[kani::proof]
    fn divmod_adj_identity() {
        let x: i32 = kani::any();
        let y: i32 = kani::any();
        kani::assume(y != 0);
        kani::assume(!(x == i32::MIN && y == -1));
        let (q, r) = divmod_adj(x, y);
        kani::assert(
            q as i64 * y as i64 + r as i64 == x as i64,
            "floor quotient and remainder must recombine",
        );
        kani::assert(r == 0 || (r < 0) == (y < 0), "remainder takes divisor's sign");
    }

    /// Proof: the checked division forms never panic.
    #[kani::proof]
    fn floordiv_ovf_zer_never_panics() {
        let x: i64 = kani::any();
        let y: i64 = kani::any();
        let _ = int_floordiv_ovf_zer(x, y);
        let _ = int_mod_ovf_zer(x, y);
    }
}
