//! Unsigned integer operations.
//!
//! Operations whose bit-pattern result does not depend on signedness (truth,
//! complement, negation, comparisons within one type, add/sub/mul, bitwise
//! ops) are the signed kernels applied to the reinterpreted operands. Shifts,
//! floor division and modulo have their own implementations here: sharing
//! the signed ones would give arithmetic shifts and a sign-adjusted quotient,
//! both wrong for unsigned operands.

use crate::int;
use crate::{Fault, OpResult, SignedWord, UnsignedWord};

/// Run a signed kernel on the reinterpreted bit patterns.
#[inline(always)]
fn via_signed<U: UnsignedWord>(
    x: U,
    y: U,
    op: fn(U::Signed, U::Signed) -> U::Signed,
) -> U {
    op(x.reinterpret(), y.reinterpret()).reinterpret()
}

#[inline]
pub fn uint_is_true<U: UnsignedWord>(x: U) -> bool {
    int::int_is_true(x.reinterpret())
}

#[inline]
pub fn uint_pos<U: UnsignedWord>(x: U) -> U {
    x
}

#[inline]
pub fn uint_invert<U: UnsignedWord>(x: U) -> U {
    int::int_invert(x.reinterpret()).reinterpret()
}

/// Two's complement negation.
#[inline]
pub fn uint_neg<U: UnsignedWord>(x: U) -> U {
    int::int_neg(x.reinterpret()).reinterpret()
}

/// Absolute value of an unsigned operand is the operand.
#[inline]
pub fn uint_abs<U: UnsignedWord>(x: U) -> U {
    x
}

#[inline]
pub fn uint_eq<U: UnsignedWord>(x: U, y: U) -> bool {
    int::int_eq(x.reinterpret(), y.reinterpret())
}

#[inline]
pub fn uint_ne<U: UnsignedWord>(x: U, y: U) -> bool {
    int::int_ne(x.reinterpret(), y.reinterpret())
}

// Ordering does depend on signedness, so these compare the unsigned values.

#[inline]
pub fn uint_lt<U: UnsignedWord>(x: U, y: U) -> bool {
    x < y
}

#[inline]
pub fn uint_le<U: UnsignedWord>(x: U, y: U) -> bool {
    x <= y
}

#[inline]
pub fn uint_gt<U: UnsignedWord>(x: U, y: U) -> bool {
    x > y
}

#[inline]
pub fn uint_ge<U: UnsignedWord>(x: U, y: U) -> bool {
    x >= y
}

#[inline]
pub fn uint_cmp<U: UnsignedWord>(x: U, y: U) -> i32 {
    i32::from(x > y) - i32::from(x < y)
}

#[inline]
pub fn uint_add<U: UnsignedWord>(x: U, y: U) -> U {
    via_signed(x, y, int::int_add)
}

#[inline]
pub fn uint_sub<U: UnsignedWord>(x: U, y: U) -> U {
    via_signed(x, y, int::int_sub)
}

#[inline]
pub fn uint_mul<U: UnsignedWord>(x: U, y: U) -> U {
    via_signed(x, y, int::int_mul)
}

#[inline]
pub fn uint_and<U: UnsignedWord>(x: U, y: U) -> U {
    via_signed(x, y, int::int_and)
}

#[inline]
pub fn uint_or<U: UnsignedWord>(x: U, y: U) -> U {
    via_signed(x, y, int::int_or)
}

#[inline]
pub fn uint_xor<U: UnsignedWord>(x: U, y: U) -> U {
    via_signed(x, y, int::int_xor)
}

// ── Shifts ──────────────────────────────────────────────────────────────────

#[inline]
pub fn uint_lshift<U: UnsignedWord>(x: U, y: U) -> U {
    let count: u32 = y.as_();
    x.wrapping_shl(count)
}

/// Logical right shift.
#[inline]
pub fn uint_rshift<U: UnsignedWord>(x: U, y: U) -> U {
    let count: u32 = y.as_();
    x.wrapping_shr(count)
}

// ── Division and modulo ─────────────────────────────────────────────────────
//
// Truncation and floor agree for unsigned operands, so no adjustment.

/// Unsigned division. A zero divisor yields 0; see [`uint_floordiv_zer`].
#[inline]
pub fn uint_floordiv<U: UnsignedWord>(x: U, y: U) -> U {
    x.checked_div(&y).unwrap_or_else(U::zero)
}

/// Native unsigned division; identical to [`uint_floordiv`] since truncation
/// and floor agree here.
#[inline]
pub fn uint_div<U: UnsignedWord>(x: U, y: U) -> U {
    uint_floordiv(x, y)
}

/// Unsigned remainder. A zero divisor yields 0; see [`uint_mod_zer`].
#[inline]
pub fn uint_mod<U: UnsignedWord>(x: U, y: U) -> U {
    if y.is_zero() {
        return U::zero();
    }
    x % y
}

pub fn uint_floordiv_zer<U: UnsignedWord>(x: U, y: U) -> OpResult<U> {
    if y.is_zero() {
        return Err(Fault::division_by_zero("unsigned integer division"));
    }
    Ok(uint_floordiv(x, y))
}

pub fn uint_mod_zer<U: UnsignedWord>(x: U, y: U) -> OpResult<U> {
    if y.is_zero() {
        return Err(Fault::division_by_zero("unsigned integer modulo"));
    }
    Ok(uint_mod(x, y))
}
