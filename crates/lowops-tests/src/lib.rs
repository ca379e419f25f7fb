//! Small programs written the way a translator emits them: every source-level
//! arithmetic operator becomes a call into `lowops-runtime`, and faults
//! propagate with `?`. Each has a plain-Rust counterpart (`*_orig`) used as
//! reference by the tests and as baseline by the benchmarks.

use lowops_runtime::int::{self, MulOverflowCheck};
use lowops_runtime::{OpResult, SignedWord};

/// `n!`, faulting with `Overflow` once the product leaves `T`.
pub fn factorial<T: SignedWord>(n: T) -> OpResult<T> {
    factorial_with(MulOverflowCheck::Widening, n)
}

pub fn factorial_with<T: SignedWord>(check: MulOverflowCheck, n: T) -> OpResult<T> {
    let mut acc = T::one();
    let mut i = T::one();
    while int::int_le(i, n) {
        acc = int::int_mul_ovf_with(check, acc, i)?;
        i = int::int_add_ovf(i, T::one())?;
    }
    Ok(acc)
}

pub fn factorial_orig(n: i64) -> Option<i64> {
    (1..=n).try_fold(1i64, |acc, i| acc.checked_mul(i))
}

/// Euclid's algorithm on floor modulo. The result takes the sign of the last
/// non-zero divisor, as in the source language.
pub fn gcd<T: SignedWord>(mut a: T, mut b: T) -> OpResult<T> {
    while int::int_is_true(b) {
        let r = int::int_mod_ovf_zer(a, b)?;
        a = b;
        b = r;
    }
    Ok(a)
}

pub fn gcd_orig(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a.rem_euclid(b);
        let r = if r != 0 && b < 0 { r + b } else { r };
        a = b;
        b = r;
    }
    a
}

/// Source-level `divmod(x, y)`.
pub fn divmod<T: SignedWord>(x: T, y: T) -> OpResult<(T, T)> {
    let q = int::int_floordiv_ovf_zer(x, y)?;
    let r = int::int_mod_ovf_zer(x, y)?;
    Ok((q, r))
}

/// Checked sum of a slice.
pub fn sum<T: SignedWord>(values: &[T]) -> OpResult<T> {
    values
        .iter()
        .try_fold(T::zero(), |acc, &v| int::int_add_ovf(acc, v))
}

pub fn sum_orig(values: &[i64]) -> Option<i64> {
    values.iter().try_fold(0i64, |acc, &v| acc.checked_add(v))
}
