//! Floor division and modulo across widths.

use lowops_runtime::int::{
    divmod_adj, int_div, int_div_zer, int_floordiv, int_floordiv_ovf, int_floordiv_ovf_zer,
    int_floordiv_zer, int_mod, int_mod_ovf, int_mod_ovf_zer, int_mod_zer,
};
use lowops_runtime::uint::{uint_floordiv, uint_floordiv_zer, uint_mod, uint_mod_zer};
use lowops_runtime::{Fault, FaultKind};

macro_rules! floor_identity {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            let values: [$t; 12] = [
                <$t>::MIN,
                <$t>::MIN + 1,
                -100,
                -7,
                -2,
                -1,
                1,
                2,
                7,
                100,
                <$t>::MAX - 1,
                <$t>::MAX,
            ];
            for x in values.iter().copied().chain([0]) {
                for y in values {
                    let q = int_floordiv(x, y);
                    let r = int_mod(x, y);
                    assert_eq!((q, r), divmod_adj(x, y));
                    // The remainder is zero or takes the divisor's sign.
                    assert!(r == 0 || (r < 0) == (y < 0), "{x} mod {y} = {r}");
                    assert!(
                        (r as i128).abs() < (y as i128).abs(),
                        "{x} mod {y} = {r}"
                    );
                    if x == <$t>::MIN && y == -1 {
                        assert_eq!(int_floordiv_ovf(x, y).unwrap_err().kind, FaultKind::Overflow);
                        assert_eq!(int_mod_ovf(x, y).unwrap_err().kind, FaultKind::Overflow);
                        continue;
                    }
                    assert_eq!(q as i128 * y as i128 + r as i128, x as i128, "{x} // {y}");
                    assert_eq!(
                        q as i128,
                        (x as i128).div_euclid(y as i128)
                            - i128::from(y < 0 && (x as i128).rem_euclid(y as i128) != 0),
                        "{x} // {y}"
                    );
                    assert_eq!(int_floordiv_ovf(x, y), Ok(q));
                    assert_eq!(int_mod_ovf(x, y), Ok(r));
                    assert_eq!(int_floordiv_zer(x, y), Ok(q));
                    assert_eq!(int_mod_zer(x, y), Ok(r));
                }
            }
        }
    };
}

floor_identity!(floor_identity_i8, i8);
floor_identity!(floor_identity_i16, i16);
floor_identity!(floor_identity_i32, i32);
floor_identity!(floor_identity_i64, i64);
floor_identity!(floor_identity_isize, isize);

#[test]
fn source_level_examples() {
    assert_eq!(int_floordiv(-7i64, 2), -4);
    assert_eq!(int_mod(-7i64, 2), 1);
    assert_eq!(int_floordiv(7i64, -2), -4);
    assert_eq!(int_mod(7i64, -2), -1);
    assert_eq!(int_floordiv(-7i64, -2), 3);
    assert_eq!(int_mod(-7i64, -2), -1);
    assert_eq!(int_floordiv(6i64, -3), -2);
    assert_eq!(int_mod(6i64, -3), 0);
}

#[test]
fn zero_divisor() {
    for x in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(
            int_floordiv_zer(x, 0),
            Err(Fault::division_by_zero("integer division"))
        );
        assert_eq!(
            int_mod_zer(x, 0),
            Err(Fault::division_by_zero("integer modulo"))
        );
        assert_eq!(int_floordiv_ovf_zer(x, 0).unwrap_err().kind, FaultKind::DivisionByZero);
        assert_eq!(int_mod_ovf_zer(x, 0).unwrap_err().kind, FaultKind::DivisionByZero);
        assert_eq!(int_div_zer(x, 0).unwrap_err().kind, FaultKind::DivisionByZero);
        // Unchecked forms never panic.
        assert_eq!(int_floordiv(x, 0), 0);
        assert_eq!(int_mod(x, 0), 0);
        assert_eq!(int_div(x, 0), 0);
    }
}

#[test]
fn min_by_minus_one() {
    assert_eq!(int_floordiv(i64::MIN, -1), i64::MIN);
    assert_eq!(int_mod(i64::MIN, -1), 0);
    assert_eq!(int_div(i64::MIN, -1), i64::MIN);
    assert_eq!(
        int_floordiv_ovf_zer(i64::MIN, -1),
        Err(Fault::overflow("integer division"))
    );
    assert_eq!(
        int_mod_ovf_zer(i64::MIN, -1),
        Err(Fault::overflow("integer modulo"))
    );
    // MIN + 1 is an ordinary operand.
    assert_eq!(int_floordiv_ovf(i64::MIN + 1, -1), Ok(i64::MAX));
}

#[test]
fn truncating_division_differs_from_floor() {
    assert_eq!(int_div(-7i32, 2), -3);
    assert_eq!(int_floordiv(-7i32, 2), -4);
    assert_eq!(int_div_zer(7i32, -2), Ok(-3));
}

#[test]
fn unsigned_division() {
    for x in [0u64, 1, 7, u64::MAX - 1, u64::MAX] {
        for y in [1u64, 2, 3, 1 << 63, u64::MAX] {
            assert_eq!(uint_floordiv(x, y), x / y);
            assert_eq!(uint_mod(x, y), x % y);
            assert_eq!(uint_floordiv_zer(x, y), Ok(x / y));
            assert_eq!(uint_mod_zer(x, y), Ok(x % y));
        }
        assert_eq!(
            uint_floordiv_zer(x, 0),
            Err(Fault::division_by_zero("unsigned integer division"))
        );
        assert_eq!(
            uint_mod_zer(x, 0),
            Err(Fault::division_by_zero("unsigned integer modulo"))
        );
        assert_eq!(uint_floordiv(x, 0), 0);
        assert_eq!(uint_mod(x, 0), 0);
    }
}
