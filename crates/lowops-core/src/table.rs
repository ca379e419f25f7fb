//! The operation table.
//!
//! One descriptor per named low-level operation: its operand and result
//! kinds, the faults it can raise, and the kernel entry point that evaluates
//! it. `int_*`/`uint_*` operate on the native word, `llong_*`/`ullong_*` on
//! 64-bit integers, `float_*` on `f64`.
//!
//! `cast_ptr_to_int` has no entry: an address is not a foldable constant.

use crate::fold::{FoldError, Operands};
use crate::value::{Value, ValueKind};
use anyhow::bail;
use heck::{ToShoutySnakeCase, ToSnakeCase};
use lowops_runtime::{cast, float, int, uint, FaultKind};
use std::fmt;
use std::str::FromStr;

/// Evaluator behind an operation.
pub type Eval = fn(&Operands<'_>) -> Result<Value, FoldError>;

/// Operation family, from the name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Bool,
    Int,
    UInt,
    LLong,
    ULLong,
    Float,
    Char,
    UniChar,
    Cast,
}

impl Family {
    pub const ALL: [Family; 9] = [
        Family::Bool,
        Family::Int,
        Family::UInt,
        Family::LLong,
        Family::ULLong,
        Family::Float,
        Family::Char,
        Family::UniChar,
        Family::Cast,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Family::Bool => "bool",
            Family::Int => "int",
            Family::UInt => "uint",
            Family::LLong => "llong",
            Family::ULLong => "ullong",
            Family::Float => "float",
            Family::Char => "char",
            Family::UniChar => "unichar",
            Family::Cast => "cast",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let wanted = s.to_ascii_lowercase();
        match Family::ALL.into_iter().find(|family| family.name() == wanted) {
            Some(family) => Ok(family),
            None => bail!("unknown operation family `{s}`"),
        }
    }
}

/// Descriptor of one named operation.
#[derive(Debug)]
pub struct OpDesc {
    pub name: &'static str,
    pub family: Family,
    pub args: &'static [ValueKind],
    pub result: ValueKind,
    /// Faults the operation can raise, in check order.
    pub can_raise: &'static [FaultKind],
    pub(crate) eval: Eval,
}

impl OpDesc {
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Whether the operation never faults.
    pub fn is_total(&self) -> bool {
        self.can_raise.is_empty()
    }

    /// Name of the C-backend macro implementing this operation.
    pub fn backend_symbol(&self) -> String {
        format!("OP_{}", self.name.to_shouty_snake_case())
    }
}

const NONE: &[FaultKind] = &[];
const OVF: &[FaultKind] = &[FaultKind::Overflow];
const ZER: &[FaultKind] = &[FaultKind::DivisionByZero];
const VAL: &[FaultKind] = &[FaultKind::InvalidValue];
const OVF_ZER: &[FaultKind] = &[FaultKind::DivisionByZero, FaultKind::Overflow];
const OVF_VAL: &[FaultKind] = &[FaultKind::InvalidValue, FaultKind::Overflow];

macro_rules! op {
    ($name:expr, $fam:ident, [$($arg:ident),*] -> $res:ident, $raise:expr, $eval:expr) => {
        OpDesc {
            name: $name,
            family: Family::$fam,
            args: &[$(ValueKind::$arg),*],
            result: ValueKind::$res,
            can_raise: $raise,
            eval: $eval,
        }
    };
}

/// Signed family: `$p` name prefix, `$k` value kind, `$acc` operand
/// accessor, `$t` machine type.
macro_rules! signed_ops {
    ($p:literal, $fam:ident, $k:ident, $acc:ident, $t:ty) => {[
        op!(concat!($p, "_is_true"), $fam, [$k] -> Bool, NONE,
            |a| Ok(Value::Bool(int::int_is_true(a.$acc(0)?)))),
        op!(concat!($p, "_pos"), $fam, [$k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_pos(a.$acc(0)?)))),
        op!(concat!($p, "_invert"), $fam, [$k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_invert(a.$acc(0)?)))),
        op!(concat!($p, "_neg"), $fam, [$k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_neg(a.$acc(0)?)))),
        op!(concat!($p, "_neg_ovf"), $fam, [$k] -> $k, OVF,
            |a| Ok(Value::$k(int::int_neg_ovf(a.$acc(0)?)?))),
        op!(concat!($p, "_abs"), $fam, [$k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_abs(a.$acc(0)?)))),
        op!(concat!($p, "_abs_ovf"), $fam, [$k] -> $k, OVF,
            |a| Ok(Value::$k(int::int_abs_ovf(a.$acc(0)?)?))),
        op!(concat!($p, "_eq"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(int::int_eq(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_ne"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(int::int_ne(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_lt"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(int::int_lt(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_le"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(int::int_le(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_gt"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(int::int_gt(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_ge"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(int::int_ge(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_cmp"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_cmp(a.$acc(0)?, a.$acc(1)?) as $t))),
        op!(concat!($p, "_and"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_and(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_or"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_or(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_xor"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_xor(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_add"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_add(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_add_ovf"), $fam, [$k, $k] -> $k, OVF,
            |a| Ok(Value::$k(int::int_add_ovf(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_sub"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_sub(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_sub_ovf"), $fam, [$k, $k] -> $k, OVF,
            |a| Ok(Value::$k(int::int_sub_ovf(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_mul"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_mul(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_mul_ovf"), $fam, [$k, $k] -> $k, OVF,
            |a| Ok(Value::$k(int::int_mul_ovf_with(a.mul_check(), a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_lshift"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_lshift(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_rshift"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_rshift(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_lshift_ovf"), $fam, [$k, $k] -> $k, OVF,
            |a| Ok(Value::$k(int::int_lshift_ovf(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_lshift_val"), $fam, [$k, $k] -> $k, VAL,
            |a| Ok(Value::$k(int::int_lshift_val(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_rshift_val"), $fam, [$k, $k] -> $k, VAL,
            |a| Ok(Value::$k(int::int_rshift_val(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_lshift_ovf_val"), $fam, [$k, $k] -> $k, OVF_VAL,
            |a| Ok(Value::$k(int::int_lshift_ovf_val(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_floordiv"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_floordiv(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_floordiv_ovf"), $fam, [$k, $k] -> $k, OVF,
            |a| Ok(Value::$k(int::int_floordiv_ovf(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_floordiv_zer"), $fam, [$k, $k] -> $k, ZER,
            |a| Ok(Value::$k(int::int_floordiv_zer(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_floordiv_ovf_zer"), $fam, [$k, $k] -> $k, OVF_ZER,
            |a| Ok(Value::$k(int::int_floordiv_ovf_zer(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_mod"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_mod(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_mod_ovf"), $fam, [$k, $k] -> $k, OVF,
            |a| Ok(Value::$k(int::int_mod_ovf(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_mod_zer"), $fam, [$k, $k] -> $k, ZER,
            |a| Ok(Value::$k(int::int_mod_zer(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_mod_ovf_zer"), $fam, [$k, $k] -> $k, OVF_ZER,
            |a| Ok(Value::$k(int::int_mod_ovf_zer(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_div"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(int::int_div(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_div_zer"), $fam, [$k, $k] -> $k, ZER,
            |a| Ok(Value::$k(int::int_div_zer(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_truediv"), $fam, [$k, $k] -> Float, NONE,
            |a| Ok(Value::Float(int::int_truediv(a.$acc(0)?, a.$acc(1)?)))),
    ]};
}

/// Unsigned family, same parameters as `signed_ops!`.
macro_rules! unsigned_ops {
    ($p:literal, $fam:ident, $k:ident, $acc:ident, $t:ty) => {[
        op!(concat!($p, "_is_true"), $fam, [$k] -> Bool, NONE,
            |a| Ok(Value::Bool(uint::uint_is_true(a.$acc(0)?)))),
        op!(concat!($p, "_pos"), $fam, [$k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_pos(a.$acc(0)?)))),
        op!(concat!($p, "_invert"), $fam, [$k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_invert(a.$acc(0)?)))),
        op!(concat!($p, "_neg"), $fam, [$k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_neg(a.$acc(0)?)))),
        op!(concat!($p, "_abs"), $fam, [$k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_abs(a.$acc(0)?)))),
        op!(concat!($p, "_eq"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(uint::uint_eq(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_ne"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(uint::uint_ne(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_lt"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(uint::uint_lt(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_le"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(uint::uint_le(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_gt"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(uint::uint_gt(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_ge"), $fam, [$k, $k] -> Bool, NONE,
            |a| Ok(Value::Bool(uint::uint_ge(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_cmp"), $fam, [$k, $k] -> Int, NONE,
            |a| Ok(Value::Int(uint::uint_cmp(a.$acc(0)?, a.$acc(1)?) as isize))),
        op!(concat!($p, "_and"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_and(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_or"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_or(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_xor"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_xor(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_add"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_add(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_sub"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_sub(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_mul"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_mul(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_lshift"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_lshift(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_rshift"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_rshift(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_floordiv"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_floordiv(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_div"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_div(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_mod"), $fam, [$k, $k] -> $k, NONE,
            |a| Ok(Value::$k(uint::uint_mod(a.$acc(0)?, a.$acc(1)?)))),
        op!(concat!($p, "_floordiv_zer"), $fam, [$k, $k] -> $k, ZER,
            |a| Ok(Value::$k(uint::uint_floordiv_zer(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_mod_zer"), $fam, [$k, $k] -> $k, ZER,
            |a| Ok(Value::$k(uint::uint_mod_zer(a.$acc(0)?, a.$acc(1)?)?))),
        op!(concat!($p, "_truediv"), $fam, [$k, $k] -> Float, NONE,
            |a| Ok(Value::Float(
                cast::cast_uint_to_float::<$t>(a.$acc(0)?) / cast::cast_uint_to_float::<$t>(a.$acc(1)?)
            ))),
    ]};
}

const INT_OPS: &[OpDesc] = &signed_ops!("int", Int, Int, int, isize);
const LLONG_OPS: &[OpDesc] = &signed_ops!("llong", LLong, LLong, llong, i64);
const UINT_OPS: &[OpDesc] = &unsigned_ops!("uint", UInt, UInt, uint, usize);
const ULLONG_OPS: &[OpDesc] = &unsigned_ops!("ullong", ULLong, ULLong, ullong, u64);

const FLOAT_OPS: &[OpDesc] = &[
    op!("float_is_true", Float, [Float] -> Bool, NONE,
        |a| Ok(Value::Bool(float::float_is_true(a.float(0)?)))),
    op!("float_neg", Float, [Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_neg(a.float(0)?)))),
    op!("float_abs", Float, [Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_abs(a.float(0)?)))),
    op!("float_floor", Float, [Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_floor(a.float(0)?)))),
    op!("float_eq", Float, [Float, Float] -> Bool, NONE,
        |a| Ok(Value::Bool(float::float_eq(a.float(0)?, a.float(1)?)))),
    op!("float_ne", Float, [Float, Float] -> Bool, NONE,
        |a| Ok(Value::Bool(float::float_ne(a.float(0)?, a.float(1)?)))),
    op!("float_lt", Float, [Float, Float] -> Bool, NONE,
        |a| Ok(Value::Bool(float::float_lt(a.float(0)?, a.float(1)?)))),
    op!("float_le", Float, [Float, Float] -> Bool, NONE,
        |a| Ok(Value::Bool(float::float_le(a.float(0)?, a.float(1)?)))),
    op!("float_gt", Float, [Float, Float] -> Bool, NONE,
        |a| Ok(Value::Bool(float::float_gt(a.float(0)?, a.float(1)?)))),
    op!("float_ge", Float, [Float, Float] -> Bool, NONE,
        |a| Ok(Value::Bool(float::float_ge(a.float(0)?, a.float(1)?)))),
    op!("float_cmp", Float, [Float, Float] -> Int, NONE,
        |a| Ok(Value::Int(float::float_cmp(a.float(0)?, a.float(1)?) as isize))),
    op!("float_add", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_add(a.float(0)?, a.float(1)?)))),
    op!("float_sub", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_sub(a.float(0)?, a.float(1)?)))),
    op!("float_mul", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_mul(a.float(0)?, a.float(1)?)))),
    op!("float_div", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_div(a.float(0)?, a.float(1)?)))),
    op!("float_truediv", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_truediv(a.float(0)?, a.float(1)?)))),
    op!("float_floordiv", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_floordiv(a.float(0)?, a.float(1)?)))),
    op!("float_mod", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_mod(a.float(0)?, a.float(1)?)))),
    op!("float_fmod", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_fmod(a.float(0)?, a.float(1)?)))),
    op!("float_pow", Float, [Float, Float] -> Float, NONE,
        |a| Ok(Value::Float(float::float_pow(a.float(0)?, a.float(1)?)))),
    op!("float_div_zer", Float, [Float, Float] -> Float, ZER,
        |a| Ok(Value::Float(float::float_div_zer(a.float(0)?, a.float(1)?)?))),
    op!("float_truediv_zer", Float, [Float, Float] -> Float, ZER,
        |a| Ok(Value::Float(float::float_truediv_zer(a.float(0)?, a.float(1)?)?))),
    op!("float_floordiv_zer", Float, [Float, Float] -> Float, ZER,
        |a| Ok(Value::Float(float::float_floordiv_zer(a.float(0)?, a.float(1)?)?))),
    op!("float_mod_zer", Float, [Float, Float] -> Float, ZER,
        |a| Ok(Value::Float(float::float_mod_zer(a.float(0)?, a.float(1)?)?))),
];

const MISC_OPS: &[OpDesc] = &[
    op!("bool_not", Bool, [Bool] -> Bool, NONE,
        |a| Ok(Value::Bool(int::bool_not(a.boolean(0)?)))),
    op!("char_eq", Char, [Char, Char] -> Bool, NONE,
        |a| Ok(Value::Bool(a.char(0)? == a.char(1)?))),
    op!("char_ne", Char, [Char, Char] -> Bool, NONE,
        |a| Ok(Value::Bool(a.char(0)? != a.char(1)?))),
    op!("char_lt", Char, [Char, Char] -> Bool, NONE,
        |a| Ok(Value::Bool(a.char(0)? < a.char(1)?))),
    op!("char_le", Char, [Char, Char] -> Bool, NONE,
        |a| Ok(Value::Bool(a.char(0)? <= a.char(1)?))),
    op!("char_gt", Char, [Char, Char] -> Bool, NONE,
        |a| Ok(Value::Bool(a.char(0)? > a.char(1)?))),
    op!("char_ge", Char, [Char, Char] -> Bool, NONE,
        |a| Ok(Value::Bool(a.char(0)? >= a.char(1)?))),
    op!("unichar_eq", UniChar, [UniChar, UniChar] -> Bool, NONE,
        |a| Ok(Value::Bool(a.unichar(0)? == a.unichar(1)?))),
    op!("unichar_ne", UniChar, [UniChar, UniChar] -> Bool, NONE,
        |a| Ok(Value::Bool(a.unichar(0)? != a.unichar(1)?))),
];

const CAST_OPS: &[OpDesc] = &[
    op!("cast_bool_to_int", Cast, [Bool] -> Int, NONE,
        |a| Ok(Value::Int(cast::cast_bool_to_int(a.boolean(0)?)))),
    op!("cast_bool_to_uint", Cast, [Bool] -> UInt, NONE,
        |a| Ok(Value::UInt(cast::cast_bool_to_uint(a.boolean(0)?)))),
    op!("cast_bool_to_float", Cast, [Bool] -> Float, NONE,
        |a| Ok(Value::Float(cast::cast_bool_to_float(a.boolean(0)?)))),
    op!("cast_uint_to_int", Cast, [UInt] -> Int, NONE,
        |a| Ok(Value::Int(cast::cast_uint_to_int(a.uint(0)?)))),
    op!("cast_int_to_uint", Cast, [Int] -> UInt, NONE,
        |a| Ok(Value::UInt(cast::cast_int_to_uint(a.int(0)?)))),
    op!("cast_char_to_int", Cast, [Char] -> Int, NONE,
        |a| Ok(Value::Int(cast::cast_char_to_int(a.char(0)?)))),
    op!("cast_int_to_char", Cast, [Int] -> Char, NONE,
        |a| Ok(Value::Char(cast::cast_int_to_char(a.int(0)?)))),
    op!("cast_unichar_to_int", Cast, [UniChar] -> Int, NONE,
        |a| Ok(Value::Int(cast::cast_unichar_to_int(a.unichar(0)?)))),
    op!("cast_int_to_unichar", Cast, [Int] -> UniChar, NONE,
        |a| Ok(Value::UniChar(cast::cast_int_to_unichar(a.int(0)?)))),
    op!("cast_int_to_float", Cast, [Int] -> Float, NONE,
        |a| Ok(Value::Float(cast::cast_int_to_float(a.int(0)?)))),
    op!("cast_uint_to_float", Cast, [UInt] -> Float, NONE,
        |a| Ok(Value::Float(cast::cast_uint_to_float(a.uint(0)?)))),
    op!("cast_float_to_int", Cast, [Float] -> Int, NONE,
        |a| Ok(Value::Int(cast::cast_float_to_int(a.float(0)?)))),
    op!("cast_float_to_int_ovf", Cast, [Float] -> Int, OVF,
        |a| Ok(Value::Int(cast::cast_float_to_int_ovf(a.float(0)?)?))),
    op!("cast_float_to_uint", Cast, [Float] -> UInt, NONE,
        |a| Ok(Value::UInt(cast::cast_float_to_uint(a.float(0)?)))),
    op!("cast_int_to_longlong", Cast, [Int] -> LLong, NONE,
        |a| Ok(Value::LLong(cast::cast_int_to_longlong(a.int(0)?)))),
    op!("truncate_longlong_to_int", Cast, [LLong] -> Int, NONE,
        |a| Ok(Value::Int(cast::truncate_longlong_to_int(a.llong(0)?)))),
];

static FAMILIES: &[&[OpDesc]] = &[
    MISC_OPS, INT_OPS, UINT_OPS, LLONG_OPS, ULLONG_OPS, FLOAT_OPS, CAST_OPS,
];

/// Every operation, grouped by family.
pub fn ops() -> impl Iterator<Item = &'static OpDesc> {
    FAMILIES.iter().flat_map(|family| family.iter())
}

/// Find an operation by name.
///
/// Accepts the name in any case style (`int_add_ovf`, `IntAddOvf`,
/// `INT_ADD_OVF`) as well as the backend symbol (`OP_INT_ADD_OVF`).
pub fn lookup(name: &str) -> Option<&'static OpDesc> {
    let snake = name.to_snake_case();
    let wanted = snake.strip_prefix("op_").unwrap_or(&snake);
    ops().find(|desc| desc.name == wanted)
}
