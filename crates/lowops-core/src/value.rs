//! Typed operand values for the constant folder.

use anyhow::{bail, Context, Result};
use std::fmt;

/// Low-level type of an operand or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    /// Native signed word (`isize`).
    Int,
    /// Native unsigned word (`usize`).
    UInt,
    /// 64-bit signed.
    LLong,
    /// 64-bit unsigned.
    ULLong,
    Float,
    /// Single byte.
    Char,
    /// Unicode code point, not necessarily a valid scalar value.
    UniChar,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::LLong => "llong",
            ValueKind::ULLong => "ullong",
            ValueKind::Float => "float",
            ValueKind::Char => "char",
            ValueKind::UniChar => "unichar",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An operand or result value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(isize),
    UInt(usize),
    LLong(i64),
    ULLong(u64),
    Float(f64),
    Char(u8),
    UniChar(u32),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::LLong(_) => ValueKind::LLong,
            Value::ULLong(_) => ValueKind::ULLong,
            Value::Float(_) => ValueKind::Float,
            Value::Char(_) => ValueKind::Char,
            Value::UniChar(_) => ValueKind::UniChar,
        }
    }

    /// Parse `text` as a value of `kind`.
    ///
    /// Integers accept an optional sign and a `0x` prefix. Booleans accept
    /// `true`/`false`/`1`/`0`. Chars accept a single ASCII character or a
    /// byte value; unichars accept a single character, `U+XXXX`, or a number.
    pub fn parse(kind: ValueKind, text: &str) -> Result<Self> {
        let text = text.trim();
        let value = match kind {
            ValueKind::Bool => Value::Bool(parse_bool(text)?),
            ValueKind::Int => Value::Int(parse_int(text)?),
            ValueKind::UInt => Value::UInt(parse_int(text)?),
            ValueKind::LLong => Value::LLong(parse_int(text)?),
            ValueKind::ULLong => Value::ULLong(parse_int(text)?),
            ValueKind::Float => Value::Float(
                text.parse()
                    .with_context(|| format!("invalid float literal `{text}`"))?,
            ),
            ValueKind::Char => Value::Char(parse_char(text)?),
            ValueKind::UniChar => Value::UniChar(parse_unichar(text)?),
        };
        Ok(value)
    }
}

fn parse_bool(text: &str) -> Result<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => bail!("invalid bool literal `{text}`"),
    }
}

/// Parse through `i128` so that both signed and unsigned 64-bit ranges fit,
/// then narrow to the target.
fn parse_int<T: TryFrom<i128>>(text: &str) -> Result<T> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    // `from_str_radix` takes a sign of its own; only one is allowed.
    if !digits.starts_with(|c: char| c.is_digit(radix)) {
        bail!("invalid integer literal `{text}`");
    }
    let magnitude = i128::from_str_radix(digits, radix)
        .with_context(|| format!("invalid integer literal `{text}`"))?;
    let value = if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    };
    value
        .and_then(|value| T::try_from(value).ok())
        .with_context(|| format!("integer literal `{text}` out of range"))
}

fn parse_char(text: &str) -> Result<u8> {
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii() && !c.is_ascii_digit() {
            return Ok(c as u8);
        }
    }
    parse_int(text).with_context(|| format!("invalid char literal `{text}`"))
}

fn parse_unichar(text: &str) -> Result<u32> {
    if let Some(hex) = text
        .strip_prefix("U+")
        .or_else(|| text.strip_prefix("u+"))
    {
        return u32::from_str_radix(hex, 16)
            .with_context(|| format!("invalid code point `{text}`"));
    }
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !c.is_ascii_digit() {
            return Ok(u32::from(c));
        }
    }
    parse_int(text).with_context(|| format!("invalid unichar literal `{text}`"))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::LLong(v) => write!(f, "{v}"),
            Value::ULLong(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Char(v) => write!(f, "'{}'", char::from(*v).escape_default()),
            Value::UniChar(v) => write!(f, "U+{v:04X}"),
        }
    }
}
