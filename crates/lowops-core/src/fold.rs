//! Constant folding: evaluate a named operation on typed operand values.

use crate::table::{lookup, OpDesc};
use crate::value::{Value, ValueKind};
use anyhow::{Context, Result};
use lowops_runtime::int::MulOverflowCheck;
use lowops_runtime::Fault;
use std::fmt;

/// Configuration options for folding.
#[derive(Debug, Clone, Default)]
pub struct FoldOptions {
    /// Algorithm behind the `*_mul_ovf` operations.
    pub mul_check: MulOverflowCheck,
}

/// Reasons a fold can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum FoldError {
    /// No operation with this name.
    UnknownOp(String),
    /// Wrong number of operands.
    Arity {
        op: &'static str,
        expected: usize,
        got: usize,
    },
    /// An operand of the wrong kind.
    Operand {
        op: &'static str,
        index: usize,
        expected: ValueKind,
        got: Option<ValueKind>,
    },
    /// The operation itself faulted.
    Fault(Fault),
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::UnknownOp(name) => write!(f, "unknown operation `{name}`"),
            FoldError::Arity { op, expected, got } => {
                write!(f, "`{op}` takes {expected} operand(s), got {got}")
            }
            FoldError::Operand {
                op,
                index,
                expected,
                got: Some(got),
            } => write!(f, "`{op}` operand {index}: expected {expected}, got {got}"),
            FoldError::Operand {
                op,
                index,
                expected,
                got: None,
            } => write!(f, "`{op}` operand {index}: expected {expected}, got nothing"),
            FoldError::Fault(fault) => write!(f, "{fault}"),
        }
    }
}

impl std::error::Error for FoldError {}

impl From<Fault> for FoldError {
    fn from(fault: Fault) -> Self {
        FoldError::Fault(fault)
    }
}

/// Operands handed to an operation's evaluator, already checked against
/// its descriptor.
pub struct Operands<'a> {
    desc: &'static OpDesc,
    values: &'a [Value],
    options: &'a FoldOptions,
}

macro_rules! accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&self, index: usize) -> Result<$ty, FoldError> {
            match self.values.get(index) {
                Some(Value::$variant(v)) => Ok(*v),
                other => Err(FoldError::Operand {
                    op: self.desc.name,
                    index,
                    expected: ValueKind::$variant,
                    got: other.map(Value::kind),
                }),
            }
        }
    };
}

impl Operands<'_> {
    accessor!(boolean, Bool, bool);
    accessor!(int, Int, isize);
    accessor!(uint, UInt, usize);
    accessor!(llong, LLong, i64);
    accessor!(ullong, ULLong, u64);
    accessor!(float, Float, f64);
    accessor!(char, Char, u8);
    accessor!(unichar, UniChar, u32);

    pub fn mul_check(&self) -> MulOverflowCheck {
        self.options.mul_check
    }
}

/// Evaluate operation `name` on `operands`.
///
/// The name is looked up in any case style (see [`lookup`]). Operand count
/// and kinds are validated against the descriptor before the kernel runs.
pub fn fold(name: &str, operands: &[Value], options: &FoldOptions) -> Result<Value, FoldError> {
    let desc = lookup(name).ok_or_else(|| FoldError::UnknownOp(name.to_string()))?;
    fold_desc(desc, operands, options)
}

/// Evaluate an already looked-up operation.
pub fn fold_desc(
    desc: &'static OpDesc,
    operands: &[Value],
    options: &FoldOptions,
) -> Result<Value, FoldError> {
    if operands.len() != desc.args.len() {
        return Err(FoldError::Arity {
            op: desc.name,
            expected: desc.args.len(),
            got: operands.len(),
        });
    }
    for (index, (value, expected)) in operands.iter().zip(desc.args).enumerate() {
        if value.kind() != *expected {
            return Err(FoldError::Operand {
                op: desc.name,
                index,
                expected: *expected,
                got: Some(value.kind()),
            });
        }
    }
    (desc.eval)(&Operands {
        desc,
        values: operands,
        options,
    })
}

/// Parse textual operands according to the kinds `desc` expects.
pub fn parse_operands<S: AsRef<str>>(desc: &OpDesc, texts: &[S]) -> Result<Vec<Value>> {
    if texts.len() != desc.args.len() {
        anyhow::bail!(
            "`{}` takes {} operand(s), got {}",
            desc.name,
            desc.args.len(),
            texts.len()
        );
    }
    texts
        .iter()
        .zip(desc.args)
        .enumerate()
        .map(|(index, (text, kind))| {
            Value::parse(*kind, text.as_ref())
                .with_context(|| format!("operand {index} of `{}`", desc.name))
        })
        .collect()
}
