//! lowops-core — operation table and constant folder.
//!
//! Every named low-level operation (`int_add_ovf`, `uint_floordiv_zer`,
//! `cast_int_to_char`, ...) is described by an [`OpDesc`] and can be
//! evaluated on typed [`Value`]s through [`fold`], which dispatches to the
//! `lowops-runtime` kernel.

pub mod fold;
pub mod table;
pub mod value;

// Re-export key types for convenience
pub use anyhow::{Context, Result};
pub use fold::{fold, fold_desc, parse_operands, FoldError, FoldOptions};
pub use lowops_runtime::int::MulOverflowCheck;
pub use lowops_runtime::{Fault, FaultKind};
pub use table::{lookup, ops, Family, OpDesc};
pub use value::{Value, ValueKind};

/// Parse textual operands for `name` and fold them.
///
/// Parse failures and unknown names are reported as errors; a fault raised
/// by the operation itself is returned as `Ok(Err(fault))` so callers can
/// tell a bad request from a value that faults.
///
/// # Example
/// ```
/// use lowops_core::{eval_str, FoldOptions, Value};
///
/// let folded = eval_str("int_floordiv_zer", &["-7", "2"], &FoldOptions::default()).unwrap();
/// assert_eq!(folded, Ok(Value::Int(-4)));
/// ```
pub fn eval_str<S: AsRef<str>>(
    name: &str,
    operands: &[S],
    options: &FoldOptions,
) -> Result<std::result::Result<Value, Fault>> {
    let desc = lookup(name).with_context(|| format!("unknown operation `{name}`"))?;
    let values = parse_operands(desc, operands)?;
    match fold_desc(desc, &values, options) {
        Ok(value) => Ok(Ok(value)),
        Err(FoldError::Fault(fault)) => Ok(Err(fault)),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_str_separates_faults_from_errors() {
        let options = FoldOptions::default();
        assert_eq!(
            eval_str("int_mod_zer", &["-7", "2"], &options).unwrap(),
            Ok(Value::Int(1))
        );
        let fault = eval_str("llong_floordiv_zer", &["1", "0"], &options)
            .unwrap()
            .unwrap_err();
        assert_eq!(fault.kind, FaultKind::DivisionByZero);
        assert!(eval_str("int_nope", &["1"], &options).is_err());
        assert!(eval_str("int_add", &["1", "x"], &options).is_err());
    }
}
