//! `lowops-runtime` — checked arithmetic kernel for translated programs.
//!
//! Translated code calls these primitives instead of native operators so that
//! the source language's integer and float semantics hold on top of machine
//! arithmetic: floor division, overflow detection, shift-count validation.
//!
//! This crate is `#![no_std]` and never allocates. It provides:
//! - `Fault` / `FaultKind` / `OpResult<T>` — the fault protocol
//! - `FaultSink` — adapter for hosts that receive faults through a callback
//! - `int`, `uint`, `float`, `cast` — the operation sets, generic over the
//!   width traits in `word`
//!
//! Operation suffixes compose over a base operation: `_ovf` reports
//! `Overflow`, `_zer` reports `DivisionByZero`, `_val` reports `InvalidValue`.
//! Within one call the value check runs first, then the zero check, then the
//! operation, then the overflow check.

#![no_std]

pub mod cast;
pub mod float;
pub mod int;
pub mod uint;
pub mod word;

pub use word::{FloatWord, SignedWord, UnsignedWord};

/// The category of a fault raised by a checked operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Result not representable in the operand width.
    Overflow,
    /// Zero right-hand operand to a division or modulo.
    DivisionByZero,
    /// Operand outside the operation's domain (e.g. negative shift count).
    InvalidValue,
}

impl FaultKind {
    /// Name of the exception the host language raises for this fault.
    pub const fn exception_name(self) -> &'static str {
        match self {
            FaultKind::Overflow => "OverflowError",
            FaultKind::DivisionByZero => "ZeroDivisionError",
            FaultKind::InvalidValue => "ValueError",
        }
    }
}

impl core::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.exception_name())
    }
}

/// A fault produced by a checked operation: its kind plus a fixed
/// diagnostic naming the failing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fault {
    pub kind: FaultKind,
    pub message: &'static str,
}

impl Fault {
    pub const fn new(kind: FaultKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    pub const fn overflow(message: &'static str) -> Self {
        Self::new(FaultKind::Overflow, message)
    }

    pub const fn division_by_zero(message: &'static str) -> Self {
        Self::new(FaultKind::DivisionByZero, message)
    }

    pub const fn invalid_value(message: &'static str) -> Self {
        Self::new(FaultKind::InvalidValue, message)
    }
}

impl core::fmt::Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Result type for checked operations — `Result<T, Fault>`.
pub type OpResult<T> = Result<T, Fault>;

/// Host-side receiver for faults.
///
/// Hosts that propagate errors through a side channel (an exception state
/// polled after every call) implement this and route kernel results through
/// [`deliver`]. Any `FnMut(Fault)` closure is a sink.
pub trait FaultSink {
    fn raise(&mut self, fault: Fault);
}

impl<F: FnMut(Fault)> FaultSink for F {
    fn raise(&mut self, fault: Fault) {
        self(fault)
    }
}

/// Hand a checked result to a fault sink.
///
/// On `Err` the sink is raised exactly once and `None` is returned; on `Ok`
/// the sink is not touched and the value is returned.
#[inline]
pub fn deliver<T, S: FaultSink + ?Sized>(result: OpResult<T>, sink: &mut S) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(fault) => {
            sink.raise(fault);
            None
        }
    }
}

/// A sink that remembers the most recent fault and counts raises.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordingSink {
    pub last: Option<Fault>,
    pub raised: usize,
}

impl RecordingSink {
    pub const fn new() -> Self {
        Self {
            last: None,
            raised: 0,
        }
    }

    /// Take the pending fault, clearing it.
    pub fn take(&mut self) -> Option<Fault> {
        self.last.take()
    }
}

impl FaultSink for RecordingSink {
    fn raise(&mut self, fault: Fault) {
        self.last = Some(fault);
        self.raised += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_is_copy() {
        let fault = Fault::overflow("integer addition");
        let copy = fault;
        assert_eq!(fault, copy);
    }

    #[test]
    fn exception_names() {
        assert_eq!(FaultKind::Overflow.exception_name(), "OverflowError");
        assert_eq!(
            FaultKind::DivisionByZero.exception_name(),
            "ZeroDivisionError"
        );
        assert_eq!(FaultKind::InvalidValue.exception_name(), "ValueError");
    }

    #[test]
    fn deliver_ok_leaves_sink_untouched() {
        let mut sink = RecordingSink::new();
        assert_eq!(deliver(Ok(8), &mut sink), Some(8));
        assert_eq!(sink, RecordingSink::new());
    }

    #[test]
    fn deliver_err_raises_once() {
        let mut sink = RecordingSink::new();
        let result: OpResult<i32> = Err(Fault::division_by_zero("integer division"));
        assert_eq!(deliver(result, &mut sink), None);
        assert_eq!(sink.raised, 1);
        assert_eq!(
            sink.take(),
            Some(Fault::division_by_zero("integer division"))
        );
        assert_eq!(sink.last, None);
    }

    #[test]
    fn closure_is_a_sink() {
        let mut seen = None;
        let mut sink = |fault: Fault| seen = Some(fault.kind);
        assert_eq!(
            deliver::<u8, _>(Err(Fault::invalid_value("negative shift count")), &mut sink),
            None
        );
        assert_eq!(seen, Some(FaultKind::InvalidValue));
    }
}
