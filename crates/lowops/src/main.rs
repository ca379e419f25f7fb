use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lowops_core::{eval_str, ops, Family, FoldOptions, MulOverflowCheck, OpDesc};
use std::process::ExitCode;

/// lowops — checked low-level arithmetic operations for translated programs.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List known operations with their backend symbol and raised exceptions
    List {
        /// Only list one family (int, uint, llong, ullong, float, char, unichar, bool, cast)
        #[arg(long, short)]
        family: Option<Family>,
    },
    /// Fold one operation on constant operands
    Eval {
        /// Operation name, e.g. int_add_ovf or OP_INT_ADD_OVF
        op: String,

        /// Operands, parsed according to the operation's argument kinds
        #[arg(allow_negative_numbers = true)]
        operands: Vec<String>,

        /// Overflow check used by the *_mul_ovf operations
        #[arg(long, value_enum, default_value_t = MulCheck::Widening)]
        mul_check: MulCheck,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum MulCheck {
    /// Exact product in a double-width integer
    Widening,
    /// Wrapped product compared against the float product
    FloatApprox,
}

impl From<MulCheck> for MulOverflowCheck {
    fn from(check: MulCheck) -> Self {
        match check {
            MulCheck::Widening => MulOverflowCheck::Widening,
            MulCheck::FloatApprox => MulOverflowCheck::FloatApprox,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { family } => {
            list(family);
            Ok(ExitCode::SUCCESS)
        }
        Command::Eval {
            op,
            operands,
            mul_check,
        } => eval(&op, &operands, mul_check),
    }
}

fn list(family: Option<Family>) {
    let selected: Vec<&OpDesc> = ops()
        .filter(|desc| family.map_or(true, |f| desc.family == f))
        .collect();

    for desc in &selected {
        println!("{}", describe(desc));
    }
    eprintln!("lowops: {} operation(s)", selected.len());
}

fn describe(desc: &OpDesc) -> String {
    let raises = if desc.is_total() {
        "-".to_string()
    } else {
        desc.can_raise
            .iter()
            .map(|kind| kind.exception_name())
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        "{:<24} {} {:<28} {}",
        desc.name,
        desc.arity(),
        desc.backend_symbol(),
        raises
    )
}

fn eval(op: &str, operands: &[String], mul_check: MulCheck) -> Result<ExitCode> {
    eprintln!("lowops: folding {op} {}", operands.join(" "));

    let options = FoldOptions {
        mul_check: mul_check.into(),
    };
    let folded = eval_str(op, operands, &options).context("evaluation failed")?;

    match folded {
        Ok(value) => {
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        Err(fault) => {
            println!("{fault}");
            eprintln!("lowops: {op} raised {}", fault.kind.exception_name());
            Ok(ExitCode::FAILURE)
        }
    }
}
