// src/cli.rs
// Command dispatcher behind the polyarith binary, kept in the library so it can be tested.

use log::{debug, info};
use thiserror::Error;

use crate::config::PolyConfig;
use crate::core::coefficient::{BackendType, Coefficient};
use crate::errors::PolynomialError;
use crate::polynomial::{coerce_json_str, Operand, Polynomial};
use num::{BigInt, BigRational};

pub const USAGE: &str = "polyarith <render|add|sub|mul|div|pow|derive|eval> <operands...>\n\
    operands are JSON: [c0, c1, ...] for a polynomial (ascending exponents) or a bare number";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Unknown backend '{0}' (expected i64, i128, bigint or rational)")]
    UnknownBackend(String),

    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Render,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Derive,
    Evaluate,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "render" => Some(Command::Render),
            "add" => Some(Command::Add),
            "sub" | "subtract" => Some(Command::Subtract),
            "mul" | "multiply" => Some(Command::Multiply),
            "div" | "divide" => Some(Command::Divide),
            "pow" | "power" => Some(Command::Power),
            "derive" | "derivative" => Some(Command::Derive),
            "eval" | "evaluate" => Some(Command::Evaluate),
            _ => None,
        }
    }

    /// Number of operands the command takes
    pub fn arity(&self) -> usize {
        match self {
            Command::Render | Command::Derive => 1,
            _ => 2,
        }
    }
}

/// Runs one command line (without the program name) and returns what to print.
pub fn execute(args: &[String], config: &PolyConfig) -> Result<String, CliError> {
    let (name, operands) = args
        .split_first()
        .ok_or_else(|| CliError::Usage("missing command".to_string()))?;
    let command = Command::from_name(name)
        .ok_or_else(|| CliError::Usage(format!("unknown command '{}'", name)))?;
    if operands.len() != command.arity() {
        return Err(CliError::Usage(format!(
            "'{}' takes {} operand(s), got {}",
            name,
            command.arity(),
            operands.len()
        )));
    }

    let backend = config
        .backend_type()
        .ok_or_else(|| CliError::UnknownBackend(config.backend.clone()))?;
    info!("Running {:?} on the {} backend", command, backend.name());

    match backend {
        BackendType::Native64 => run::<i64>(command, operands, config),
        BackendType::Native128 => run::<i128>(command, operands, config),
        BackendType::BigInt => run::<BigInt>(command, operands, config),
        BackendType::Rational => run::<BigRational>(command, operands, config),
    }
}

fn run<C: Coefficient>(command: Command, operands: &[String], config: &PolyConfig) -> Result<String, CliError> {
    debug!("Parsing {} operand(s) as {} coefficients", operands.len(), C::backend_name());
    let operand = |index: usize| -> Result<Polynomial<C>, PolynomialError> {
        Ok(coerce_json_str::<C>(&operands[index])?.into_polynomial())
    };

    let results = match command {
        Command::Render => vec![operand(0)?],
        Command::Add => vec![operand(0)?.add(operand(1)?)],
        Command::Subtract => vec![operand(0)?.subtract(operand(1)?)],
        Command::Multiply => vec![operand(0)?.multiply(operand(1)?)],
        Command::Divide => {
            let (quotient, remainder) = operand(0)?.divide_with_remainder(&operand(1)?)?;
            vec![quotient, remainder]
        }
        Command::Power => {
            let exponent: i64 = operands[1].trim().parse().map_err(|_| {
                CliError::Usage(format!("exponent must be an integer, got '{}'", operands[1]))
            })?;
            vec![operand(0)?.power(exponent)?]
        }
        Command::Derive => vec![operand(0)?.derivative()],
        Command::Evaluate => {
            let x = match coerce_json_str::<C>(&operands[1])? {
                Operand::Scalar(x) => x,
                Operand::Polynomial(_) => {
                    return Err(PolynomialError::TypeMismatch { found: "array".to_string() }.into())
                }
            };
            let value = operand(0)?.value_at(&x);
            return Ok(format_value(&value, config));
        }
    };

    debug!("{:?} produced {} result(s)", command, results.len());
    format_results(&results, config)
}

fn format_value<C: Coefficient>(value: &C, config: &PolyConfig) -> String {
    if config.json_output() {
        serde_json::json!({ "value": value.to_string() }).to_string()
    } else {
        value.to_string()
    }
}

fn format_results<C: Coefficient>(results: &[Polynomial<C>], config: &PolyConfig) -> Result<String, CliError> {
    if config.json_output() {
        let json = match results {
            [single] => serde_json::to_string(single),
            _ => serde_json::to_string(results),
        }
        .map_err(PolynomialError::from)?;
        return Ok(json);
    }

    let lines: Vec<String> = results
        .iter()
        .map(|poly| {
            if config.output.show_degree {
                format!("{} (degree {})", poly.render(), poly.degree())
            } else {
                poly.render()
            }
        })
        .collect();
    Ok(lines.join("\n"))
}
