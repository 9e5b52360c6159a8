//! Core value and error types for the complex-number evaluator.

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::format;

// ──────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────

/// Errors produced by operand parsing and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operand field did not parse as a finite decimal number.
    InvalidInput { field: String, value: String },
    /// A binary operation was requested without a second operand.
    MissingOperand { operation: Operation },
    /// Division where the divisor is exactly `0+0j`.
    DivisionByZero,
    /// The operation produces a render request, not a number.
    NotNumeric { operation: Operation },
    /// An operation tag did not name a known operation.
    UnknownOperation { tag: String },
}

impl EvalError {
    /// Whether a record should still be written to history for this error.
    ///
    /// Division by zero is a valid calculation with an undefined result and
    /// is recorded with the error text in place of the result. Input errors
    /// abort before anything is recorded.
    pub fn is_recorded(&self) -> bool {
        matches!(self, EvalError::DivisionByZero)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidInput { field, value } => {
                write!(
                    f,
                    "invalid input for {}: '{}' is not a finite number",
                    field, value
                )
            }
            EvalError::MissingOperand { operation } => {
                write!(
                    f,
                    "operation '{}' requires a second operand",
                    operation.symbol()
                )
            }
            EvalError::DivisionByZero => {
                write!(f, "Error: Division by zero is not allowed.")
            }
            EvalError::NotNumeric { operation } => {
                write!(
                    f,
                    "operation '{}' does not produce a numeric result",
                    operation.symbol()
                )
            }
            EvalError::UnknownOperation { tag } => {
                write!(
                    f,
                    "unknown operation '{}'; expected one of: {}",
                    tag,
                    Operation::ALL
                        .iter()
                        .map(|op| op.symbol())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}

// ──────────────────────────────────────────────
// ComplexValue
// ──────────────────────────────────────────────

/// A complex number with finite real and imaginary parts.
///
/// Finiteness is checked at the parse boundary (`parse::parse_operand`);
/// arithmetic on finite inputs may still overflow to infinity, which is
/// rendered as-is rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexValue {
    pub real: f64,
    pub imag: f64,
}

impl ComplexValue {
    pub const ZERO: ComplexValue = ComplexValue {
        real: 0.0,
        imag: 0.0,
    };

    pub fn new(real: f64, imag: f64) -> Self {
        ComplexValue { real, imag }
    }

    /// True when both components compare equal to zero (either sign).
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imag == 0.0
    }

    pub(crate) fn to_complex(self) -> Complex64 {
        Complex64::new(self.real, self.imag)
    }
}

impl From<Complex64> for ComplexValue {
    fn from(c: Complex64) -> Self {
        ComplexValue::new(c.re, c.im)
    }
}

impl fmt::Display for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format_complex(*self))
    }
}

// ──────────────────────────────────────────────
// Operation
// ──────────────────────────────────────────────

/// The fixed set of calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Conjugate,
    SquareRoot,
    Argument,
    Plot,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Conjugate,
        Operation::SquareRoot,
        Operation::Argument,
        Operation::Plot,
    ];

    /// The tag shown in display records.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Conjugate => "conj",
            Operation::SquareRoot => "sqrt",
            Operation::Argument => "arg",
            Operation::Plot => "plot",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Conjugate => "Conjugate",
            Operation::SquareRoot => "Square Root",
            Operation::Argument => "Argument (angle)",
            Operation::Plot => "Plot Complex Numbers",
        }
    }

    /// Binary operations take two operands; the rest take one.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = EvalError;

    /// Accepts the display symbol or a word name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        let op = match tag.as_str() {
            "+" | "add" => Operation::Add,
            "-" | "sub" | "subtract" => Operation::Subtract,
            "*" | "mul" | "multiply" => Operation::Multiply,
            "/" | "div" | "divide" => Operation::Divide,
            "conj" | "conjugate" => Operation::Conjugate,
            "sqrt" => Operation::SquareRoot,
            "arg" | "argument" => Operation::Argument,
            "plot" => Operation::Plot,
            _ => {
                return Err(EvalError::UnknownOperation {
                    tag: s.to_string(),
                })
            }
        };
        Ok(op)
    }
}

// ──────────────────────────────────────────────
// Value
// ──────────────────────────────────────────────

/// A numeric evaluation result.
///
/// `Argument` is the only operation that yields a plain real number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Value {
    Complex(ComplexValue),
    Real { value: f64 },
}

impl Value {
    pub fn as_complex(&self) -> Option<ComplexValue> {
        match self {
            Value::Complex(c) => Some(*c),
            Value::Real { .. } => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real { value } => Some(*value),
            Value::Complex(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Complex(c) => f.write_str(&format::format_complex(*c)),
            Value::Real { value } => f.write_str(&format::format_real(*value)),
        }
    }
}
