//! Calculation records: the structured outcome of one calculation plus its
//! rendered history line.

use std::fmt;

use crate::types::{ComplexValue, EvalError, Operation, Value};

/// What a calculation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Value),
    /// A handled evaluation error that is still recorded (division by zero).
    Error(EvalError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{}", v),
            Outcome::Error(e) => write!(f, "{}", e),
        }
    }
}

/// An immutable record of one calculation.
///
/// Records are only built by `calculate`; the display line is rendered once
/// at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    operand1: ComplexValue,
    operand2: Option<ComplexValue>,
    operation: Operation,
    outcome: Outcome,
    display: String,
}

impl CalculationRecord {
    pub(crate) fn new(
        operation: Operation,
        operand1: ComplexValue,
        operand2: Option<ComplexValue>,
        outcome: Outcome,
    ) -> Self {
        // Unary operations never carry a second operand, even if one was typed.
        let operand2 = if operation.is_binary() { operand2 } else { None };
        let display = match operand2 {
            Some(b) => format!("{} {} {} = {}", operand1, operation, b, outcome),
            None => format!("{} {} = {}", operand1, operation, outcome),
        };
        CalculationRecord {
            operand1,
            operand2,
            operation,
            outcome,
            display,
        }
    }

    pub fn operand1(&self) -> ComplexValue {
        self.operand1
    }

    pub fn operand2(&self) -> Option<ComplexValue> {
        self.operand2
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The rendered history line.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
