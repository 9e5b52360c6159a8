//! Operand parsing at the input boundary.
//!
//! All user text is converted here; nothing past this module sees a string
//! operand. Empty fields, non-numeric text, and non-finite values (`inf`,
//! `NaN`) are rejected with `EvalError::InvalidInput`.

use serde::{Deserialize, Serialize};

use crate::types::{ComplexValue, EvalError};

/// Raw text of one operand as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandInput {
    pub real: String,
    pub imag: String,
}

impl OperandInput {
    pub fn new(real: impl Into<String>, imag: impl Into<String>) -> Self {
        OperandInput {
            real: real.into(),
            imag: imag.into(),
        }
    }
}

/// Parse one numeric field. `field` names the field in error messages.
pub fn parse_component(field: &str, text: &str) -> Result<f64, EvalError> {
    let invalid = || EvalError::InvalidInput {
        field: field.to_string(),
        value: text.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Parse operand number `index` (1-based, used for field names).
pub fn parse_operand(index: usize, input: &OperandInput) -> Result<ComplexValue, EvalError> {
    let real = parse_component(&format!("real part {}", index), &input.real)?;
    let imag = parse_component(&format!("imaginary part {}", index), &input.imag)?;
    Ok(ComplexValue::new(real, imag))
}
