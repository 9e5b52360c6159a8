//! Argand arithmetic engine -- accepts operand text + an operation tag,
//! produces a calculation record or a render request.
//!
//! Parsing happens first and aborts the whole calculation on bad input, so
//! a failed parse never yields a record. Evaluation runs on
//! `num_complex::Complex64`. Division by zero is the one evaluation error
//! that still produces a record, with the error text in place of a result.

pub mod format;
pub mod numeric;
pub mod parse;
pub mod plot;
pub mod record;
pub mod types;

pub use numeric::evaluate;
pub use parse::{parse_operand, OperandInput};
pub use plot::{plot, PaletteColor, PlotPoint, RenderRequest, PALETTE};
pub use record::{CalculationRecord, Outcome};
pub use types::{ComplexValue, EvalError, Operation, Value};

/// One submission of the calculator form.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub operation: Operation,
    pub operand1: OperandInput,
    /// Only read for binary operations.
    pub operand2: Option<OperandInput>,
}

/// Result of a successful form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    /// A history line to append (possibly carrying a recorded error).
    Record(CalculationRecord),
    /// A plot to hand to the visualization collaborator. Not recorded.
    Plot(RenderRequest),
}

/// Parse, evaluate and format one calculation.
///
/// # Returns
/// * `Calculation::Record` for numeric operations, including division by zero
/// * `Calculation::Plot` for `Operation::Plot`
/// * `Err` for invalid input or a missing second operand; nothing is recorded
pub fn calculate(request: &CalculationRequest) -> Result<Calculation, EvalError> {
    let operation = request.operation;
    let operand1 = parse_operand(1, &request.operand1)?;

    if operation == Operation::Plot {
        return Ok(Calculation::Plot(plot(&[operand1])));
    }

    let operand2 = if operation.is_binary() {
        let input = request
            .operand2
            .as_ref()
            .ok_or(EvalError::MissingOperand { operation })?;
        Some(parse_operand(2, input)?)
    } else {
        None
    };

    let outcome = match evaluate(operation, operand1, operand2) {
        Ok(value) => Outcome::Value(value),
        Err(e) if e.is_recorded() => Outcome::Error(e),
        Err(e) => return Err(e),
    };
    Ok(Calculation::Record(CalculationRecord::new(
        operation, operand1, operand2, outcome,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(op: Operation, a: (&str, &str), b: Option<(&str, &str)>) -> CalculationRequest {
        CalculationRequest {
            operation: op,
            operand1: OperandInput::new(a.0, a.1),
            operand2: b.map(|(r, i)| OperandInput::new(r, i)),
        }
    }

    fn record(calc: Calculation) -> CalculationRecord {
        match calc {
            Calculation::Record(r) => r,
            Calculation::Plot(_) => panic!("expected a record"),
        }
    }

    #[test]
    fn add_scenario_display() {
        let calc = calculate(&request(Operation::Add, ("3", "4"), Some(("1", "2")))).unwrap();
        assert_eq!(record(calc).display(), "(3+4j) + (1+2j) = (4+6j)");
    }

    #[test]
    fn divide_by_zero_is_recorded() {
        let calc = calculate(&request(Operation::Divide, ("0", "0"), Some(("0", "0")))).unwrap();
        let r = record(calc);
        assert!(r.is_error());
        assert_eq!(
            r.display(),
            "(0+0j) / (0+0j) = Error: Division by zero is not allowed."
        );
    }

    #[test]
    fn sqrt_scenario() {
        let calc = calculate(&request(Operation::SquareRoot, ("-1", "0"), None)).unwrap();
        let r = record(calc);
        assert_eq!(r.display(), "(-1+0j) sqrt = (0+1j)");
    }

    #[test]
    fn plot_scenario() {
        let calc = calculate(&request(Operation::Plot, ("1", "1"), None)).unwrap();
        match calc {
            Calculation::Plot(req) => {
                assert_eq!(req.points.len(), 1);
                assert_eq!(req.points[0].value, ComplexValue::new(1.0, 1.0));
                assert_eq!(req.points[0].color, PaletteColor::Red);
            }
            Calculation::Record(_) => panic!("plot must not produce a record"),
        }
    }

    #[test]
    fn invalid_first_operand_aborts() {
        let err = calculate(&request(Operation::Add, ("x", "4"), Some(("1", "2")))).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput { .. }));
    }

    #[test]
    fn invalid_second_operand_aborts_binary() {
        let err = calculate(&request(Operation::Multiply, ("1", "4"), Some(("1", "")))).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput { ref field, .. } if field == "imaginary part 2"));
    }

    #[test]
    fn second_operand_text_is_ignored_for_unary() {
        let calc = calculate(&request(Operation::Conjugate, ("1", "2"), Some(("junk", "")))).unwrap();
        assert_eq!(record(calc).display(), "(1+2j) conj = (1-2j)");
    }

    #[test]
    fn binary_without_second_operand_fails() {
        let err = calculate(&request(Operation::Subtract, ("1", "2"), None)).unwrap_err();
        assert!(matches!(err, EvalError::MissingOperand { .. }));
    }

    #[test]
    fn argument_renders_real() {
        let calc = calculate(&request(Operation::Argument, ("0", "1"), None)).unwrap();
        assert_eq!(record(calc).display(), "(0+1j) arg = 1.5707963267948966");
    }
}
