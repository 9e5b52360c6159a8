//! Complex arithmetic using `num_complex::Complex64`.
//!
//! Every operation works on already-validated `ComplexValue`s; parsing and
//! finiteness checks happen in `parse`. The only handled arithmetic fault is
//! division by an exact zero divisor.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::types::{ComplexValue, EvalError, Operation, Value};

/// Evaluate `operation` on one or two operands.
///
/// Binary operations require `operand2`; unary operations ignore it.
/// `Plot` is not numeric and is rejected here (see `plot::plot`).
pub fn evaluate(
    operation: Operation,
    operand1: ComplexValue,
    operand2: Option<ComplexValue>,
) -> Result<Value, EvalError> {
    let a = operand1.to_complex();
    let value = match operation {
        Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
            let rhs = operand2.ok_or(EvalError::MissingOperand { operation })?;
            let b = rhs.to_complex();
            let result = match operation {
                Operation::Add => a + b,
                Operation::Subtract => a - b,
                Operation::Multiply => a * b,
                _ => {
                    if rhs.is_zero() {
                        tracing::debug!(dividend = %operand1, "division by zero");
                        return Err(EvalError::DivisionByZero);
                    }
                    quotient(a, b)
                }
            };
            Value::Complex(result.into())
        }
        Operation::Conjugate => Value::Complex(a.conj().into()),
        Operation::SquareRoot => Value::Complex(a.sqrt().into()),
        Operation::Argument => Value::Real {
            value: principal_argument(operand1),
        },
        Operation::Plot => return Err(EvalError::NotNumeric { operation }),
    };
    tracing::debug!(op = operation.symbol(), result = %value, "evaluated");
    Ok(value)
}

/// `a / b` by Smith's method: scaled by the larger divisor component, so
/// `norm_sqr()` of a very small or very large divisor is never formed.
fn quotient(a: Complex64, b: Complex64) -> Complex64 {
    if b.re.abs() >= b.im.abs() {
        let r = b.im / b.re;
        let den = b.re + b.im * r;
        Complex64::new((a.re + a.im * r) / den, (a.im - a.re * r) / den)
    } else {
        let r = b.re / b.im;
        let den = b.re * r + b.im;
        Complex64::new((a.re * r + a.im) / den, (a.im * r - a.re) / den)
    }
}

/// `atan2(imag, real)` folded into (-π, π].
///
/// `atan2` returns -π for a negative real axis approached from below
/// (`imag == -0.0`); that point maps to π so the range stays half-open.
pub fn principal_argument(c: ComplexValue) -> f64 {
    let angle = c.to_complex().arg();
    if angle == -PI {
        PI
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn c(re: f64, im: f64) -> ComplexValue {
        ComplexValue::new(re, im)
    }

    fn complex(v: Value) -> ComplexValue {
        v.as_complex().expect("complex result")
    }

    #[test]
    fn add_scenario() {
        let v = evaluate(Operation::Add, c(3.0, 4.0), Some(c(1.0, 2.0))).unwrap();
        assert_eq!(complex(v), c(4.0, 6.0));
    }

    #[test]
    fn subtract_and_multiply() {
        let v = evaluate(Operation::Subtract, c(3.0, 4.0), Some(c(1.0, 2.0))).unwrap();
        assert_eq!(complex(v), c(2.0, 2.0));
        // (3+4i)(1+2i) = 3 + 6i + 4i + 8i^2 = -5 + 10i
        let v = evaluate(Operation::Multiply, c(3.0, 4.0), Some(c(1.0, 2.0))).unwrap();
        assert_eq!(complex(v), c(-5.0, 10.0));
    }

    #[test]
    fn divide_exact() {
        // (-5+10i)/(1+2i) = 3+4i
        let v = evaluate(Operation::Divide, c(-5.0, 10.0), Some(c(1.0, 2.0))).unwrap();
        assert_eq!(complex(v), c(3.0, 4.0));
    }

    #[test]
    fn divide_by_tiny_and_huge_divisors() {
        let v = complex(evaluate(Operation::Divide, c(1.0, 0.0), Some(c(1e-200, 0.0))).unwrap());
        assert!((v.real / 1e200 - 1.0).abs() < 1e-12, "{}", v);
        assert_eq!(v.imag, 0.0);

        let v = complex(evaluate(Operation::Divide, c(1.0, 1.0), Some(c(0.0, 1e200))).unwrap());
        assert!((v.real / 1e-200 - 1.0).abs() < 1e-12, "{}", v);
        assert!((v.imag / -1e-200 - 1.0).abs() < 1e-12, "{}", v);
    }

    #[test]
    fn multiply_then_divide_by_huge_operand() {
        let a = c(1e-100, 1e-100);
        let b = c(1e200, 0.0);
        let product = complex(evaluate(Operation::Multiply, a, Some(b)).unwrap());
        let back = complex(evaluate(Operation::Divide, product, Some(b)).unwrap());
        assert!((back.real / 1e-100 - 1.0).abs() < 1e-12, "{}", back);
        assert!((back.imag / 1e-100 - 1.0).abs() < 1e-12, "{}", back);
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        let err = evaluate(Operation::Divide, c(0.0, 0.0), Some(c(0.0, 0.0))).unwrap_err();
        assert_eq!(err, EvalError::DivisionByZero);
        let err = evaluate(Operation::Divide, c(5.0, -1.0), Some(c(-0.0, 0.0))).unwrap_err();
        assert_eq!(err, EvalError::DivisionByZero);
    }

    #[test]
    fn binary_without_second_operand() {
        let err = evaluate(Operation::Add, c(1.0, 1.0), None).unwrap_err();
        assert_eq!(
            err,
            EvalError::MissingOperand {
                operation: Operation::Add
            }
        );
    }

    #[test]
    fn conjugate_negates_imaginary() {
        let v = evaluate(Operation::Conjugate, c(1.0, 2.0), None).unwrap();
        assert_eq!(complex(v), c(1.0, -2.0));
    }

    #[test]
    fn sqrt_of_negative_one_is_i() {
        let v = complex(evaluate(Operation::SquareRoot, c(-1.0, 0.0), None).unwrap());
        assert_eq!(v.real, 0.0);
        assert_eq!(v.imag, 1.0);
    }

    #[test]
    fn sqrt_is_principal() {
        for z in [c(-4.0, -0.5), c(0.0, -9.0), c(2.0, 3.0), c(-3.0, 4.0)] {
            let r = complex(evaluate(Operation::SquareRoot, z, None).unwrap());
            assert!(r.real >= 0.0, "sqrt({}) = {} has negative real part", z, r);
        }
        let r = complex(evaluate(Operation::SquareRoot, c(-3.0, 4.0), None).unwrap());
        assert!((r.real - 1.0).abs() < 1e-12);
        assert!((r.imag - 2.0).abs() < 1e-12);
    }

    #[test]
    fn argument_is_real() {
        let v = evaluate(Operation::Argument, c(1.0, 1.0), None).unwrap();
        assert!((v.as_real().unwrap() - FRAC_PI_4).abs() < 1e-15);
        let v = evaluate(Operation::Argument, c(0.0, 0.0), None).unwrap();
        assert_eq!(v.as_real(), Some(0.0));
    }

    #[test]
    fn argument_range_is_half_open() {
        assert_eq!(principal_argument(c(-1.0, 0.0)), PI);
        assert_eq!(principal_argument(c(-1.0, -0.0)), PI);
        assert!(principal_argument(c(-1.0, -1e-12)) < 0.0);
    }

    #[test]
    fn plot_is_not_numeric() {
        let err = evaluate(Operation::Plot, c(1.0, 1.0), None).unwrap_err();
        assert!(matches!(err, EvalError::NotNumeric { .. }));
    }

    #[test]
    fn unary_ignores_second_operand() {
        let v = evaluate(Operation::Conjugate, c(1.0, 2.0), Some(c(9.0, 9.0))).unwrap();
        assert_eq!(complex(v), c(1.0, -2.0));
    }
}
