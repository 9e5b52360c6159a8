//! Display formatting for operands, results, and history records.
//!
//! Complex values use the conventional engineering notation `(re+imj)`.
//! Each component is written in its shortest round-trip decimal form, so
//! `3.0` renders as `3` and `0.5` as `0.5`. The imaginary sign follows the
//! sign bit, which keeps conjugates of real numbers visible as `(3-0j)`.
//!
//! Magnitudes below `1e-4` or from `1e16` up switch to exponent form with a
//! signed, at least two-digit exponent: `1e+200`, `1.5e-07`.

use crate::types::ComplexValue;

const SMALL: f64 = 1e-4;
const LARGE: f64 = 1e16;

/// Render a complex value as `(re+imj)` / `(re-imj)`.
pub fn format_complex(c: ComplexValue) -> String {
    let sign = if c.imag.is_sign_negative() { '-' } else { '+' };
    format!(
        "({}{}{}j)",
        format_float(c.real, false),
        sign,
        format_float(c.imag.abs(), false)
    )
}

/// Render a plain real result the way a float literal reads.
///
/// Integral values keep one decimal place (`0.0`, `3.0`) so a real result is
/// never mistaken for a complex component.
pub fn format_real(value: f64) -> String {
    format_float(value, true)
}

fn format_float(value: f64, keep_point: bool) -> String {
    let magnitude = value.abs();
    if !value.is_finite() {
        format!("{}", value)
    } else if magnitude != 0.0 && !(SMALL..LARGE).contains(&magnitude) {
        exponent_form(value)
    } else if keep_point && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// `1e200` -> `1e+200`, `1.5e-7` -> `1.5e-07`.
fn exponent_form(value: f64) -> String {
    let raw = format!("{:e}", value);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_components_drop_fraction() {
        assert_eq!(format_complex(ComplexValue::new(3.0, 4.0)), "(3+4j)");
        assert_eq!(format_complex(ComplexValue::new(0.0, 0.0)), "(0+0j)");
    }

    #[test]
    fn negative_imaginary_keeps_sign() {
        assert_eq!(format_complex(ComplexValue::new(1.0, -2.5)), "(1-2.5j)");
        assert_eq!(format_complex(ComplexValue::new(3.0, -0.0)), "(3-0j)");
    }

    #[test]
    fn negative_real_part() {
        assert_eq!(format_complex(ComplexValue::new(-1.25, 0.5)), "(-1.25+0.5j)");
    }

    #[test]
    fn real_results_read_as_floats() {
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(3.0), "3.0");
        assert_eq!(
            format_real(std::f64::consts::FRAC_PI_4),
            "0.7853981633974483"
        );
        assert_eq!(format_real(-std::f64::consts::PI), "-3.141592653589793");
    }

    #[test]
    fn large_and_small_magnitudes_use_exponent_form() {
        assert_eq!(format_complex(ComplexValue::new(1e200, 0.0)), "(1e+200+0j)");
        assert_eq!(
            format_complex(ComplexValue::new(1e-100, -1e-100)),
            "(1e-100-1e-100j)"
        );
        assert_eq!(format_complex(ComplexValue::new(-2.5e16, 1.5e-7)), "(-2.5e+16+1.5e-07j)");
        assert_eq!(format_real(1e16), "1e+16");
        assert_eq!(format_real(-3.25e-5), "-3.25e-05");
    }

    #[test]
    fn exponent_form_boundaries() {
        assert_eq!(format_complex(ComplexValue::new(0.0001, 1e15)), "(0.0001+1000000000000000j)");
        assert_eq!(format_real(0.0001), "0.0001");
        assert_eq!(format_real(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn non_finite_results_render_without_panicking() {
        assert_eq!(format_real(f64::INFINITY), "inf");
        assert_eq!(
            format_complex(ComplexValue::new(f64::INFINITY, 1.0)),
            "(inf+1j)"
        );
    }
}
