//! Floating-point functions. Every numeric operand is widened to `f64`.

use joy_value::{EvalResult, Value};

use super::sig::{INTEGER, NUMERIC};
use crate::dictionary::{Handler, Primitive};
use crate::Interpreter;

macro_rules! unary {
    ($name:literal, $help:literal, $op:expr) => {
        Primitive::new(
            $name,
            "F  ->  G",
            $help,
            &[Handler::new(&[NUMERIC], |interp| apply(interp, $op))],
        )
    };
}

pub(super) static PRIMITIVES: &[Primitive] = &[
    unary!("acos", "G is the arc cosine of F.", f64::acos),
    unary!("asin", "G is the arc sine of F.", f64::asin),
    unary!("atan", "G is the arc tangent of F.", f64::atan),
    Primitive::new(
        "atan2",
        "F G  ->  H",
        "H is the arc tangent of F / G.",
        &[Handler::new(&[NUMERIC, NUMERIC], |interp| {
            let g = interp.pop_f64()?;
            let f = interp.pop_f64()?;
            interp.push(Value::Float(f.atan2(g)));
            Ok(())
        })],
    ),
    unary!("ceil", "G is the float ceiling of F.", f64::ceil),
    unary!("cos", "G is the cosine of F.", f64::cos),
    unary!("cosh", "G is the hyperbolic cosine of F.", f64::cosh),
    unary!("exp", "G is e (2.718281828...) raised to the Fth power.", f64::exp),
    unary!("floor", "G is the floor of F.", f64::floor),
    Primitive::new(
        "frexp",
        "F  ->  G I",
        "G is the mantissa and I is the exponent of F.\n\
         Unless F = 0, 0.5 <= abs(G) < 1.0.",
        &[Handler::new(&[NUMERIC], |interp| {
            let (mantissa, exponent) = frexp(interp.pop_f64()?);
            interp.push_all([Value::Float(mantissa), Value::Integer(i64::from(exponent))]);
            Ok(())
        })],
    ),
    Primitive::new(
        "ldexp",
        "F I  ->  G",
        "G is F times 2 to the Ith power.",
        &[Handler::new(&[NUMERIC, INTEGER], |interp| {
            let exponent = interp.pop_integer()?;
            let f = interp.pop_f64()?;
            interp.push(Value::Float(ldexp(f, exponent)));
            Ok(())
        })],
    ),
    unary!("log", "G is the natural logarithm of F.", f64::ln),
    unary!("log10", "G is the common logarithm of F.", f64::log10),
    Primitive::new(
        "modf",
        "F  ->  G H",
        "G is the fractional part and H is the integer part\n\
         (but expressed as a float) of F.",
        &[Handler::new(&[NUMERIC], |interp| {
            let f = interp.pop_f64()?;
            interp.push_all([Value::Float(f.fract()), Value::Float(f.trunc())]);
            Ok(())
        })],
    ),
    Primitive::new(
        "pow",
        "F G  ->  H",
        "H is F raised to the Gth power.",
        &[Handler::new(&[NUMERIC, NUMERIC], |interp| {
            let g = interp.pop_f64()?;
            let f = interp.pop_f64()?;
            interp.push(Value::Float(f.powf(g)));
            Ok(())
        })],
    ),
    unary!("sin", "G is the sine of F.", f64::sin),
    unary!("sinh", "G is the hyperbolic sine of F.", f64::sinh),
    unary!("sqrt", "G is the square root of F.", f64::sqrt),
    unary!("tan", "G is the tangent of F.", f64::tan),
    unary!("tanh", "G is the hyperbolic tangent of F.", f64::tanh),
    Primitive::new(
        "trunc",
        "F  ->  I",
        "I is an integer equal to the float F truncated toward zero.",
        &[Handler::new(&[NUMERIC], |interp| {
            let f = interp.pop()?;
            interp.push(Value::Integer(Value::integer_from(&f)?));
            Ok(())
        })],
    ),
];

fn apply(interp: &mut Interpreter, op: fn(f64) -> f64) -> EvalResult<()> {
    let f = interp.pop_f64()?;
    interp.push(Value::Float(op(f)));
    Ok(())
}

/// Splits `f` into a mantissa in `[0.5, 1)` (by magnitude) and a power of two.
#[expect(
    clippy::cast_possible_truncation,
    reason = "binary exponents of finite f64 values fit in i32"
)]
fn frexp(f: f64) -> (f64, i32) {
    if f == 0.0 || !f.is_finite() {
        return (f, 0);
    }
    let mut exponent = f.abs().log2().floor() as i32 + 1;
    let mut mantissa = f / 2f64.powi(exponent);
    // log2 can land one off near powers of two.
    if mantissa.abs() >= 1.0 {
        mantissa /= 2.0;
        exponent += 1;
    } else if mantissa.abs() < 0.5 {
        mantissa *= 2.0;
        exponent -= 1;
    }
    (mantissa, exponent)
}

fn ldexp(f: f64, exponent: i64) -> f64 {
    let exponent = i32::try_from(exponent).unwrap_or(if exponent < 0 { i32::MIN } else { i32::MAX });
    f * 2f64.powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::{frexp, ldexp};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn frexp_known_values() {
        assert_eq!(frexp(8.0), (0.5, 4));
        assert_eq!(frexp(-3.0), (-0.75, 2));
        assert_eq!(frexp(0.0), (0.0, 0));
        assert_eq!(frexp(1.0), (0.5, 1));
    }

    #[test]
    fn ldexp_scales_by_powers_of_two() {
        assert_eq!(ldexp(0.75, 2), 3.0);
        assert_eq!(ldexp(1.0, -1), 0.5);
        assert_eq!(ldexp(1.0, i64::MIN), 0.0);
    }

    proptest! {
        #[test]
        fn frexp_inverts_ldexp(f in -1.0e300f64..1.0e300) {
            let (mantissa, exponent) = frexp(f);
            prop_assert_eq!(ldexp(mantissa, i64::from(exponent)), f);
            if f != 0.0 {
                prop_assert!((0.5..1.0).contains(&mantissa.abs()));
            }
        }
    }
}
