use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn finite(inputs: &[(&str, f64)]) -> CalcResult<()> {
    match inputs.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, _)) => Err(CalcError::invalid_input(format!("{} must be a finite number", name))),
        None => Ok(()),
    }
}

fn positive(inputs: &[(&str, f64)]) -> CalcResult<()> {
    finite(inputs)?;
    match inputs.iter().find(|(_, value)| *value <= 0.0) {
        Some((name, _)) => Err(CalcError::invalid_input(format!("{} must be positive", name))),
        None => Ok(()),
    }
}

fn checked(operation: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow { operation })
    }
}

/// `p * r * t / 100`, with the rate in percent.
pub fn simple_interest(principal: f64, rate: f64, time: f64) -> CalcResult<f64> {
    finite(&[("principal", principal), ("rate", rate), ("time", time)])?;
    checked("simple interest", round2(principal * rate * time / 100.0))
}

/// Interest earned when compounding `frequency` times a year, excluding the principal.
pub fn compound_interest(principal: f64, rate: f64, time: f64, frequency: u32) -> CalcResult<f64> {
    finite(&[("principal", principal), ("rate", rate), ("time", time)])?;
    if frequency == 0 {
        return Err(CalcError::invalid_input("frequency must be at least 1"));
    }
    let n = f64::from(frequency);
    let amount = principal * (1.0 + rate / 100.0 / n).powf(n * time);
    checked("compound interest", round2(amount - principal))
}

pub fn circle_area(radius: f64) -> CalcResult<f64> {
    positive(&[("radius", radius)])?;
    checked("circle area", round2(PI * radius * radius))
}

pub fn rectangle_area(length: f64, width: f64) -> CalcResult<f64> {
    positive(&[("length", length), ("width", width)])?;
    checked("rectangle area", round2(length * width))
}

/// Exact factorial. Anything past `34!` does not fit in a `u128`.
pub fn factorial(number: u32) -> CalcResult<u128> {
    (1..=u128::from(number))
        .try_fold(1u128, |acc, k| acc.checked_mul(k))
        .ok_or(CalcError::Overflow {
            operation: "factorial",
        })
}

pub fn average(numbers: &[f64]) -> CalcResult<f64> {
    if numbers.is_empty() {
        return Err(CalcError::invalid_input("at least one number is required"));
    }
    if numbers.iter().any(|n| !n.is_finite()) {
        return Err(CalcError::invalid_input("numbers must be finite"));
    }
    checked("average", numbers.iter().sum::<f64>() / numbers.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn interest() {
        assert_eq!(simple_interest(1000.0, 5.0, 2.0).unwrap(), 100.0);
        assert_eq!(compound_interest(1000.0, 10.0, 2.0, 1).unwrap(), 210.0);
        assert_eq!(compound_interest(1000.0, 12.0, 1.0, 12).unwrap(), 126.83);
        assert!(matches!(
            compound_interest(1000.0, 5.0, 1.0, 0),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn areas() {
        assert_eq!(circle_area(1.0).unwrap(), 3.14);
        assert_eq!(circle_area(2.5).unwrap(), 19.63);
        assert_eq!(rectangle_area(2.5, 4.0).unwrap(), 10.0);
        assert!(circle_area(0.0).is_err());
        assert!(rectangle_area(3.0, -1.0).is_err());
        assert!(circle_area(f64::NAN).is_err());
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(
            factorial(25).unwrap(),
            15_511_210_043_330_985_984_000_000
        );
        assert!(factorial(34).is_ok());
        assert!(matches!(
            factorial(35),
            Err(CalcError::Overflow {
                operation: "factorial"
            })
        ));
    }

    #[test]
    fn averages() {
        assert_eq!(average(&[5.0, 10.0, 15.0]).unwrap(), 10.0);
        assert_eq!(average(&[1.0, 2.0]).unwrap(), 1.5);
        assert!(average(&[]).is_err());
    }
}
