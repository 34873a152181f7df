//! The small functions the steps call.

use crate::error::RuntimeError;
use crate::Value;

/// Add two integers.
pub fn suma(a: i64, b: i64) -> i64 {
    a + b
}

/// Build the doubling closure.
pub fn doble() -> impl Fn(i64) -> i64 {
    |n| n * 2
}

/// True division, always producing a float.
pub fn divide(a: i64, b: i64) -> Result<Value, RuntimeError> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(Value::Float(a as f64 / b as f64))
}

/// Half-open integer range `[start, stop)` advancing by a positive `step`.
pub fn range(start: i64, stop: i64, step: i64) -> Result<Vec<i64>, RuntimeError> {
    if step <= 0 {
        return Err(RuntimeError::invalid_argument(format!(
            "range step must be positive, got {}",
            step
        )));
    }
    let mut values = Vec::new();
    let mut next = Some(start);
    while let Some(i) = next.filter(|i| *i < stop) {
        values.push(i);
        next = i.checked_add(step);
    }
    Ok(values)
}

/// Label for `y` relative to ten.
pub fn classify(y: i64) -> &'static str {
    if y > 10 {
        "Mayor a 10"
    } else if y == 10 {
        "Es igual a 10"
    } else {
        "Menor a 10"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suma() {
        assert_eq!(suma(5, 10), 15);
        assert_eq!(suma(-42, 42), 0);
    }

    #[test]
    fn test_doble() {
        let doble = doble();
        assert_eq!(doble(7), 14);
        assert_eq!(doble(-3), -6);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(15, 2).unwrap(), Value::Float(7.5));
        assert_eq!(divide(15, 0), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn test_range() {
        assert_eq!(range(0, 3, 1).unwrap(), vec![0, 1, 2]);
        assert_eq!(range(1, 5, 1).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(range(1, 5, 2).unwrap(), vec![1, 3]);
        assert!(range(5, 1, 1).unwrap().is_empty());
        assert_eq!(range(i64::MAX - 1, i64::MAX, 2).unwrap(), vec![i64::MAX - 1]);
        assert_eq!(range(i64::MAX - 3, i64::MAX, 2).unwrap().len(), 2);
        assert!(matches!(
            range(0, 3, 0),
            Err(RuntimeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(15), "Mayor a 10");
        assert_eq!(classify(10), "Es igual a 10");
        assert_eq!(classify(9), "Menor a 10");
    }
}
