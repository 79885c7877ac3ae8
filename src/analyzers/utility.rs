/// Computes the arithmetic mean of a slice of values. Returns `None` for
/// empty input; an undefined mean is representable, never zero.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_values() {
        assert_eq!(mean(&[1000.0, 2000.0]), Some(1500.0));
        assert_eq!(mean(&[900.0]), Some(900.0));
    }

    #[test]
    fn test_mean_of_empty_input_is_undefined() {
        assert_eq!(mean(&[]), None);
    }
}
