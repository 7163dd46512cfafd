pub fn equals_epsilon(
    left: f64,
    right: f64,
    relative_epsilon: Option<f64>,
    absolute_epsilon: Option<f64>,
) -> bool {
    let relative_epsilon = relative_epsilon.unwrap_or(0.0);
    let absolute_epsilon = absolute_epsilon.unwrap_or(relative_epsilon);
    let diff = (left - right).abs();
    return diff <= absolute_epsilon || diff <= relative_epsilon * left.abs().max(right.abs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_epsilon_relative_and_absolute() {
        assert!(equals_epsilon(1.0, 1.0 + 1e-9, Some(1e-8), None));
        assert!(!equals_epsilon(1.0, 1.1, Some(1e-8), None));
        assert!(equals_epsilon(6378137.0, 6378137.001, Some(1e-9), None));
        assert!(equals_epsilon(0.0, 1e-12, None, Some(1e-11)));
    }
}
