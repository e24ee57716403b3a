//! Tests for compensated summation accuracy and bookkeeping

#[cfg(test)]
mod tests {
    use crate::math::summation::RealSum;

    // Tests compensation recovers small addends lost by naive summation
    // Verified by removing the compensation term
    #[test]
    fn test_compensation_recovers_lost_addends() {
        let values = [1.0, 1e100, 1.0, -1e100];
        let naive: f64 = values.iter().sum();
        let total: RealSum = values.into_iter().collect();

        assert!(naive.abs() < f64::EPSILON, "naive sum loses both ones");
        assert!((total.sum() - 2.0).abs() < f64::EPSILON);
        assert_eq!(total.count(), 4);
    }

    // Tests mean of an empty accumulator is absent rather than NaN
    #[test]
    fn test_empty_mean() {
        let total = RealSum::new();
        assert_eq!(total.count(), 0);
        assert!(total.mean().is_none());
    }

    // Tests mean over many repeated tenths stays exact to rounding
    #[test]
    fn test_mean_of_repeated_values() {
        let mut total = RealSum::default();
        total.extend(std::iter::repeat_n(0.1, 10_000));

        let mean = total.mean().unwrap_or(f64::NAN);
        assert!((mean - 0.1).abs() < 1e-15, "mean drifted to {mean}");
        assert!((total.sum() - 1000.0).abs() < 1e-9);
    }
}
