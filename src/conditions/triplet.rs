/// Tolerance on `a² + b² - c²` for a triplet to count as Pythagorean.
pub const TRIPLET_EPSILON: f64 = 1e-10;

/// Check whether `(a, b, c)` is a Pythagorean triplet with `c` as the hypotenuse.
/// The order matters: `c` is always the term subtracted.
pub fn is_pythagorean_triplet(a: f64, b: f64, c: f64) -> bool {
    (a.powi(2) + b.powi(2) - c.powi(2)).abs() < TRIPLET_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_triplets() {
        assert!(is_pythagorean_triplet(3.0, 4.0, 5.0));
        assert!(is_pythagorean_triplet(4.0, 3.0, 5.0));
        assert!(is_pythagorean_triplet(5.0, 12.0, 13.0));
        assert!(is_pythagorean_triplet(8.0, 15.0, 17.0));
    }

    #[test]
    fn non_triplets() {
        assert!(!is_pythagorean_triplet(3.0, 4.0, 6.0));
        assert!(!is_pythagorean_triplet(1.0, 1.0, 1.0));
    }

    #[test]
    fn hypotenuse_must_be_last() {
        assert!(!is_pythagorean_triplet(5.0, 4.0, 3.0));
        assert!(!is_pythagorean_triplet(3.0, 5.0, 4.0));
    }

    #[test]
    fn tolerates_float_rounding() {
        assert!(is_pythagorean_triplet(0.3, 0.4, 0.5));
        assert!(is_pythagorean_triplet(1.0, 1.0, 2.0_f64.sqrt()));
        assert!(!is_pythagorean_triplet(1.0, 1.0, 1.4142));
    }

    #[test]
    fn zeros_and_signs() {
        assert!(is_pythagorean_triplet(0.0, 0.0, 0.0));
        assert!(is_pythagorean_triplet(-3.0, 4.0, -5.0));
    }
}
