/// Evaluate a polynomial
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// Round to millimeter resolution, ties away from zero
pub(crate) fn round_mm(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::{polyval, round_mm};

    #[test]
    fn polyval_highest_order_first() {
        assert_eq!(polyval(&[2., 3., 4.], 10.), 234.);
        assert_eq!(polyval(&[5.], 123.), 5.);
    }

    #[test]
    fn round_mm_keeps_three_decimals() {
        assert_eq!(round_mm(123.456_78), 123.457);
        assert_eq!(round_mm(-123.456_78), -123.457);
        assert_eq!(round_mm(500_000.0), 500_000.0);
    }
}
