//! Decimal rounding for values reported over the API.

/// Rounds `value` to `decimals` places after the decimal point.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to(1_234_567.891, 2), 1_234_567.89);
    }

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round_to(3.141_592_65, 4), 3.1416);
    }

    #[test]
    fn zero_places_rounds_to_integer() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.4, 0), -2.0);
    }
}
