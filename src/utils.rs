/// Number of solami (lamport-equivalent base units) per SOL.
pub const SOLAMI_PER_SOL: f64 = 1_000_000_000.0;

/// Convert a decimal SOL amount to integer solami.
///
/// The round trip through [`from_solami`] is lossy only within f64
/// precision; no fixed-point guarantee is made.
pub fn to_solami(sol: f64) -> u64 {
    (sol * SOLAMI_PER_SOL).round() as u64
}

/// Convert an integer solami amount to decimal SOL.
pub fn from_solami(solami: u64) -> f64 {
    solami as f64 / SOLAMI_PER_SOL
}

/// Round to two decimal places, for percentage/TVL presentation.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- to_solami ----

    #[test]
    fn test_to_solami_basic() {
        assert_eq!(to_solami(1.5), 1_500_000_000);
        assert_eq!(to_solami(0.000000001), 1);
        assert_eq!(to_solami(42.0), 42_000_000_000);
    }

    #[test]
    fn test_to_solami_zero() {
        assert_eq!(to_solami(0.0), 0);
    }

    #[test]
    fn test_to_solami_rounds() {
        // 0.1234567891 SOL is 123456789.1 solami, rounds to 123456789
        assert_eq!(to_solami(0.1234567891), 123_456_789);
    }

    // ---- from_solami ----

    #[test]
    fn test_from_solami_basic() {
        assert_eq!(from_solami(1_500_000_000), 1.5);
        assert_eq!(from_solami(5_000_000_000), 5.0);
        assert_eq!(from_solami(0), 0.0);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for a in [0.0, 0.5, 1.5, 3.14159, 1000.25, 123456.789] {
            let back = from_solami(to_solami(a));
            assert!(
                (back - a).abs() < 1e-9,
                "round trip of {a} gave {back}"
            );
        }
    }

    // ---- round2 ----

    #[test]
    fn test_round2() {
        assert_eq!(round2(7.34), 7.34);
        assert_eq!(round2(7.3449), 7.34);
        assert_eq!(round2(7.3561), 7.36);
        assert_eq!(round2(0.0734 * 100.0), 7.34);
    }
}
