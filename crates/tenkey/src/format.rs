//! Result formatting for the display panel.

/// Values closer than this to an integer display as that integer.
const INTEGER_EPSILON: f64 = 1e-10;

/// Number of fractional digits kept for non-integer results.
const MAX_FRACTION_DIGITS: usize = 10;

/// Formats an evaluation result for display.
///
/// Values within `1e-10` of the nearest integer display as that integer;
/// anything else is rounded to ten fractional digits with trailing zeros
/// trimmed, so `1/3` shows as `0.3333333333` rather than raw
/// floating-point noise.
#[must_use]
pub fn format_result(value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() < INTEGER_EPSILON {
        if nearest == 0.0 {
            // avoid displaying a signed zero
            return "0".to_owned();
        }
        return format!("{nearest:.0}");
    }

    let fixed = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_values() {
        assert_eq!(format_result(42.0), "42");
        assert_eq!(format_result(-42.0), "-42");
        assert_eq!(format_result(0.0), "0");
    }

    #[test]
    fn negative_zero_displays_as_zero() {
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(-1e-12), "0");
    }

    #[test]
    fn near_integer_snaps() {
        // 0.1+0.2 style representation error
        assert_eq!(format_result(2.9999999999999996), "3");
        assert_eq!(format_result(3.0000000000000004), "3");
    }

    #[test]
    fn fraction_rounds_to_ten_digits() {
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn representation_noise_is_trimmed() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
    }

    #[test]
    fn trailing_zeros_trimmed() {
        assert_eq!(format_result(1.5), "1.5");
        assert_eq!(format_result(3.14), "3.14");
        assert_eq!(format_result(-0.25), "-0.25");
    }

    #[test]
    fn large_integers() {
        assert_eq!(format_result(1e15), "1000000000000000");
    }
}
