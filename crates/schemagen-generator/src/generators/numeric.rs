//! Numeric value generators.

use rand::Rng;
use schemagen_core::{GeneratedValue, NumberOptions, MAX_DECIMAL_DIGITS, MAX_INTEGER_DIGITS};

/// Generate a number honoring the column's digit options.
///
/// Integers are uniform in `[0, 10^digits)`. Decimals have at most `digits`
/// digits in total, `decimal_places` of which are fractional. Digit counts
/// beyond what the target representation holds are clamped.
pub fn generate_number<R: Rng + ?Sized>(rng: &mut R, options: &NumberOptions) -> GeneratedValue {
    if options.is_decimal {
        generate_decimal(rng, options.digits, options.scale())
    } else {
        let digits = options.digits.clamp(1, MAX_INTEGER_DIGITS);
        GeneratedValue::Int(rng.random_range(0..10i64.pow(digits)))
    }
}

/// Generate a non-negative decimal with `digits` total and `places`
/// fractional digits.
pub fn generate_decimal<R: Rng + ?Sized>(rng: &mut R, digits: u32, places: u32) -> GeneratedValue {
    let digits = digits.clamp(1, MAX_DECIMAL_DIGITS);
    let places = places.min(digits);
    // Draw the scaled integer so the fractional part is exact before the
    // single division into f64.
    let scaled = rng.random_range(0..10i64.pow(digits));
    GeneratedValue::Float(scaled as f64 / 10f64.powi(places as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_integer_digit_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = NumberOptions::integer(5);

        for _ in 0..10_000 {
            let value = generate_number(&mut rng, &options).as_i64().unwrap();
            assert!((0..100_000).contains(&value));
        }
    }

    #[test]
    fn test_decimal_precision() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = NumberOptions::decimal(6, 2);

        for _ in 0..10_000 {
            let value = generate_number(&mut rng, &options);
            let GeneratedValue::Float(v) = value else {
                panic!("Expected Float value, got {value:?}");
            };
            let formatted = v.to_string();
            let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
            assert!(fraction.len() <= 2, "{formatted}");
            assert!(whole.len() + fraction.len() <= 6, "{formatted}");
            assert!((0.0..10_000.0).contains(&v));
        }
    }

    #[test]
    fn test_max_integer_digits_do_not_overflow() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = NumberOptions::integer(40);

        for _ in 0..100 {
            let value = generate_number(&mut rng, &options).as_i64().unwrap();
            assert!(value >= 0);
            assert!(value < 10i64.pow(MAX_INTEGER_DIGITS));
        }
    }

    #[test]
    fn test_decimal_without_places_is_whole() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_decimal(&mut rng, 3, 0).as_f64().unwrap();
        assert_eq!(value.fract(), 0.0);
        assert!(value < 1000.0);
    }
}
