//! Money, card, account and product values.

use super::numeric::generate_decimal;
use super::pick;
use super::reference::{MANUFACTURERS, PRODUCT_ADJECTIVES, PRODUCT_NOUNS, PRODUCT_TYPES};
use rand::Rng;
use schemagen_core::GeneratedValue;

const DOLLAR_DIGITS: u32 = 6;
const DOLLAR_PLACES: u32 = 2;

/// Non-negative amount with two fractional digits, below 10 000.
pub fn generate_dollar_amount<R: Rng + ?Sized>(rng: &mut R) -> GeneratedValue {
    generate_decimal(rng, DOLLAR_DIGITS, DOLLAR_PLACES)
}

/// Card number with a Visa (`4`), Mastercard (`5`) or Amex (`3`) prefix and
/// a valid Luhn check digit.
pub fn generate_credit_card<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (prefix, length) = match rng.random_range(0..3) {
        0 => (4u8, 16),
        1 => (5u8, 16),
        _ => (3u8, 15),
    };

    let mut digits = Vec::with_capacity(length);
    digits.push(prefix);
    while digits.len() < length - 1 {
        digits.push(rng.random_range(0..10));
    }
    digits.push(luhn_check_digit(&digits));

    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Check digit that makes `payload` followed by it pass the Luhn test.
fn luhn_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Whether `number` passes the Luhn checksum.
pub fn is_luhn_valid(number: &str) -> bool {
    let Some(digits) = number
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
    else {
        return false;
    };
    match digits.split_last() {
        Some((&check, payload)) => luhn_check_digit(payload) == check,
        None => false,
    }
}

/// Ten digits, zero-padded.
pub fn generate_account_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:010}", rng.random_range(0..10_000_000_000u64))
}

/// `{adjective} {noun}`.
pub fn generate_product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = pick(rng, PRODUCT_ADJECTIVES);
    let noun = pick(rng, PRODUCT_NOUNS);
    format!("{adjective} {noun}")
}

pub fn generate_product_type<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, PRODUCT_TYPES)
}

pub fn generate_manufacturer<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, MANUFACTURERS)
}
