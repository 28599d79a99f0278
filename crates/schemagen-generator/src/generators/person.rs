//! Person-shaped values: names, email addresses and phone numbers.

use super::pick;
use super::reference::{EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES};
use rand::Rng;

pub fn generate_first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, FIRST_NAMES)
}

pub fn generate_last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LAST_NAMES)
}

/// First and last name, each drawn independently.
pub fn generate_full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = generate_first_name(rng);
    let last = generate_last_name(rng);
    format!("{first} {last}")
}

/// `{first name}{0..1000}@{domain}`, lowercased.
pub fn generate_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = generate_first_name(rng).to_lowercase();
    let suffix = rng.random_range(0..1000);
    let domain = pick(rng, EMAIL_DOMAINS);
    format!("{first}{suffix}@{domain}")
}

/// `NNN-NNN-NNNN` with area and exchange codes in `200..1000`.
pub fn generate_phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area = rng.random_range(200..1000);
    let exchange = rng.random_range(200..1000);
    let line = rng.random_range(0..10_000);
    format!("{area}-{exchange}-{line:04}")
}
