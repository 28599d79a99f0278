//! Postal address values.

use super::pick;
use super::reference::{CITIES, STATES, STREET_NAMES};
use rand::Rng;

/// Street number in `100..10000`.
pub fn generate_street_number<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(100..10_000)
}

pub fn generate_street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number = generate_street_number(rng);
    let street = pick(rng, STREET_NAMES);
    format!("{number} {street}")
}

pub fn generate_city<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, CITIES)
}

pub fn generate_state<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, STATES)
}

/// Five digits, zero-padded.
pub fn generate_zipcode<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:05}", rng.random_range(0..100_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_street_number_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!((100..10_000).contains(&generate_street_number(&mut rng)));
        }
    }

    #[test]
    fn test_street_address() {
        let mut rng = StdRng::seed_from_u64(42);
        let address = generate_street_address(&mut rng);
        let (number, street) = address.split_once(' ').unwrap();
        assert!(number.parse::<i64>().is_ok());
        assert!(STREET_NAMES.contains(&street));
    }

    #[test]
    fn test_zipcode_is_five_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let zip = generate_zipcode(&mut rng);
            assert_eq!(zip.len(), 5);
            assert!(zip.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_state_codes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let state = generate_state(&mut rng);
            assert_eq!(state.len(), 2);
            assert!(state.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
