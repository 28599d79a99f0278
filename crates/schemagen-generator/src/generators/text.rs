//! Lorem-ipsum style text.

use super::pick;
use super::reference::LOREM_WORDS;
use rand::Rng;

pub const MIN_WORDS: usize = 3;
pub const MAX_WORDS: usize = 10;

/// Between [`MIN_WORDS`] and [`MAX_WORDS`] words, drawn with replacement.
pub fn generate_text<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.random_range(MIN_WORDS..=MAX_WORDS);
    (0..count)
        .map(|_| pick(rng, LOREM_WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_count_and_vocabulary() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let text = generate_text(&mut rng);
            let words: Vec<&str> = text.split(' ').collect();
            assert!((MIN_WORDS..=MAX_WORDS).contains(&words.len()));
            assert!(words.iter().all(|w| LOREM_WORDS.contains(w)));
        }
    }
}
