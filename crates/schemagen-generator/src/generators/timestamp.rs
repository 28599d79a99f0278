//! Timestamp and date value generators.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;

/// Width of the window that generated instants fall into.
pub const WINDOW_SECONDS: i64 = 365 * 24 * 60 * 60;

/// A random instant in the 365 days before `reference`.
pub fn generate_instant<R: Rng + ?Sized>(rng: &mut R, reference: DateTime<Utc>) -> DateTime<Utc> {
    let offset = rng.random_range(0..WINDOW_SECONDS);
    reference - Duration::seconds(offset)
}

/// ISO 8601 UTC timestamp with seconds precision, e.g. `2024-05-01T13:45:10Z`.
pub fn generate_timestamp<R: Rng + ?Sized>(rng: &mut R, reference: DateTime<Utc>) -> String {
    generate_instant(rng, reference).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Calendar date (`YYYY-MM-DD`) with the same distribution as timestamps.
pub fn generate_date<R: Rng + ?Sized>(rng: &mut R, reference: DateTime<Utc>) -> String {
    generate_instant(rng, reference)
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_timestamp_within_past_year() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = reference();

        for _ in 0..1000 {
            let value = generate_timestamp(&mut rng, reference);
            assert!(value.ends_with('Z'), "{value}");
            let parsed = DateTime::parse_from_rfc3339(&value)
                .unwrap()
                .with_timezone(&Utc);
            assert!(parsed <= reference);
            assert!(parsed > reference - Duration::days(365));
        }
    }

    #[test]
    fn test_date_within_past_year() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = reference();
        let earliest = NaiveDate::from_ymd_opt(2023, 6, 16).unwrap();
        let latest = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        for _ in 0..1000 {
            let value = generate_date(&mut rng, reference);
            let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").unwrap();
            assert!(date >= earliest && date <= latest, "{value}");
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_timestamp(&mut rng1, reference()),
            generate_timestamp(&mut rng2, reference())
        );
    }
}
