//! Key format templates for NoSQL storage keys.
//!
//! Supports placeholders:
//! - `{{ __table__ }}` - the table name
//! - `{{ __uuid__ }}` - a fresh random UUID per row
//! - `{{ __index__ }}` - the 1-based row ordinal
//! - `{{ <column> }}` - the row's value for that column (empty when null)
//!
//! Any placeholder may end in a `zero_pad` filter, e.g.
//! `{{ __index__ | zero_pad(6) }}`, which left-pads numeric values with
//! zeros to the given width (10 when no width is given).
//!
//! Whitespace inside the braces is optional. Tokens that name no column,
//! tokens with an unrecognized filter and an unterminated `{{` are copied
//! into the key unchanged.

use crate::generators::uuid::generate_uuid_v4;
use rand::Rng;
use schemagen_core::{ColumnType, GeneratedRow, GeneratedValue, TableSchema};
use std::fmt::Write;

/// Width used by `zero_pad` without an argument.
pub const DEFAULT_ZERO_PAD_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Table,
    Uuid,
    Index,
    Field(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token {
        source: Source,
        pad: Option<usize>,
        /// Template text of the token, emitted when a field is missing
        raw: String,
    },
}

/// A parsed key format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFormat {
    segments: Vec<Segment>,
}

/// Parse the inside of `{{ ... }}` into a source and an optional pad width.
fn parse_token(inner: &str) -> Option<(Source, Option<usize>)> {
    let (name, filter) = match inner.split_once('|') {
        Some((name, filter)) => (name.trim(), Some(filter.trim())),
        None => (inner.trim(), None),
    };
    if name.is_empty() {
        return None;
    }

    let pad = match filter {
        None => None,
        Some("zero_pad") => Some(DEFAULT_ZERO_PAD_WIDTH),
        Some(filter) => {
            let args = filter.strip_prefix("zero_pad")?.trim();
            let width = args.strip_prefix('(')?.strip_suffix(')')?.trim();
            Some(width.parse().ok()?)
        }
    };

    let source = match name {
        "__table__" => Source::Table,
        "__uuid__" => Source::Uuid,
        "__index__" => Source::Index,
        name => Source::Field(name.to_string()),
    };
    Some((source, pad))
}

fn zero_pad(value: String, width: usize) -> String {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return value;
    }
    format!("{value:0>width$}")
}

impl KeyFormat {
    /// Parse a template. Parsing never fails.
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            let inner = &rest[start + 2..];
            let Some(end) = inner.find("}}") else {
                break;
            };

            literal.push_str(&rest[..start]);
            let raw = &rest[start..start + 2 + end + 2];
            match parse_token(&inner[..end]) {
                Some((source, pad)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Token {
                        source,
                        pad,
                        raw: raw.to_string(),
                    });
                }
                None => literal.push_str(raw),
            }
            rest = &inner[end + 2..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Render the key for one row.
    ///
    /// UUIDs are drawn from `rng`, so keys are reproducible under a seed and
    /// distinct from any `uuid` column of the same row.
    pub fn render<R: Rng + ?Sized>(&self, table: &str, row: &GeneratedRow, rng: &mut R) -> String {
        let mut key = String::new();
        for segment in &self.segments {
            let (source, pad, raw) = match segment {
                Segment::Literal(text) => {
                    key.push_str(text);
                    continue;
                }
                Segment::Token { source, pad, raw } => (source, pad, raw),
            };

            let value = match source {
                Source::Table => table.to_string(),
                Source::Uuid => generate_uuid_v4(rng).to_string(),
                Source::Index => row.index.to_string(),
                Source::Field(name) => match row.get_field(name) {
                    Some(GeneratedValue::Null) => String::new(),
                    Some(value) => value.to_string(),
                    None => {
                        key.push_str(raw);
                        continue;
                    }
                },
            };
            let value = match pad {
                Some(width) => zero_pad(value, *width),
                None => value,
            };
            let _ = write!(key, "{value}");
        }
        key
    }

    /// Whether every rendered key for rows of `table` differs per row.
    ///
    /// Field tokens count when they name a primary-key or sequential column.
    pub fn is_row_unique(&self, table: &TableSchema) -> bool {
        self.segments.iter().any(|segment| match segment {
            Segment::Literal(_) => false,
            Segment::Token { source, .. } => match source {
                Source::Table => false,
                Source::Uuid | Source::Index => true,
                Source::Field(name) => table.get_column(name).is_some_and(|column| {
                    column.is_primary_key()
                        || column.column_type() == ColumnType::SequentialNumber
                }),
            },
        })
    }
}

/// Parse and render `template` in one step.
pub fn render_key<R: Rng + ?Sized>(
    template: &str,
    table: &str,
    row: &GeneratedRow,
    rng: &mut R,
) -> String {
    KeyFormat::parse(template).render(table, row, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use schemagen_core::{ColumnDefinition, DEFAULT_KEY_FORMAT};
    use uuid::Uuid;

    fn row(index: u64) -> GeneratedRow {
        let mut row = GeneratedRow::new(index);
        row.push("id", GeneratedValue::Int(index as i64 * 7));
        row.push("email", GeneratedValue::from("ada@example.com"));
        row.push("nickname", GeneratedValue::Null);
        row
    }

    fn users() -> TableSchema {
        TableSchema::new(
            "users",
            vec![
                ColumnDefinition::new("id", ColumnType::Number).primary_key(true),
                ColumnDefinition::new("email", ColumnType::Email),
            ],
        )
    }

    #[test]
    fn test_default_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let format = KeyFormat::parse(DEFAULT_KEY_FORMAT);

        let first = format.render("users", &row(1), &mut rng);
        let second = format.render("users", &row(2), &mut rng);

        let suffix = first.strip_prefix("users:").unwrap();
        assert!(Uuid::parse_str(suffix).is_ok(), "{first}");
        assert_eq!(suffix.len(), 36);
        assert_ne!(first, second);
    }

    #[test]
    fn test_index_token() {
        let mut rng = StdRng::seed_from_u64(42);
        let key = render_key("{{__table__}}#{{ __index__ }}", "orders", &row(17), &mut rng);
        assert_eq!(key, "orders#17");
    }

    #[test]
    fn test_field_token_uses_row_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let format = KeyFormat::parse("{{ __table__ }}:{{ id }}");

        let first = format.render("users", &row(1), &mut rng);
        let second = format.render("users", &row(2), &mut rng);

        assert_eq!(first, "users:7");
        assert_eq!(second, "users:14");
        assert!(format.is_row_unique(&users()));
        assert!(!KeyFormat::parse("user:{{ email }}").is_row_unique(&users()));
    }

    #[test]
    fn test_null_field_renders_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let key = render_key("u/{{ nickname }}/{{email}}", "users", &row(1), &mut rng);
        assert_eq!(key, "u//ada@example.com");
    }

    #[test]
    fn test_zero_pad_filter() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            render_key("{{ __index__ | zero_pad(6) }}", "t", &row(42), &mut rng),
            "000042"
        );
        assert_eq!(
            render_key("{{ id|zero_pad }}", "t", &row(3), &mut rng),
            "0000000021"
        );
        assert_eq!(
            render_key("{{ id | zero_pad(1) }}", "t", &row(3), &mut rng),
            "21"
        );
        assert_eq!(
            render_key("{{ email | zero_pad(40) }}", "t", &row(1), &mut rng),
            "ada@example.com"
        );
    }

    #[test]
    fn test_unknown_filter_passes_through() {
        let mut rng = StdRng::seed_from_u64(42);
        let key = render_key("{{ id | upper }}:{{ id | zero_pad(x) }}", "t", &row(1), &mut rng);
        assert_eq!(key, "{{ id | upper }}:{{ id | zero_pad(x) }}");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let mut rng = StdRng::seed_from_u64(42);
        let key = render_key("{{ tenant }}/{{ __table__ }}", "users", &row(1), &mut rng);
        assert_eq!(key, "{{ tenant }}/users");
    }

    #[test]
    fn test_unterminated_token_is_literal() {
        let mut rng = StdRng::seed_from_u64(42);
        let key = render_key("{{ __table__ }}:{{ __uuid__", "users", &row(1), &mut rng);
        assert_eq!(key, "users:{{ __uuid__");
    }

    #[test]
    fn test_plain_literal() {
        let mut rng = StdRng::seed_from_u64(42);
        let format = KeyFormat::parse("static-key");
        assert_eq!(format.render("users", &row(1), &mut rng), "static-key");
        assert!(!format.is_row_unique(&users()));
        assert!(KeyFormat::parse(DEFAULT_KEY_FORMAT).is_row_unique(&users()));
    }

    #[test]
    fn test_deterministic_under_seed() {
        let mut rng1 = StdRng::seed_from_u64(9);
        let mut rng2 = StdRng::seed_from_u64(9);
        assert_eq!(
            render_key(DEFAULT_KEY_FORMAT, "t", &row(1), &mut rng1),
            render_key(DEFAULT_KEY_FORMAT, "t", &row(1), &mut rng2)
        );
    }
}
