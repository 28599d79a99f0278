//! Column definitions and type-keyed column options.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digit count used by `number` columns that carry no options.
pub const DEFAULT_NUMBER_DIGITS: u32 = 5;

/// Largest integer digit count that fits an `i64` without overflow.
pub const MAX_INTEGER_DIGITS: u32 = 18;

/// Largest decimal digit count that an `f64` represents exactly.
pub const MAX_DECIMAL_DIGITS: u32 = 15;

/// Semantic kind of a generated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    SequentialNumber,
    Boolean,
    Number,
    Uuid,
    FirstName,
    LastName,
    FullName,
    Set,
    Zipcode,
    DollarAmount,
    StreetNumber,
    StreetAddress,
    City,
    State,
    CreditCard,
    AccountNumber,
    Email,
    PhoneNumber,
    Text,
    ProductName,
    ProductType,
    Manufacturer,
    Timestamp,
    Date,
    IpAddress,
    MacAddress,
    /// Any type string this version does not recognize.
    ///
    /// Kept so that validation can name the offending column instead of
    /// failing the whole document at parse time.
    #[serde(other)]
    Unknown,
}

impl ColumnType {
    /// Every generatable type, in declaration order.
    pub const ALL: [ColumnType; 26] = [
        ColumnType::SequentialNumber,
        ColumnType::Boolean,
        ColumnType::Number,
        ColumnType::Uuid,
        ColumnType::FirstName,
        ColumnType::LastName,
        ColumnType::FullName,
        ColumnType::Set,
        ColumnType::Zipcode,
        ColumnType::DollarAmount,
        ColumnType::StreetNumber,
        ColumnType::StreetAddress,
        ColumnType::City,
        ColumnType::State,
        ColumnType::CreditCard,
        ColumnType::AccountNumber,
        ColumnType::Email,
        ColumnType::PhoneNumber,
        ColumnType::Text,
        ColumnType::ProductName,
        ColumnType::ProductType,
        ColumnType::Manufacturer,
        ColumnType::Timestamp,
        ColumnType::Date,
        ColumnType::IpAddress,
        ColumnType::MacAddress,
    ];

    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::SequentialNumber => "sequentialNumber",
            ColumnType::Boolean => "boolean",
            ColumnType::Number => "number",
            ColumnType::Uuid => "uuid",
            ColumnType::FirstName => "firstName",
            ColumnType::LastName => "lastName",
            ColumnType::FullName => "fullName",
            ColumnType::Set => "set",
            ColumnType::Zipcode => "zipcode",
            ColumnType::DollarAmount => "dollarAmount",
            ColumnType::StreetNumber => "streetNumber",
            ColumnType::StreetAddress => "streetAddress",
            ColumnType::City => "city",
            ColumnType::State => "state",
            ColumnType::CreditCard => "creditCard",
            ColumnType::AccountNumber => "accountNumber",
            ColumnType::Email => "email",
            ColumnType::PhoneNumber => "phoneNumber",
            ColumnType::Text => "text",
            ColumnType::ProductName => "productName",
            ColumnType::ProductType => "productType",
            ColumnType::Manufacturer => "manufacturer",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Date => "date",
            ColumnType::IpAddress => "ipAddress",
            ColumnType::MacAddress => "macAddress",
            ColumnType::Unknown => "unknown",
        }
    }

    /// Options a column of this type starts with when none are supplied.
    pub fn default_options(&self) -> ColumnOptions {
        match self {
            ColumnType::Number => ColumnOptions::Number(NumberOptions::default()),
            ColumnType::Set => ColumnOptions::Set(SetOptions::default()),
            _ => ColumnOptions::None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of a `number` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOptions {
    #[serde(default)]
    pub is_decimal: bool,

    /// Total digit count. For decimals this includes the fractional digits.
    #[serde(default = "default_digits")]
    pub digits: u32,

    /// Fractional digit count, only read when `is_decimal` is set.
    #[serde(default)]
    pub decimal_places: u32,
}

fn default_digits() -> u32 {
    DEFAULT_NUMBER_DIGITS
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            is_decimal: false,
            digits: DEFAULT_NUMBER_DIGITS,
            decimal_places: 0,
        }
    }
}

impl NumberOptions {
    /// Integer options with the given digit count.
    pub fn integer(digits: u32) -> Self {
        Self {
            is_decimal: false,
            digits,
            decimal_places: 0,
        }
    }

    /// Decimal options with the given total and fractional digit counts.
    pub fn decimal(digits: u32, decimal_places: u32) -> Self {
        Self {
            is_decimal: true,
            digits,
            decimal_places,
        }
    }

    /// Fractional digit count that generation honors.
    pub fn scale(&self) -> u32 {
        if self.is_decimal {
            self.decimal_places
        } else {
            0
        }
    }

    /// Check that the digit counts of `table.column` are representable.
    pub fn check(&self, table: &str, column: &str) -> Result<(), SchemaError> {
        let max = if self.is_decimal {
            MAX_DECIMAL_DIGITS
        } else {
            MAX_INTEGER_DIGITS
        };
        let invalid = |reason: String| SchemaError::InvalidNumberOptions {
            table: table.to_string(),
            column: column.to_string(),
            reason,
        };
        if self.digits == 0 || self.digits > max {
            return Err(invalid(format!(
                "digits must be between 1 and {max}, got {}",
                self.digits
            )));
        }
        if self.scale() > self.digits {
            return Err(invalid(format!(
                "decimalPlaces ({}) exceeds digits ({})",
                self.decimal_places, self.digits
            )));
        }
        Ok(())
    }
}

/// Options of a `set` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOptions {
    #[serde(default)]
    pub members: Vec<String>,
}

impl SetOptions {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Type-specific options, keyed by the owning column's [`ColumnType`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnOptions {
    #[default]
    None,
    Number(NumberOptions),
    Set(SetOptions),
}

impl ColumnOptions {
    /// Read a loose `options` object as the shape `column_type` expects.
    ///
    /// Types that take no options ignore whatever was supplied.
    pub fn parse(
        column: &str,
        column_type: ColumnType,
        raw: Option<serde_json::Value>,
    ) -> Result<Self, SchemaError> {
        let raw = match raw {
            Some(serde_json::Value::Null) | None => return Ok(column_type.default_options()),
            Some(raw) => raw,
        };

        let invalid = |e: serde_json::Error| SchemaError::InvalidOptions {
            column: column.to_string(),
            reason: e.to_string(),
        };

        match column_type {
            ColumnType::Number => Ok(ColumnOptions::Number(
                serde_json::from_value(raw).map_err(invalid)?,
            )),
            ColumnType::Set => Ok(ColumnOptions::Set(
                serde_json::from_value(raw).map_err(invalid)?,
            )),
            _ => Ok(ColumnOptions::None),
        }
    }

    fn fits(&self, column_type: ColumnType) -> bool {
        matches!(
            (self, column_type),
            (ColumnOptions::None, _)
                | (ColumnOptions::Number(_), ColumnType::Number)
                | (ColumnOptions::Set(_), ColumnType::Set)
        )
    }

    fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            ColumnOptions::None => None,
            ColumnOptions::Number(options) => serde_json::to_value(options).ok(),
            ColumnOptions::Set(options) => serde_json::to_value(options).ok(),
        }
    }
}

/// Wire shape of a column, with options still untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawColumnDefinition {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(rename = "type")]
    column_type: ColumnType,
    #[serde(default)]
    nullable: bool,
    #[serde(default)]
    primary_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<serde_json::Value>,
}

/// One column of a table.
///
/// `primary_key` and `nullable` are mutually exclusive: setting one clears
/// the other, and a document that sets both keeps the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColumnDefinition", into = "RawColumnDefinition")]
pub struct ColumnDefinition {
    id: String,
    name: String,
    column_type: ColumnType,
    nullable: bool,
    primary_key: bool,
    options: ColumnOptions,
}

impl ColumnDefinition {
    /// Create a non-nullable column with the type's default options.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            column_type,
            nullable: false,
            primary_key: false,
            options: column_type.default_options(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach options, rejecting a shape that does not belong to this type.
    pub fn with_options(mut self, options: ColumnOptions) -> Result<Self, SchemaError> {
        if !options.fits(self.column_type) {
            return Err(SchemaError::OptionsMismatch {
                column: self.name,
                column_type: self.column_type,
            });
        }
        self.options = match options {
            ColumnOptions::None => self.column_type.default_options(),
            options => options,
        };
        Ok(self)
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.set_nullable(nullable);
        self
    }

    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.set_primary_key(primary_key);
        self
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
        if nullable {
            self.primary_key = false;
        }
    }

    pub fn set_primary_key(&mut self, primary_key: bool) {
        self.primary_key = primary_key;
        if primary_key {
            self.nullable = false;
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Whether generation may emit null for this column.
    pub fn is_nullable(&self) -> bool {
        self.nullable && !self.primary_key
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn options(&self) -> &ColumnOptions {
        &self.options
    }

    /// Number options, if this is a `number` column.
    pub fn number_options(&self) -> Option<&NumberOptions> {
        match &self.options {
            ColumnOptions::Number(options) => Some(options),
            _ => None,
        }
    }

    /// Set options, if this is a `set` column.
    pub fn set_options(&self) -> Option<&SetOptions> {
        match &self.options {
            ColumnOptions::Set(options) => Some(options),
            _ => None,
        }
    }

    /// Check the column in the context of `table`.
    pub fn validate(&self, table: &str) -> Result<(), SchemaError> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyColumnName {
                table: table.to_string(),
            });
        }
        match (&self.column_type, &self.options) {
            (ColumnType::Unknown, _) => Err(SchemaError::UnknownColumnType {
                table: table.to_string(),
                column: self.name.clone(),
            }),
            (ColumnType::Set, ColumnOptions::Set(set)) if set.members.is_empty() => {
                Err(SchemaError::EmptySetMembers {
                    table: table.to_string(),
                    column: self.name.clone(),
                })
            }
            (ColumnType::Number, ColumnOptions::Number(number)) => number.check(table, &self.name),
            _ => Ok(()),
        }
    }
}

impl TryFrom<RawColumnDefinition> for ColumnDefinition {
    type Error = SchemaError;

    fn try_from(raw: RawColumnDefinition) -> Result<Self, Self::Error> {
        let options = ColumnOptions::parse(&raw.name, raw.column_type, raw.options)?;
        let mut column = ColumnDefinition {
            id: raw.id,
            name: raw.name,
            column_type: raw.column_type,
            nullable: false,
            primary_key: false,
            options,
        };
        column.set_nullable(raw.nullable);
        column.set_primary_key(raw.primary_key);
        Ok(column)
    }
}

impl From<ColumnDefinition> for RawColumnDefinition {
    fn from(column: ColumnDefinition) -> Self {
        RawColumnDefinition {
            options: column.options.to_json(),
            id: column.id,
            name: column.name,
            column_type: column.column_type,
            nullable: column.nullable,
            primary_key: column.primary_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ColumnDefinition, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_number_options_from_json() {
        let column = parse(
            r#"{"id":"c1","name":"price","type":"number","nullable":false,
                "options":{"isDecimal":true,"digits":6,"decimalPlaces":2}}"#,
        )
        .unwrap();

        assert_eq!(column.column_type(), ColumnType::Number);
        assert_eq!(column.number_options(), Some(&NumberOptions::decimal(6, 2)));
    }

    #[test]
    fn test_number_without_options_uses_default() {
        let column = parse(r#"{"name":"qty","type":"number"}"#).unwrap();
        assert_eq!(column.number_options(), Some(&NumberOptions::integer(5)));
    }

    #[test]
    fn test_options_ignored_for_plain_types() {
        let column =
            parse(r#"{"name":"city","type":"city","options":{"members":["x"]}}"#).unwrap();
        assert_eq!(column.options(), &ColumnOptions::None);
    }

    #[test]
    fn test_malformed_options_rejected() {
        let err = parse(r#"{"name":"tags","type":"set","options":{"members":"a,b"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("malformed options"));
    }

    #[test]
    fn test_unknown_type_survives_parsing() {
        let column = parse(r#"{"name":"blob","type":"hologram"}"#).unwrap();
        assert_eq!(column.column_type(), ColumnType::Unknown);
        assert!(matches!(
            column.validate("t"),
            Err(SchemaError::UnknownColumnType { .. })
        ));
    }

    #[test]
    fn test_primary_key_wins_over_nullable() {
        let column =
            parse(r#"{"name":"id","type":"uuid","nullable":true,"primaryKey":true}"#).unwrap();
        assert!(column.is_primary_key());
        assert!(!column.is_nullable());
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let column = ColumnDefinition::new("id", ColumnType::Uuid)
            .primary_key(true)
            .nullable(true);
        assert!(column.is_nullable());
        assert!(!column.is_primary_key());

        let column = column.primary_key(true);
        assert!(!column.is_nullable());
    }

    #[test]
    fn test_options_mismatch() {
        let result = ColumnDefinition::new("name", ColumnType::FirstName)
            .with_options(ColumnOptions::Set(SetOptions::new(["a"])));
        assert!(matches!(result, Err(SchemaError::OptionsMismatch { .. })));
    }

    #[test]
    fn test_empty_set_rejected() {
        let column = ColumnDefinition::new("tags", ColumnType::Set);
        assert!(matches!(
            column.validate("posts"),
            Err(SchemaError::EmptySetMembers { .. })
        ));
    }

    #[test]
    fn test_number_digit_bounds() {
        assert!(NumberOptions::integer(18).check("t", "n").is_ok());
        assert!(NumberOptions::integer(19).check("t", "n").is_err());
        assert!(NumberOptions::integer(0).check("t", "n").is_err());
        assert!(NumberOptions::decimal(15, 2).check("t", "n").is_ok());
        assert!(NumberOptions::decimal(16, 2).check("t", "n").is_err());
        assert!(NumberOptions::decimal(4, 5).check("t", "n").is_err());

        // Places only matter for decimals.
        let mut integer = NumberOptions::integer(3);
        integer.decimal_places = 7;
        assert_eq!(integer.scale(), 0);
        assert!(integer.check("t", "n").is_ok());

        match NumberOptions::integer(19).check("prices", "amount") {
            Err(SchemaError::InvalidNumberOptions {
                table,
                column,
                reason,
            }) => {
                assert_eq!((table.as_str(), column.as_str()), ("prices", "amount"));
                assert!(reason.contains("19"), "{reason}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_wire_names() {
        for column_type in ColumnType::ALL {
            let json = serde_json::to_string(&column_type).unwrap();
            assert_eq!(json, format!("\"{}\"", column_type.as_str()));
        }
    }

    #[test]
    fn test_serialize_keeps_options() {
        let column = ColumnDefinition::new("tier", ColumnType::Set)
            .with_options(ColumnOptions::Set(SetOptions::new(["A", "B"])))
            .unwrap();
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["type"], "set");
        assert_eq!(json["options"]["members"][1], "B");

        let back: ColumnDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, column);
    }
}
