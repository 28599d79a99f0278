//! Individual value generators for each column type.
//!
//! This module maps a column's [`ColumnType`] and options to the function
//! that synthesizes one value. Generators are stateless; the only per-row
//! input is the [`GenerationContext`].

pub mod address;
pub mod commerce;
pub mod network;
pub mod numeric;
pub mod person;
pub mod reference;
pub mod text;
pub mod timestamp;
pub mod uuid;

use crate::generator::GeneratorError;
use chrono::{DateTime, Utc};
use rand::Rng;
use schemagen_core::{ColumnDefinition, ColumnType, GeneratedValue, NumberOptions};

/// Per-row inputs shared by all generators.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext {
    /// 1-based row ordinal within the current table.
    pub ordinal: u64,
    /// Instant that `timestamp` and `date` values count back from.
    pub reference_time: DateTime<Utc>,
}

impl GenerationContext {
    pub fn new(ordinal: u64, reference_time: DateTime<Utc>) -> Self {
        Self {
            ordinal,
            reference_time,
        }
    }
}

/// Pick one entry of a non-empty reference list.
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generate one value for `column`.
pub fn generate_value<R: Rng + ?Sized>(
    column: &ColumnDefinition,
    rng: &mut R,
    ctx: &GenerationContext,
) -> Result<GeneratedValue, GeneratorError> {
    let value = match column.column_type() {
        ColumnType::SequentialNumber => GeneratedValue::Int(ctx.ordinal as i64),

        ColumnType::Boolean => GeneratedValue::Bool(rng.random_bool(0.5)),

        ColumnType::Number => {
            let default_options = NumberOptions::default();
            let options = column.number_options().unwrap_or(&default_options);
            numeric::generate_number(rng, options)
        }

        ColumnType::DollarAmount => commerce::generate_dollar_amount(rng),

        ColumnType::Uuid => GeneratedValue::String(uuid::generate_uuid_v4(rng).to_string()),

        ColumnType::FirstName => GeneratedValue::from(person::generate_first_name(rng)),

        ColumnType::LastName => GeneratedValue::from(person::generate_last_name(rng)),

        ColumnType::FullName => GeneratedValue::String(person::generate_full_name(rng)),

        ColumnType::Email => GeneratedValue::String(person::generate_email(rng)),

        ColumnType::PhoneNumber => GeneratedValue::String(person::generate_phone_number(rng)),

        ColumnType::Set => {
            let members = column
                .set_options()
                .map(|set| set.members.as_slice())
                .unwrap_or_default();
            if members.is_empty() {
                return Err(GeneratorError::EmptySet {
                    column: column.name().to_string(),
                });
            }
            GeneratedValue::String(members[rng.random_range(0..members.len())].clone())
        }

        ColumnType::Zipcode => GeneratedValue::String(address::generate_zipcode(rng)),

        ColumnType::StreetNumber => GeneratedValue::Int(address::generate_street_number(rng)),

        ColumnType::StreetAddress => GeneratedValue::String(address::generate_street_address(rng)),

        ColumnType::City => GeneratedValue::from(address::generate_city(rng)),

        ColumnType::State => GeneratedValue::from(address::generate_state(rng)),

        ColumnType::CreditCard => GeneratedValue::String(commerce::generate_credit_card(rng)),

        ColumnType::AccountNumber => {
            GeneratedValue::String(commerce::generate_account_number(rng))
        }

        ColumnType::Text => GeneratedValue::String(text::generate_text(rng)),

        ColumnType::ProductName => GeneratedValue::String(commerce::generate_product_name(rng)),

        ColumnType::ProductType => GeneratedValue::from(commerce::generate_product_type(rng)),

        ColumnType::Manufacturer => GeneratedValue::from(commerce::generate_manufacturer(rng)),

        ColumnType::Timestamp => GeneratedValue::String(timestamp::generate_timestamp(
            rng,
            ctx.reference_time,
        )),

        ColumnType::Date => {
            GeneratedValue::String(timestamp::generate_date(rng, ctx.reference_time))
        }

        ColumnType::IpAddress => GeneratedValue::String(network::generate_ip_address(rng)),

        ColumnType::MacAddress => GeneratedValue::String(network::generate_mac_address(rng)),

        ColumnType::Unknown => {
            return Err(GeneratorError::UnknownColumnType {
                column: column.name().to_string(),
            })
        }
    };

    Ok(value)
}
