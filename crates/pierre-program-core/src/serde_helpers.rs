// ABOUTME: Lenient serde decoders for Django REST framework response quirks
// ABOUTME: Decimal fields arrive as strings or numbers; both decode into f64
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string, or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<f64>()
            .map(Some)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(Self)
    }
}

/// Decode an optional decimal that may be a JSON number or numeric string.
///
/// # Errors
///
/// Returns an error if the value is a non-numeric string or another JSON type.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DecimalVisitor)
}

/// Decode a required decimal, treating null or blank as zero.
///
/// # Errors
///
/// Returns an error if the value is a non-numeric string or another JSON type.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_decimal(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Decimals {
        #[serde(default, deserialize_with = "super::optional_decimal")]
        weight: Option<f64>,
        #[serde(default, deserialize_with = "super::decimal_or_zero")]
        price: f64,
    }

    #[test]
    fn test_decimal_strings_and_numbers() {
        let p: Decimals = serde_json::from_str(r#"{"weight": "102.5000", "price": 19}"#).unwrap();
        assert!(p.weight.is_some_and(|w| (w - 102.5).abs() < f64::EPSILON));
        assert!((p.price - 19.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_and_missing_decimals() {
        let p: Decimals = serde_json::from_str(r#"{"weight": null, "price": null}"#).unwrap();
        assert_eq!(p.weight, None);
        assert!(p.price.abs() < f64::EPSILON);

        let p: Decimals = serde_json::from_str("{}").unwrap();
        assert_eq!(p.weight, None);
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        assert!(serde_json::from_str::<Decimals>(r#"{"weight": "heavy"}"#).is_err());
    }
}
