//! Serde helpers for the number encodings found in fixtures and genesis files.
use core::num::ParseIntError;
use serde::{de, Deserialize};

/// A `u64` given either as a JSON number or as a decimal or `0x` prefixed hex string.
#[derive(Deserialize)]
#[serde(untagged)]
enum HexOrDecimal {
    Number(u64),
    String(String),
}

impl HexOrDecimal {
    fn into_u64<E: de::Error>(self) -> Result<u64, E> {
        match self {
            Self::Number(n) => Ok(n),
            Self::String(s) => parse_hex_or_decimal(&s).map_err(E::custom),
        }
    }
}

/// Parses `0x` prefixed hex, or decimal otherwise.
pub fn parse_hex_or_decimal(s: &str) -> Result<u64, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(stripped) => u64::from_str_radix(stripped, 16),
        None => s.parse(),
    }
}

/// Deserializes a number or numeric string into `u64`.
pub fn deserialize_hex_or_decimal<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: de::Deserializer<'de>,
{
    HexOrDecimal::deserialize(deserializer)?.into_u64()
}

/// Like [`deserialize_hex_or_decimal`], with `null` and missing values mapped to `None`.
pub fn deserialize_opt_hex_or_decimal<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: de::Deserializer<'de>,
{
    Option::<HexOrDecimal>::deserialize(deserializer)?
        .map(HexOrDecimal::into_u64)
        .transpose()
}
