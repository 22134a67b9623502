use crate::CurveError;

use num_bigint::BigUint;

pub fn parse_decimal(input: &str) -> Result<BigUint, CurveError> {
    let trimmed = input.trim();
    // NOTE parse_bytes accepts '_' separators, which we don't want in
    // configuration values
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CurveError::InvalidEncoding(format!(
            "invalid decimal integer: {:?}",
            input
        )));
    }
    BigUint::parse_bytes(trimmed.as_bytes(), 10)
        .ok_or_else(|| CurveError::InvalidEncoding(format!("invalid decimal integer: {:?}", input)))
}

/// Parses a big-endian hex string, with or without a `0x` prefix.
pub fn parse_hex(input: &str) -> Result<BigUint, CurveError> {
    let stripped = input.trim().trim_start_matches("0x");
    let padded = if stripped.len() % 2 == 1 {
        format!("0{}", stripped)
    } else {
        stripped.to_string()
    };
    let bytes = hex::decode(padded).map_err(|e| CurveError::InvalidEncoding(e.to_string()))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Serde adapter that stores integers as decimal strings.
pub mod decimal {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        super::parse_decimal(&encoded).map_err(de::Error::custom)
    }
}
