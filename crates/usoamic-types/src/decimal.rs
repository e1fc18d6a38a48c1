//! Decimal serialization of `U256`
//!
//! alloy serializes `U256` as a `0x` hex string. Counters, ids and token
//! amounts are printed in decimal everywhere else, so entities use this
//! instead.

use alloy::primitives::U256;
use serde::Serializer;

/// `#[serde(serialize_with = "...")]` target writing `value` in base 10
pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Amount(#[serde(serialize_with = "serialize")] U256);

    #[test]
    fn test_decimal() {
        assert_eq!(serde_json::to_string(&Amount(U256::from(42))).unwrap(), "\"42\"");
        assert_eq!(
            serde_json::to_value(Amount(U256::MAX)).unwrap(),
            serde_json::Value::String(U256::MAX.to_string())
        );
    }
}
