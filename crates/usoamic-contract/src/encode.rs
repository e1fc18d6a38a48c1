//! Call Parameter Encoding
//!
//! Maps domain-level arguments onto their ABI-typed representation. Every
//! check here runs before a request is built, so a malformed argument never
//! reaches the node.

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, U256};
use usoamic_error::{ensure_argument, ContractError, ContractResult};
use usoamic_types::Ordinal;

/// Number of hex characters in an account address
const ADDRESS_HEX_LEN: usize = 40;

//-----------------------------------------------------------------------------
// Parsing
//-----------------------------------------------------------------------------

/// Parse an account address: 40 hex characters, optionally `0x`-prefixed
pub fn parse_address(value: &str) -> ContractResult<Address> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    ensure_argument!(
        digits.len() == ADDRESS_HEX_LEN,
        "address '{}' must have {} hex characters, got {}",
        value,
        ADDRESS_HEX_LEN,
        digits.len()
    );

    let bytes = hex::decode(digits)
        .map_err(|e| ContractError::invalid_argument(format!("address '{}' is not hex: {}", value, e)))?;
    Ok(Address::from_slice(&bytes))
}

/// Parse a non-negative decimal integer that fits in 256 bits
pub fn parse_uint256(value: &str) -> ContractResult<U256> {
    let trimmed = value.trim();
    ensure_argument!(!trimmed.is_empty(), "expected an unsigned integer, got an empty value");
    ensure_argument!(
        trimmed.bytes().all(|b| b.is_ascii_digit()),
        "'{}' is not a non-negative decimal integer",
        value
    );
    U256::from_str_radix(trimmed, 10)
        .map_err(|e| ContractError::invalid_argument(format!("'{}' does not fit in uint256: {}", value, e)))
}

//-----------------------------------------------------------------------------
// ABI Values
//-----------------------------------------------------------------------------

/// `address` parameter from its textual form
pub fn address(value: &str) -> ContractResult<DynSolValue> {
    parse_address(value).map(DynSolValue::Address)
}

/// `uint256` parameter
pub fn uint256(value: U256) -> DynSolValue {
    DynSolValue::Uint(value, 256)
}

/// `uint8` parameter carrying an enumeration ordinal
pub fn ordinal<E: Ordinal>(variant: E) -> DynSolValue {
    DynSolValue::Uint(U256::from(variant.ordinal()), 8)
}

/// `string` parameter
pub fn string(value: &str) -> DynSolValue {
    DynSolValue::String(value.to_string())
}
