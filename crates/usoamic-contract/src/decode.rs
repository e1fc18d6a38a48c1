//! Positional Tuple Decoding
//!
//! Typed accessors over a decoded output tuple. Each accessor checks the
//! value at a fixed index and fails with `MalformedResponse` when the type
//! does not match, so entity builders never see a partially valid tuple.

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, U256};
use usoamic_error::{bail_malformed, ContractError, ContractResult};
use usoamic_types::Ordinal;

/// Reader over the values returned by one contract call
#[derive(Debug, Clone, Copy)]
pub struct TupleReader<'a> {
    function: &'a str,
    values: &'a [DynSolValue],
}

impl<'a> TupleReader<'a> {
    /// Wrap `values`, requiring exactly `arity` of them
    pub fn new(function: &'a str, values: &'a [DynSolValue], arity: usize) -> ContractResult<Self> {
        if values.len() != arity {
            bail_malformed!("'{}' returned {} values, expected {}", function, values.len(), arity);
        }
        Ok(Self { function, values })
    }

    fn get(&self, index: usize) -> ContractResult<&'a DynSolValue> {
        self.values.get(index).ok_or_else(|| {
            ContractError::malformed_response(format!("'{}' has no value at position {}", self.function, index))
        })
    }

    fn mismatch(&self, index: usize, expected: &str, found: &DynSolValue) -> ContractError {
        ContractError::malformed_response(format!(
            "'{}' position {}: expected {}, found {:?}",
            self.function, index, expected, found
        ))
    }

    pub fn bool(&self, index: usize) -> ContractResult<bool> {
        match self.get(index)? {
            DynSolValue::Bool(value) => Ok(*value),
            other => Err(self.mismatch(index, "bool", other)),
        }
    }

    pub fn uint(&self, index: usize) -> ContractResult<U256> {
        match self.get(index)? {
            DynSolValue::Uint(value, _) => Ok(*value),
            other => Err(self.mismatch(index, "uint", other)),
        }
    }

    pub fn address(&self, index: usize) -> ContractResult<Address> {
        match self.get(index)? {
            DynSolValue::Address(value) => Ok(*value),
            other => Err(self.mismatch(index, "address", other)),
        }
    }

    pub fn string(&self, index: usize) -> ContractResult<String> {
        match self.get(index)? {
            DynSolValue::String(value) => Ok(value.clone()),
            other => Err(self.mismatch(index, "string", other)),
        }
    }

    /// Enumeration ordinal, bounds-checked against the known variants
    pub fn ordinal<E: Ordinal>(&self, index: usize) -> ContractResult<E> {
        E::from_ordinal(self.uint(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usoamic_types::VoteType;

    fn values() -> Vec<DynSolValue> {
        vec![
            DynSolValue::Bool(true),
            DynSolValue::Uint(U256::from(12), 256),
            DynSolValue::Address(Address::repeat_byte(1)),
            DynSolValue::String("hello".into()),
            DynSolValue::Uint(U256::from(1), 8),
        ]
    }

    #[test]
    fn test_typed_reads() {
        let values = values();
        let reader = TupleReader::new("f", &values, 5).unwrap();
        assert!(reader.bool(0).unwrap());
        assert_eq!(reader.uint(1).unwrap(), U256::from(12));
        assert_eq!(reader.address(2).unwrap(), Address::repeat_byte(1));
        assert_eq!(reader.string(3).unwrap(), "hello");
        assert_eq!(reader.ordinal::<VoteType>(4).unwrap(), VoteType::Abstain);
    }

    #[test]
    fn test_arity_mismatch() {
        let values = values();
        assert!(matches!(
            TupleReader::new("f", &values, 6),
            Err(ContractError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let values = values();
        let reader = TupleReader::new("f", &values, 5).unwrap();
        assert!(matches!(reader.string(0), Err(ContractError::MalformedResponse(_))));
        assert!(matches!(reader.bool(1), Err(ContractError::MalformedResponse(_))));
    }

    #[test]
    fn test_ordinal_out_of_range() {
        let values = vec![DynSolValue::Uint(U256::from(99), 8)];
        let reader = TupleReader::new("f", &values, 1).unwrap();
        assert_eq!(
            reader.ordinal::<VoteType>(0),
            Err(ContractError::UnknownEnumVariant { enum_name: "VoteType", ordinal: "99".into() })
        );
    }

    #[test]
    fn test_ordinal_beyond_u64_keeps_wire_value() {
        let wide = U256::from(u64::MAX) + U256::from(2);
        let values = vec![DynSolValue::Uint(wide, 8)];
        let reader = TupleReader::new("f", &values, 1).unwrap();
        assert_eq!(
            reader.ordinal::<VoteType>(0),
            Err(ContractError::UnknownEnumVariant {
                enum_name: "VoteType",
                ordinal: "18446744073709551617".into(),
            })
        );
    }
}
