//! Contract Function Descriptors
//!
//! A [`ContractFunction`] is a function name, its ordered input values and
//! its ordered output types. Outputs are positional: the Nth declared type
//! is the Nth returned value, there are no named fields on the wire.

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{keccak256, Bytes, Selector};
use tracing::{debug, warn};
use usoamic_error::{bail_malformed, ContractError, ContractResult};

/// 4-byte selector of a canonical signature such as `getIdea(uint256)`
pub fn selector_of(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    Selector::from_slice(&hash[..4])
}

/// A single contract invocation: name, inputs and expected outputs
#[derive(Debug, Clone, PartialEq)]
pub struct ContractFunction {
    name: String,
    inputs: Vec<DynSolValue>,
    outputs: Vec<DynSolType>,
}

impl ContractFunction {
    /// Create a function descriptor.
    ///
    /// An empty name is accepted: the selector is then derived from the bare
    /// parameter list `(types...)`. Some read accessors rely on this, so it is
    /// preserved rather than inferred, but it is logged for review.
    pub fn new(name: impl Into<String>, inputs: Vec<DynSolValue>, outputs: Vec<DynSolType>) -> Self {
        let name = name.into();
        if name.is_empty() {
            warn!(
                "empty function name, selector derived from parameter types only ({} inputs)",
                inputs.len()
            );
        }
        Self { name, inputs, outputs }
    }

    /// A state-mutating function with no decoded outputs
    pub fn transaction(name: impl Into<String>, inputs: Vec<DynSolValue>) -> Self {
        Self::new(name, inputs, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub fn signature(&self) -> ContractResult<String> {
        let types = self
            .inputs
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .as_type()
                    .map(|ty| ty.sol_type_name().into_owned())
                    .ok_or_else(|| {
                        ContractError::invalid_argument(format!(
                            "input {} of '{}' has no ABI type",
                            index, self.name
                        ))
                    })
            })
            .collect::<ContractResult<Vec<_>>>()?;
        Ok(format!("{}({})", self.name, types.join(",")))
    }

    pub fn selector(&self) -> ContractResult<Selector> {
        Ok(selector_of(&self.signature()?))
    }

    /// Selector followed by the ABI-encoded input tuple
    pub fn encode_call_data(&self) -> ContractResult<Bytes> {
        let signature = self.signature()?;
        let selector = selector_of(&signature);
        let params = DynSolValue::Tuple(self.inputs.clone()).abi_encode_params();

        let mut data = Vec::with_capacity(4 + params.len());
        data.extend_from_slice(selector.as_slice());
        data.extend_from_slice(&params);

        debug!(signature = %signature, selector = %selector, len = data.len(), "encoded call");
        Ok(Bytes::from(data))
    }

    /// Decode a call result against the declared output tuple.
    ///
    /// Fails with `MalformedResponse` on a short, empty or mistyped tuple; a
    /// partially decoded tuple is never returned.
    pub fn decode_output(&self, data: &[u8]) -> ContractResult<Vec<DynSolValue>> {
        if self.outputs.is_empty() {
            return Ok(Vec::new());
        }
        if data.is_empty() {
            bail_malformed!("empty response from '{}'", self.name);
        }

        let schema = DynSolType::Tuple(self.outputs.clone());
        let decoded = schema.abi_decode_params(data).map_err(|e| {
            ContractError::malformed_response(format!("cannot decode '{}' output: {}", self.name, e))
        })?;

        match decoded {
            DynSolValue::Tuple(values) if values.len() == self.outputs.len() => Ok(values),
            DynSolValue::Tuple(values) => bail_malformed!(
                "'{}' returned {} values, expected {}",
                self.name,
                values.len(),
                self.outputs.len()
            ),
            other => bail_malformed!("'{}' returned a non-tuple value: {:?}", self.name, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};

    #[test]
    fn test_signature() {
        let function = ContractFunction::transaction(
            "transfer",
            vec![
                DynSolValue::Address(Address::ZERO),
                DynSolValue::Uint(U256::from(1), 256),
            ],
        );
        assert_eq!(function.signature().unwrap(), "transfer(address,uint256)");
    }

    #[test]
    fn test_known_selector() {
        // ERC-20 transfer(address,uint256)
        assert_eq!(selector_of("transfer(address,uint256)").as_slice(), &[0xa9, 0x05, 0x9c, 0xbb]);
        // ERC-20 balanceOf(address)
        assert_eq!(selector_of("balanceOf(address)").as_slice(), &[0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_empty_name_signature() {
        let function = ContractFunction::new(
            "",
            vec![DynSolValue::Uint(U256::from(1), 256), DynSolValue::String("x".into())],
            vec![DynSolType::Bool],
        );
        assert_eq!(function.signature().unwrap(), "(uint256,string)");
        assert_eq!(function.selector().unwrap(), selector_of("(uint256,string)"));
    }

    #[test]
    fn test_call_data_layout() {
        let function = ContractFunction::transaction("burn", vec![DynSolValue::Uint(U256::from(7), 256)]);
        let data = function.encode_call_data().unwrap();
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], selector_of("burn(uint256)").as_slice());
        assert_eq!(data[35], 7);
    }

    #[test]
    fn test_decode_output_roundtrip() {
        let function = ContractFunction::new("getVersion", vec![], vec![DynSolType::String]);
        let encoded = DynSolValue::Tuple(vec![DynSolValue::String("v1".into())]).abi_encode_params();
        let values = function.decode_output(&encoded).unwrap();
        assert_eq!(values, vec![DynSolValue::String("v1".into())]);
    }

    #[test]
    fn test_decode_output_short_response() {
        let function = ContractFunction::new(
            "getSupply",
            vec![],
            vec![DynSolType::Uint(256), DynSolType::Uint(256)],
        );
        let encoded = DynSolValue::Tuple(vec![DynSolValue::Uint(U256::from(1), 256)]).abi_encode_params();
        assert!(matches!(
            function.decode_output(&encoded),
            Err(ContractError::MalformedResponse(_))
        ));
        assert!(matches!(function.decode_output(&[]), Err(ContractError::MalformedResponse(_))));
    }

    #[test]
    fn test_transaction_has_no_outputs() {
        let function = ContractFunction::transaction("addIdea", vec![DynSolValue::String("x".into())]);
        assert!(function.decode_output(&[1, 2, 3]).unwrap().is_empty());
    }
}
