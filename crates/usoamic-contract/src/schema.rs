//! Output Schemas and Entity Builders
//!
//! Fixed positional schemas of the entity read calls, and the builders that
//! turn a decoded tuple into an entity. Field order matches the contract and
//! must not be reordered.
//!
//! * Idea (11): `bool, uint256 ideaId, uint256 ideaRefId, address author,
//!   string description, uint8 status, uint256 timestamp, uint256 supporters,
//!   uint256 abstainers, uint256 against, uint256 participants`
//! * Vote (6): `bool, uint256 ideaId, uint256 voteId, address voter,
//!   uint8 voteType, string comment`
//! * Purchase (5): `string appId, string purchaseId, uint256 cost,
//!   address purchaser, uint256 id`

use alloy::dyn_abi::{DynSolType, DynSolValue};
use usoamic_error::ContractResult;
use usoamic_types::{Idea, IdeaTally, Purchase, Vote};

use crate::decode::TupleReader;

//-----------------------------------------------------------------------------
// Schemas
//-----------------------------------------------------------------------------

pub const IDEA_ARITY: usize = 11;
pub const VOTE_ARITY: usize = 6;
pub const PURCHASE_ARITY: usize = 5;

pub fn idea_outputs() -> Vec<DynSolType> {
    vec![
        DynSolType::Bool,
        DynSolType::Uint(256),
        DynSolType::Uint(256),
        DynSolType::Address,
        DynSolType::String,
        DynSolType::Uint(8),
        DynSolType::Uint(256),
        DynSolType::Uint(256),
        DynSolType::Uint(256),
        DynSolType::Uint(256),
        DynSolType::Uint(256),
    ]
}

pub fn vote_outputs() -> Vec<DynSolType> {
    vec![
        DynSolType::Bool,
        DynSolType::Uint(256),
        DynSolType::Uint(256),
        DynSolType::Address,
        DynSolType::Uint(8),
        DynSolType::String,
    ]
}

pub fn purchase_outputs() -> Vec<DynSolType> {
    vec![
        DynSolType::String,
        DynSolType::String,
        DynSolType::Uint(256),
        DynSolType::Address,
        DynSolType::Uint(256),
    ]
}

//-----------------------------------------------------------------------------
// Builders
//-----------------------------------------------------------------------------

pub fn build_idea(function: &str, values: &[DynSolValue]) -> ContractResult<Idea> {
    let tuple = TupleReader::new(function, values, IDEA_ARITY)?;
    Ok(Idea::new(
        tuple.bool(0)?,
        tuple.uint(1)?,
        tuple.uint(2)?,
        tuple.address(3)?,
        tuple.string(4)?,
        tuple.ordinal(5)?,
        tuple.uint(6)?,
        IdeaTally {
            supporters: tuple.uint(7)?,
            abstainers: tuple.uint(8)?,
            against: tuple.uint(9)?,
            participants: tuple.uint(10)?,
        },
    ))
}

pub fn build_vote(function: &str, values: &[DynSolValue]) -> ContractResult<Vote> {
    let tuple = TupleReader::new(function, values, VOTE_ARITY)?;
    Ok(Vote::new(
        tuple.bool(0)?,
        tuple.uint(1)?,
        tuple.uint(2)?,
        tuple.address(3)?,
        tuple.ordinal(4)?,
        tuple.string(5)?,
    ))
}

pub fn build_purchase(function: &str, values: &[DynSolValue]) -> ContractResult<Purchase> {
    let tuple = TupleReader::new(function, values, PURCHASE_ARITY)?;
    Ok(Purchase::new(
        tuple.string(0)?,
        tuple.string(1)?,
        tuple.uint(2)?,
        tuple.address(3)?,
        tuple.uint(4)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};
    use usoamic_error::ContractError;
    use usoamic_types::{IdeaStatus, VoteType};

    fn uint(value: u64, bits: usize) -> DynSolValue {
        DynSolValue::Uint(U256::from(value), bits)
    }

    fn idea_tuple(status: u64) -> Vec<DynSolValue> {
        vec![
            DynSolValue::Bool(true),
            uint(5, 256),
            uint(5, 256),
            DynSolValue::Address(Address::repeat_byte(0xab)),
            DynSolValue::String("desc".into()),
            uint(status, 8),
            uint(1_690_000_000, 256),
            uint(3, 256),
            uint(1, 256),
            uint(0, 256),
            uint(4, 256),
        ]
    }

    #[test]
    fn test_schema_arity() {
        assert_eq!(idea_outputs().len(), IDEA_ARITY);
        assert_eq!(vote_outputs().len(), VOTE_ARITY);
        assert_eq!(purchase_outputs().len(), PURCHASE_ARITY);
    }

    #[test]
    fn test_build_idea() {
        let idea = build_idea("getIdea", &idea_tuple(2)).unwrap();
        assert_eq!(idea.status(), IdeaStatus::Rejected);
        assert_eq!(idea.number_of_participants(), U256::from(4));
        assert_eq!(idea.number_of_supporters(), U256::from(3));
        assert_eq!(idea.timestamp(), U256::from(1_690_000_000u64));
    }

    #[test]
    fn test_build_idea_unknown_status() {
        assert_eq!(
            build_idea("getIdea", &idea_tuple(99)),
            Err(ContractError::UnknownEnumVariant { enum_name: "IdeaStatus", ordinal: "99".into() })
        );
    }

    #[test]
    fn test_build_idea_short_tuple() {
        let mut tuple = idea_tuple(0);
        tuple.pop();
        assert!(matches!(build_idea("getIdea", &tuple), Err(ContractError::MalformedResponse(_))));
    }

    #[test]
    fn test_build_vote() {
        let tuple = vec![
            DynSolValue::Bool(true),
            uint(5, 256),
            uint(2, 256),
            DynSolValue::Address(Address::repeat_byte(0xde)),
            uint(0, 8),
            DynSolValue::String("good idea".into()),
        ];
        let vote = build_vote("getVote", &tuple).unwrap();
        assert_eq!(vote.vote_type(), VoteType::Support);
        assert_eq!(vote.comment(), "good idea");
        assert_eq!(vote.vote_id(), U256::from(2));
    }

    #[test]
    fn test_build_purchase_mistyped() {
        let tuple = vec![
            DynSolValue::String("app".into()),
            uint(1, 256),
            uint(10, 256),
            DynSolValue::Address(Address::ZERO),
            uint(0, 256),
        ];
        assert!(matches!(
            build_purchase("getPurchaseByAddress", &tuple),
            Err(ContractError::MalformedResponse(_))
        ));
    }
}
