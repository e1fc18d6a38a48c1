//! Ordinal-mapped wire enumerations
//!
//! The contract transmits enumerations as `uint8` ordinals. The variant order
//! below is the contract's declaration order and must never be changed:
//! reordering silently corrupts every decoded status.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use usoamic_error::{ContractError, ContractResult};

//-----------------------------------------------------------------------------
// Ordinal Trait
//-----------------------------------------------------------------------------

/// An enumeration with a stable ordinal on the wire
pub trait Ordinal: Sized + Copy + 'static {
    /// Name used in `UnknownEnumVariant` errors
    const NAME: &'static str;

    /// All variants, indexed by ordinal
    const VARIANTS: &'static [Self];

    /// Wire ordinal of this variant
    fn ordinal(self) -> u8;

    /// Bounds-checked lookup of a wire ordinal.
    ///
    /// Ordinals outside the known range fail with `UnknownEnumVariant` so that
    /// a contract upgrade adding variants cannot produce a wrong entity.
    fn from_ordinal(ordinal: U256) -> ContractResult<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index))
            .copied()
            .ok_or_else(|| ContractError::UnknownEnumVariant {
                enum_name: Self::NAME,
                ordinal: ordinal.to_string(),
            })
    }
}

//-----------------------------------------------------------------------------
// Idea Status
//-----------------------------------------------------------------------------

/// Lifecycle status of an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum IdeaStatus {
    Open = 0,
    Accepted = 1,
    Rejected = 2,
}

impl Ordinal for IdeaStatus {
    const NAME: &'static str = "IdeaStatus";
    const VARIANTS: &'static [Self] = &[IdeaStatus::Open, IdeaStatus::Accepted, IdeaStatus::Rejected];

    fn ordinal(self) -> u8 {
        self as u8
    }
}

impl IdeaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Open => "open",
            IdeaStatus::Accepted => "accepted",
            IdeaStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaStatus {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s)
    }
}

//-----------------------------------------------------------------------------
// Vote Type
//-----------------------------------------------------------------------------

/// Kind of vote cast on an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum VoteType {
    Support = 0,
    Abstain = 1,
    Against = 2,
}

/// Contract function that casts each vote type, indexed by ordinal
const VOTE_FUNCTIONS: [&str; 3] = ["supportIdea", "abstainIdea", "againstIdea"];

impl Ordinal for VoteType {
    const NAME: &'static str = "VoteType";
    const VARIANTS: &'static [Self] = &[VoteType::Support, VoteType::Abstain, VoteType::Against];

    fn ordinal(self) -> u8 {
        self as u8
    }
}

impl VoteType {
    /// Contract function used to cast a vote of this type
    pub fn function_name(self) -> &'static str {
        VOTE_FUNCTIONS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VoteType::Support => "support",
            VoteType::Abstain => "abstain",
            VoteType::Against => "against",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s)
    }
}

//-----------------------------------------------------------------------------
// Parsing
//-----------------------------------------------------------------------------

/// Parse a variant by its lowercase name or by its ordinal
fn parse_variant<E>(s: &str) -> ContractResult<E>
where
    E: Ordinal + fmt::Display,
{
    let wanted = s.trim().to_ascii_lowercase();
    if let Ok(ordinal) = wanted.parse::<u64>() {
        return E::from_ordinal(U256::from(ordinal)).map_err(|_| {
            ContractError::invalid_argument(format!("{} has no variant with ordinal {}", E::NAME, ordinal))
        });
    }
    E::VARIANTS
        .iter()
        .copied()
        .find(|variant| variant.to_string() == wanted)
        .ok_or_else(|| ContractError::invalid_argument(format!("unknown {}: '{}'", E::NAME, s)))
}
