//! Usoamic Types: immutable domain entities decoded from contract calls.
//!
//! Every entity here is transient. It is created fresh from one decoded call
//! result, never mutated afterwards and never cached.
//!
//! ## Module Organization
//!
//! * **Wire enumerations**: ordinal-mapped enums shared with the contract (`ordinal`)
//! * **Ideas**: proposals and their vote tallies (`idea`)
//! * **Votes**: a single participant's vote on an idea (`vote`)
//! * **Purchases**: paid application purchases (`purchase`)
//! * **Serialization**: decimal rendering of `U256` fields (`decimal`)

pub mod decimal;
pub mod idea;
pub mod ordinal;
pub mod purchase;
pub mod vote;

pub use idea::{Idea, IdeaTally};
pub use ordinal::{IdeaStatus, Ordinal, VoteType};
pub use purchase::Purchase;
pub use vote::Vote;

// Numeric and account primitives used across the entity types
pub use alloy::primitives::{Address, U256};
