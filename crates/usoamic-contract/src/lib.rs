//! Usoamic Contract: typed call marshaling for the Usoamic smart contract.
//!
//! This crate turns domain-level operations (add an idea, vote, transfer
//! tokens, read a purchase) into ABI-encoded contract invocations and decodes
//! the positional return tuples back into the entities of `usoamic-types`.
//! Consensus, signing and propagation are delegated to the node behind a
//! [`NodeTransport`].
//!
//! ## Module Organization
//!
//! * **Parameter Encoding**: domain values to ABI values (`encode`)
//! * **Functions**: signatures, selectors and call data (`function`)
//! * **Tuple Decoding**: positional readers and entity builders (`decode`, `schema`)
//! * **Transport**: node interface, HTTP implementation and credentials
//!   (`transport`, `http`, `account`)
//! * **Contract Operations**: per-entity marshalers (`contract`, `ideas`,
//!   `token`, `purchases`)
//! * **Configuration**: node, contract and account settings (`config`)
//! * **Testing Utilities**: in-memory transport (`mock`)

//-----------------------------------------------------------------------------
// Marshaling Core
//-----------------------------------------------------------------------------

pub mod decode;
pub mod encode;
pub mod function;
pub mod schema;

pub use decode::TupleReader;
pub use function::{selector_of, ContractFunction};

//-----------------------------------------------------------------------------
// Node Integration
//-----------------------------------------------------------------------------

pub mod account;
pub mod http;
pub mod transport;

pub use account::{CredentialsProvider, KeystoreAccount};
pub use http::HttpTransport;
pub use transport::{CallRequest, NodeTransport};

//-----------------------------------------------------------------------------
// Contract Operations
//-----------------------------------------------------------------------------

pub mod contract;
pub mod ideas;
pub mod purchases;
pub mod token;

pub use contract::UsoamicContract;

//-----------------------------------------------------------------------------
// Configuration and Testing
//-----------------------------------------------------------------------------

pub mod config;
pub mod mock;

pub use config::UsoamicConfig;
pub use mock::MockTransport;

// Re-export the error taxonomy so callers need a single import
pub use usoamic_error::{ContractError, ContractResult};
