//! Port contracts for the task read-model.
//!
//! Ports define transport-agnostic interfaces used by task services.

pub mod contract;

pub use contract::{
    CallKind, CallReceipt, ContractError, ContractResult, PendingCall, TaskContract,
};
