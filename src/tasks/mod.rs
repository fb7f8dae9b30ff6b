//! Task read-model synchronization and mutation.
//!
//! This context mirrors the external service's task set as a local
//! read-model and executes user intents against the service's contract:
//! every mutation is submitted, awaited to durable confirmation, and
//! followed by a full refresh. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
