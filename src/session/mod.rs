//! Wallet session lifecycle management.
//!
//! This context establishes, restores, and tears down the authenticated
//! wallet session, and translates provider push events (account switches,
//! network changes) into session transitions. The module follows hexagonal
//! architecture:
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
