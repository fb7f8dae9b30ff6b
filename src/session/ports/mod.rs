//! Port contracts for the wallet session.
//!
//! Ports define wallet-agnostic interfaces used by session services.

pub mod provider;

pub use provider::{ProviderError, ProviderEvent, ProviderResult, WalletProvider};
