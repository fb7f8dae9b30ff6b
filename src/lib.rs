//! Taskledger: a client for a task board whose authoritative state lives
//! in a ledger-backed task service reached through a wallet provider.
//!
//! The crate implements the connection-and-synchronization controller:
//! establishing and restoring the wallet session, issuing state-changing
//! calls through a contract binding, waiting for each call's durable
//! confirmation, and republishing the service's task set as a local
//! read-model. Rendering and wallet chrome stay outside; the crate ends at
//! the presentation boundary in [`client`].
//!
//! # Architecture
//!
//! Taskledger follows hexagonal architecture principles:
//!
//! - **Domain**: Pure session and task types with no transport dependencies
//! - **Ports**: Abstract trait interfaces for the wallet provider and the
//!   task service contract
//! - **Adapters**: Concrete implementations of ports (in-memory test
//!   doubles here; wallet transports plug in downstream)
//!
//! # Modules
//!
//! - [`session`]: Wallet session lifecycle and provider event translation
//! - [`tasks`]: Task read-model synchronization and intent execution
//! - [`client`]: The presentation boundary facade

pub mod client;
pub mod session;
pub mod tasks;
