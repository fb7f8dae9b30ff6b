//! Domain model for the wallet session.
//!
//! The session domain models the connected identity and its atomically
//! swapped lifecycle while keeping provider concerns behind the ports.

mod account;
mod error;
mod session;

pub use account::{Account, ChainId};
pub use error::SessionDomainError;
pub use session::{ConnectionStatus, Session, SessionSlot};
