//! Application services for wallet session orchestration.

mod connection;

pub use connection::{ConnectError, ConnectResult, ConnectionManager, SessionTransition};
