//! Unit tests for the session module.
//!
//! Tests are organised by concern: domain value validation and slot
//! semantics, then connection lifecycle orchestration against the
//! in-memory provider.

mod connection_tests;
