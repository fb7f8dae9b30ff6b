//! Unit tests for the presentation boundary.

mod view_tests;
