//! Internal tests for provider implementations
//!
//! These live inside the crate so they can exercise the pub(crate) payload
//! decoding paths without real HTTP traffic.

mod maneuver_tests;
