//! Shared infrastructure for the integration tests.
//!
//! - `fixtures`: seeded point sets and hierarchies
//! - `helpers`: brute-force oracles and invariant checks

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
