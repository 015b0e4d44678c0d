//! Common test utilities for picklist property and scenario tests.
//!
//! This module provides:
//! - Fixtures: small hand-written option forests
//! - Strategies: proptest generators for forests and action sequences

#![allow(dead_code)]

pub mod strategies;

pub use fixtures::*;
pub use strategies::*;
