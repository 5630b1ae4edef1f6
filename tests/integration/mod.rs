//! Integration tests for wordcard filing
//!
//! These tests drive the public manager and parser against a temporary
//! vault laid out with the three learning-stage directories.

pub mod config_errors;
pub mod filing_flow;
pub mod helpers;
pub mod round_trip;
