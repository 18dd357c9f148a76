//! Internal support utilities for the derive.
//!
//! This module provides shared functionality for parsing attributes,
//! generating diagnostics, and working with syn types.

pub mod attrs;
pub mod diag;
pub mod utils;
