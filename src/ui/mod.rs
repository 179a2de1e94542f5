//! ui
//!
//! Output utilities for the `gaz` binary.

pub mod output;
