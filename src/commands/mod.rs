//! Command implementations for the stalepkg CLI

pub mod audit;
pub mod completions;
