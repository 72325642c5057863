//! Command-line construction and execution for the wrapped Velvet binaries.

pub mod exec;
pub mod velvetg;
pub mod velveth;
