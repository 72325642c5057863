//! kb-velvet - KBase service wrapper for the Velvet short read assembler
//!
//! Wraps the pre-built `velveth` and `velvetg` binaries: validates the
//! parameters handed over by the platform, turns them into assembler
//! command lines, runs the binaries, and packages the resulting contig
//! FASTA into an Assembly object plus a report.
//!
//! References:
//! https://github.com/dzerbino/velvet
//!
//! # Modules
//! - `params`: request parameter objects and validation
//! - `velvet`: argv construction and subprocess execution
//! - `stats`: contig summary statistics over FASTA output
//! - `kbase`: JSON-RPC clients for the SDK callback services
//! - `service`: the `run_velveth` / `run_velvetg` operations
//! - `config`: deployment configuration

pub mod cli_main;
pub mod config;
pub mod io;
pub mod kbase;
pub mod params;
pub mod service;
pub mod stats;
pub mod velvet;
