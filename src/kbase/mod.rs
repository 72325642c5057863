//! Clients for the SDK callback services the module depends on.

pub mod assembly_util;
pub mod report;
pub mod rpc;
