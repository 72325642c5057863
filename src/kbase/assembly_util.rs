use super::rpc::RpcClient;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::path::Path;

/// Client for the AssemblyUtil callback service, which converts a FASTA
/// file into a workspace Assembly object.
pub struct AssemblyUtil {
    rpc: RpcClient,
}

impl AssemblyUtil {
    pub fn new(callback_url: &str, token: Option<&str>) -> Self {
        AssemblyUtil {
            rpc: RpcClient::new(callback_url, token),
        }
    }

    /// Persist a contig FASTA file, returning the new object's reference.
    pub fn save_assembly_from_fasta(
        &self,
        fasta: &Path,
        workspace_name: &str,
        assembly_name: &str,
    ) -> Result<String> {
        let result = self.rpc.call(
            "AssemblyUtil.save_assembly_from_fasta",
            json!({
                "file": {"path": fasta.display().to_string()},
                "workspace_name": workspace_name,
                "assembly_name": assembly_name,
            }),
        )?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("AssemblyUtil returned a non-string object reference"))
    }
}
