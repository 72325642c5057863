use super::rpc::RpcClient;
use anyhow::Result;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

/// Name and workspace reference of a saved report object.
#[derive(Debug, Deserialize)]
pub struct ReportInfo {
    pub name: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Client for the KBaseReport callback service.
pub struct KbaseReport {
    rpc: RpcClient,
}

impl KbaseReport {
    pub fn new(callback_url: &str, token: Option<&str>) -> Self {
        KbaseReport {
            rpc: RpcClient::new(callback_url, token),
        }
    }

    /// Create a report carrying the run summary and a link to the saved
    /// assembly object.
    pub fn create_extended_report(
        &self,
        message: &str,
        assembly_ref: &str,
        workspace_name: &str,
    ) -> Result<ReportInfo> {
        let result = self.rpc.call(
            "KBaseReport.create_extended_report",
            json!({
                "message": message,
                "objects_created": [
                    {"ref": assembly_ref, "description": "Assembled contigs"}
                ],
                "report_object_name": format!("kb_velvet_report_{}", Uuid::new_v4()),
                "workspace_name": workspace_name,
            }),
        )?;
        Ok(serde_json::from_value(result)?)
    }
}
