use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// File locations for one reads channel. Only `read_file` is consulted for
/// combined layouts; `left_file`/`right_file` for the "separate" layout;
/// `reference_file` for reference channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadFileInfo {
    #[serde(default)]
    pub read_file: Option<String>,
    #[serde(default)]
    pub reference_file: Option<String>,
    #[serde(default)]
    pub left_file: Option<String>,
    #[serde(default)]
    pub right_file: Option<String>,
}

/// One input channel for velveth: a file format (fasta, fastq, sam, ...),
/// a Velvet read category (short, shortPaired, long, reference, ...), and
/// the read file layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadsChannel {
    pub read_type: String,
    pub file_format: String,
    pub file_layout: String,
    pub read_file_info: ReadFileInfo,
}

/// Parameters for `run_velveth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelvethParams {
    pub workspace_name: String,
    pub out_folder: String,
    pub hash_length: i64,
    pub reads_channels: Vec<ReadsChannel>,
    pub output_contigset_name: String,
}

/// Parameters for `run_velvetg`. The numeric knobs mirror velvetg's own
/// options; anything left unset falls through to the assembler's default.
/// `read_trkg` and `amos_file` are 0/1 integers per the upstream typespec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelvetgParams {
    pub workspace_name: String,
    pub wk_folder: String,
    pub output_contigset_name: String,
    #[serde(default)]
    pub cov_cutoff: Option<f64>,
    #[serde(default)]
    pub ins_length: Option<i64>,
    #[serde(default)]
    pub read_trkg: Option<i64>,
    #[serde(default)]
    pub min_contig_length: Option<i64>,
    #[serde(default)]
    pub amos_file: Option<i64>,
    #[serde(default)]
    pub exp_cov: Option<f64>,
    #[serde(default)]
    pub long_cov_cutoff: Option<f64>,
}

/// Output of both operations: the name and workspace reference of the
/// saved report object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelvetResults {
    pub report_name: String,
    pub report_ref: String,
}

impl VelvethParams {
    /// Validate an untyped params object the way the platform hands it
    /// over, then deserialize it.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = require_object(value)?;
        require_string(obj, "workspace_name")?;
        require_string(obj, "out_folder")?;
        match obj.get("hash_length") {
            None => bail!("an integer hash_length parameter is required"),
            Some(v) if !v.is_i64() && !v.is_u64() => {
                bail!("hash_length must be of type int")
            }
            Some(_) => {}
        }
        match obj.get("reads_channels") {
            None => bail!("a list of reads_channels is required"),
            Some(v) if !v.is_array() => bail!("reads_channels must be a list"),
            Some(_) => {}
        }
        require_string(obj, "output_contigset_name")?;
        Ok(serde_json::from_value(value.clone())?)
    }
}

impl VelvetgParams {
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = require_object(value)?;
        require_string(obj, "workspace_name")?;
        require_string(obj, "wk_folder")?;
        require_string(obj, "output_contigset_name")?;
        Ok(serde_json::from_value(value.clone())?)
    }
}

fn require_object(value: &Value) -> Result<&Map<String, Value>> {
    match value.as_object() {
        Some(obj) => Ok(obj),
        None => bail!("params must be a mapping of parameter names to values"),
    }
}

fn require_string(obj: &Map<String, Value>, key: &str) -> Result<()> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(()),
        Some(_) => bail!("{key} must be a non-empty string"),
        None => bail!("a string {key} parameter is required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn velveth_params() -> Value {
        json!({
            "workspace_name": "my_workspace",
            "out_folder": "velvet_outdir",
            "hash_length": 21,
            "output_contigset_name": "velvet.contigs",
            "reads_channels": [{
                "read_type": "short",
                "file_format": "fastq",
                "file_layout": "interleaved",
                "read_file_info": {"read_file": "reads.fq"}
            }]
        })
    }

    #[test]
    fn velveth_accepts_valid_params() {
        let params = VelvethParams::from_value(&velveth_params()).unwrap();
        assert_eq!(params.hash_length, 21);
        assert_eq!(params.reads_channels.len(), 1);
        assert_eq!(params.reads_channels[0].read_type, "short");
    }

    #[test]
    fn velveth_rejects_missing_required_fields() {
        for key in [
            "workspace_name",
            "out_folder",
            "hash_length",
            "reads_channels",
            "output_contigset_name",
        ] {
            let mut value = velveth_params();
            value.as_object_mut().unwrap().remove(key);
            let err = VelvethParams::from_value(&value).unwrap_err();
            assert!(err.to_string().contains(key), "error should name {key}");
        }
    }

    #[test]
    fn velveth_rejects_non_integer_hash_length() {
        for bad in [json!(21.5), json!("21"), json!(null), json!(true)] {
            let mut value = velveth_params();
            value["hash_length"] = bad;
            let err = VelvethParams::from_value(&value).unwrap_err();
            assert!(err.to_string().contains("hash_length"));
        }
    }

    #[test]
    fn velveth_rejects_non_list_reads_channels() {
        let mut value = velveth_params();
        value["reads_channels"] = json!({"read_type": "short"});
        let err = VelvethParams::from_value(&value).unwrap_err();
        assert!(err.to_string().contains("must be a list"));
    }

    #[test]
    fn velvetg_requires_workspace_and_folder() {
        let valid = json!({
            "workspace_name": "my_workspace",
            "wk_folder": "velvet_outdir",
            "output_contigset_name": "velvet.contigs"
        });
        assert!(VelvetgParams::from_value(&valid).is_ok());

        for key in ["workspace_name", "wk_folder", "output_contigset_name"] {
            let mut value = valid.clone();
            value.as_object_mut().unwrap().remove(key);
            let err = VelvetgParams::from_value(&value).unwrap_err();
            assert!(err.to_string().contains(key), "error should name {key}");
        }
    }

    #[test]
    fn velvetg_optional_knobs_default_to_none() {
        let value = json!({
            "workspace_name": "my_workspace",
            "wk_folder": "velvet_outdir",
            "output_contigset_name": "velvet.contigs"
        });
        let params = VelvetgParams::from_value(&value).unwrap();
        assert!(params.cov_cutoff.is_none());
        assert!(params.min_contig_length.is_none());
    }
}
