use crate::config::{self, Config};
use crate::kbase::assembly_util::AssemblyUtil;
use crate::kbase::report::KbaseReport;
use crate::params::{VelvetgParams, VelvethParams, VelvetResults};
use crate::stats::{contig_stats, ContigStats};
use crate::velvet::{exec, velvetg, velveth};
use anyhow::{ensure, Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::info;

/// Velvet writes assembled contigs to this file in the working folder.
const CONTIGS_FILE: &str = "contigs.fa";

/// The two remote-callable operations. One instance handles one request at
/// a time; the scratch directory is the only state carried across calls.
pub struct VelvetService {
    config: Config,
    assembly_util: AssemblyUtil,
    report: KbaseReport,
}

impl VelvetService {
    pub fn new(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.scratch).with_context(|| {
            format!("creating scratch directory {}", config.scratch.display())
        })?;
        let assembly_util = AssemblyUtil::new(&config.callback_url, config.token.as_deref());
        let report = KbaseReport::new(&config.callback_url, config.token.as_deref());
        Ok(VelvetService {
            config,
            assembly_util,
            report,
        })
    }

    /// Validate params, run velveth over the reads channels, and package
    /// the contigs from `<scratch>/<out_folder>`.
    pub fn run_velveth(&self, params: &Value) -> Result<VelvetResults> {
        info!("run_velveth params: {params}");
        let params = VelvethParams::from_value(params)?;

        let output_dir = self.config.scratch.join(&params.out_folder);
        let args = velveth::build_args(&params, &output_dir)?;
        exec::run_assembler(&self.config.velveth_path, &args, &self.config.scratch)?;

        self.package_contigs(
            &output_dir.join(CONTIGS_FILE),
            &params.workspace_name,
            &params.output_contigset_name,
        )
    }

    /// Validate params, run velvetg over a previously hashed working
    /// folder, and package the contigs it writes there.
    pub fn run_velvetg(&self, params: &Value) -> Result<VelvetResults> {
        info!("run_velvetg params: {params}");
        let params = VelvetgParams::from_value(params)?;

        let wk_dir = self.config.scratch.join(&params.wk_folder);
        let args = velvetg::build_args(&params, &wk_dir);
        exec::run_assembler(&self.config.velvetg_path, &args, &self.config.scratch)?;

        self.package_contigs(
            &wk_dir.join(CONTIGS_FILE),
            &params.workspace_name,
            &params.output_contigset_name,
        )
    }

    /// Save the contig file through AssemblyUtil, then wrap its summary
    /// stats in an extended report.
    fn package_contigs(
        &self,
        contigs: &Path,
        workspace_name: &str,
        contigset_name: &str,
    ) -> Result<VelvetResults> {
        ensure!(
            contigs.exists(),
            "expected contig output {} was not produced",
            contigs.display()
        );
        let assembly_ref =
            self.assembly_util
                .save_assembly_from_fasta(contigs, workspace_name, contigset_name)?;

        let stats = contig_stats(contigs)?;
        let message = report_message(workspace_name, contigset_name, &stats);

        info!("saving report");
        let report_info =
            self.report
                .create_extended_report(&message, &assembly_ref, workspace_name)?;
        Ok(VelvetResults {
            report_name: report_info.name,
            report_ref: report_info.reference,
        })
    }
}

/// Render the report body shown to the user.
pub fn report_message(workspace_name: &str, contigset_name: &str, stats: &ContigStats) -> String {
    format!(
        "ContigSet saved to: {}/{}\nAssembled into {} contigs.\nAvg Length: {} bp.\n",
        workspace_name, contigset_name, stats.total_contigs, stats.average_length
    )
}

/// Module health, reported without touching the callback services.
pub fn status() -> Value {
    json!({
        "state": "OK",
        "message": "",
        "version": config::VERSION,
        "git_url": config::GIT_URL,
        "git_commit_hash": option_env!("GIT_COMMIT_HASH").unwrap_or(""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_message_matches_the_expected_lines() {
        let stats = ContigStats {
            total_contigs: 3,
            total_length: 48,
            average_length: 16.0,
            n50: 24,
        };
        let message = report_message("my_workspace", "velvet.contigs", &stats);
        assert_eq!(
            message,
            "ContigSet saved to: my_workspace/velvet.contigs\n\
             Assembled into 3 contigs.\n\
             Avg Length: 16 bp.\n"
        );
    }

    #[test]
    fn status_reports_ok() {
        let status = status();
        assert_eq!(status["state"], "OK");
        assert_eq!(status["version"], config::VERSION);
    }
}
