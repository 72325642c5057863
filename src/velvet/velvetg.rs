use crate::params::VelvetgParams;
use std::path::Path;

/// Build the velvetg argument vector: the working folder followed by a flag
/// for each knob the caller supplied. Unset knobs emit nothing, leaving the
/// assembler's defaults in force.
pub fn build_args(params: &VelvetgParams, wk_dir: &Path) -> Vec<String> {
    let mut args = vec![wk_dir.display().to_string()];
    if let Some(v) = params.cov_cutoff {
        push_flag(&mut args, "-cov_cutoff", v.to_string());
    }
    if let Some(v) = params.ins_length {
        push_flag(&mut args, "-ins_length", v.to_string());
    }
    if let Some(v) = params.read_trkg {
        push_flag(&mut args, "-read_trkg", yes_no(v));
    }
    if let Some(v) = params.min_contig_length {
        // velvetg's own spelling of the flag
        push_flag(&mut args, "-min_contig_lgth", v.to_string());
    }
    if let Some(v) = params.amos_file {
        push_flag(&mut args, "-amos_file", yes_no(v));
    }
    if let Some(v) = params.exp_cov {
        push_flag(&mut args, "-exp_cov", v.to_string());
    }
    if let Some(v) = params.long_cov_cutoff {
        push_flag(&mut args, "-long_cov_cutoff", v.to_string());
    }
    args
}

fn push_flag(args: &mut Vec<String>, flag: &str, value: String) {
    args.push(flag.to_string());
    args.push(value);
}

fn yes_no(value: i64) -> String {
    let flag = if value != 0 { "yes" } else { "no" };
    flag.to_string()
}
