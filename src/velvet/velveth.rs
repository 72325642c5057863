use crate::params::{ReadsChannel, VelvethParams};
use anyhow::{bail, Result};
use std::path::Path;

/// Build the velveth argument vector: `<output_dir> <hash_length>` followed
/// by one flag group per reads channel.
pub fn build_args(params: &VelvethParams, output_dir: &Path) -> Result<Vec<String>> {
    let mut args = vec![
        output_dir.display().to_string(),
        params.hash_length.to_string(),
    ];
    for channel in &params.reads_channels {
        push_channel_args(&mut args, channel)?;
    }
    Ok(args)
}

/// Emit `-<file_format> -<read_type>` and the channel's files. Reference
/// channels name the reference FASTA before the read file; the "separate"
/// layout passes left and right files behind a `-separate` flag.
fn push_channel_args(args: &mut Vec<String>, channel: &ReadsChannel) -> Result<()> {
    args.push(format!("-{}", channel.file_format));
    args.push(format!("-{}", channel.read_type));

    let info = &channel.read_file_info;
    if channel.read_type == "reference" {
        match &info.reference_file {
            Some(file) => args.push(file.clone()),
            None => bail!("reference read channel is missing reference_file"),
        }
    }

    if channel.file_layout == "separate" {
        match (&info.left_file, &info.right_file) {
            (Some(left), Some(right)) => {
                args.push(format!("-{}", channel.file_layout));
                args.push(left.clone());
                args.push(right.clone());
            }
            _ => bail!("separate layout channel is missing left_file or right_file"),
        }
    } else {
        match &info.read_file {
            Some(file) => args.push(file.clone()),
            None => bail!("reads channel is missing read_file"),
        }
    }
    Ok(())
}
