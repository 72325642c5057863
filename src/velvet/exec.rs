use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Run an assembler binary with the given argv, blocking until it exits.
/// The working directory is the scratch directory so relative read file
/// paths resolve the same way they did for the uploader.
pub fn run_assembler(binary: &Path, args: &[String], cwd: &Path) -> Result<()> {
    info!("running: {} {}", binary.display(), args.join(" "));
    let status = Command::new(binary)
        .args(args)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("failed to spawn {}", binary.display()))?;
    info!("return code: {:?}", status.code());
    if !status.success() {
        bail!("{} failed with {}", binary.display(), status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn zero_exit_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        run_assembler(&PathBuf::from("true"), &[], dir.path()).unwrap();
    }

    #[test]
    fn nonzero_exit_is_an_error_with_the_status() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_assembler(&PathBuf::from("false"), &[], dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed with"), "{err}");
    }

    #[test]
    fn missing_binary_names_it() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_assembler(
            &PathBuf::from("/no/such/velveth"),
            &["out".to_string()],
            dir.path(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/no/such/velveth"));
    }
}
