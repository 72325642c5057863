use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_URL: &str = "https://github.com/kbaseapps/kb-velvet.git";

const DEFAULT_SCRATCH: &str = "/kb/module/work/tmp";
const DEFAULT_VELVETH: &str = "/kb/module/velvet/velveth";
const DEFAULT_VELVETG: &str = "/kb/module/velvet/velvetg";

/// Deployment configuration, read from the environment the SDK job runner
/// sets up. CLI flags override the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub scratch: PathBuf,
    pub callback_url: String,
    pub workspace_url: Option<String>,
    pub token: Option<String>,
    pub velveth_path: PathBuf,
    pub velvetg_path: PathBuf,
}

/// Values supplied on the command line that take precedence over the
/// environment.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub scratch: Option<PathBuf>,
    pub callback_url: Option<String>,
    pub velveth: Option<PathBuf>,
    pub velvetg: Option<PathBuf>,
}

impl Config {
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let callback_url = match overrides.callback_url {
            Some(url) => url,
            None => env::var("SDK_CALLBACK_URL")
                .context("SDK_CALLBACK_URL is not set and no --callback-url was given")?,
        };
        Ok(Config {
            scratch: overrides
                .scratch
                .unwrap_or_else(|| env_path("VELVET_SCRATCH", DEFAULT_SCRATCH)),
            callback_url,
            workspace_url: env::var("KB_WORKSPACE_URL").ok(),
            token: env::var("KB_AUTH_TOKEN").ok(),
            velveth_path: overrides
                .velveth
                .unwrap_or_else(|| env_path("VELVETH_PATH", DEFAULT_VELVETH)),
            velvetg_path: overrides
                .velvetg
                .unwrap_or_else(|| env_path("VELVETG_PATH", DEFAULT_VELVETG)),
        })
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    env::var(var).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}
