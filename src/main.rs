use anyhow::{Context, Result};
use clap::Parser;
use kb_velvet::cli_main::{Cli, Commands};
use kb_velvet::config::{Config, ConfigOverrides};
use kb_velvet::params::VelvetResults;
use kb_velvet::service::{self, VelvetService};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();

    if let Commands::Status = cli.command {
        println!("{}", serde_json::to_string_pretty(&service::status())?);
        return Ok(());
    }

    let config = Config::resolve(ConfigOverrides {
        scratch: cli.scratch,
        callback_url: cli.callback_url,
        velveth: cli.velveth,
        velvetg: cli.velvetg,
    })?;
    let service = VelvetService::new(config)?;

    match cli.command {
        Commands::RunVelveth { params, output } => {
            let results = service.run_velveth(&read_params(&params)?)?;
            write_results(&results, output.as_deref())
        }
        Commands::RunVelvetg { params, output } => {
            let results = service.run_velvetg(&read_params(&params)?)?;
            write_results(&results, output.as_deref())
        }
        Commands::Status => unreachable!(),
    }
}

fn read_params(path: &str) -> Result<Value> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading params file {path}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("parsing params file {path}"))
}

fn write_results(results: &VelvetResults, output: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(results)?;
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("writing results to {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}
