use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kb-velvet", version, about = "KBase wrapper for the Velvet assembler", long_about = None)]
pub struct Cli {
    /// Scratch directory for assembler working folders
    #[arg(long, global = true)]
    pub scratch: Option<PathBuf>,

    /// SDK callback URL (defaults to $SDK_CALLBACK_URL)
    #[arg(long, global = true)]
    pub callback_url: Option<String>,

    /// Path to the velveth binary
    #[arg(long, global = true)]
    pub velveth: Option<PathBuf>,

    /// Path to the velvetg binary
    #[arg(long, global = true)]
    pub velvetg: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash input reads with velveth and save the resulting contigs
    RunVelveth {
        /// JSON params file, or '-' for stdin
        #[arg(short, long)]
        params: String,

        /// Write the results JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build contigs with velvetg over a hashed working folder
    RunVelvetg {
        /// JSON params file, or '-' for stdin
        #[arg(short, long)]
        params: String,

        /// Write the results JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print module status as JSON
    Status,
}
