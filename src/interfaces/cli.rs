use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agent-proxy")]
#[command(about = "Send tabular data through LLM prompt agents and return JSON.")]
#[command(version)]
pub struct Cli {
    /// Path to config file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,
}
