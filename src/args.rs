use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rostat", version)]
pub struct Args {
    #[arg(
        default_value = "config.json",
        id = "path",
        long = "config",
        help = "Path to config file (relative/absolute)"
    )]
    pub config_path: PathBuf,

    #[arg(
        default_value = "logs",
        id = "logs",
        long = "logs-dir",
        help = "Path to logs directory (relative/absolute)"
    )]
    pub logs_dir: PathBuf,
}

pub fn load() -> Args {
    Args::parse()
}
