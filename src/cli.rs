use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "medrapor",
    version,
    about = "Structured extraction of medication authorization reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Parse(ParseArgs),
    Demo(DemoArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    #[arg(long, default_value = "demo_report.json")]
    pub output: PathBuf,
}
