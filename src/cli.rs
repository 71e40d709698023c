use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kube-report")]
#[command(about = "Render kubectl-style tables from a pod list JSON snapshot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the pod table (name, ready, status, restarts, age)
    Pods {
        /// Input JSON file; stdin when omitted or '-'
        input: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit plain tab-separated rows without header or color
        #[arg(long)]
        tsv: bool,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Render the container table (pod, name, ready, state, image)
    Containers {
        /// Input JSON file; stdin when omitted or '-'
        input: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit plain tab-separated rows without header or color
        #[arg(long)]
        tsv: bool,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Write both tables into a directory as 'pods' and 'containers'
    Report {
        /// Input JSON file; stdin when omitted or '-'
        input: Option<PathBuf>,

        /// Directory receiving the two table files
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },
}
