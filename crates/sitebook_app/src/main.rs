mod logging;
mod pipeline;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sitebook", version, about = "Consolidate an HTML site into one Markdown document")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a single Markdown file from a directory of HTML files or a URL.
    Build {
        /// Directory containing HTML files, or an http(s):// URL to mirror.
        input_source: String,
        /// Path where the merged Markdown is written.
        #[arg(long, default_value = "complete_manual.md")]
        output: PathBuf,
        /// Keep the temporary download directory instead of deleting it.
        #[arg(long)]
        keep_temp: bool,
    },
}

fn main() -> ExitCode {
    logging::initialize();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input_source,
            output,
            keep_temp,
        } => match pipeline::build(&input_source, &output, keep_temp) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}
