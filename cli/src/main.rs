mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "geojson-diff")]
#[command(about = "Compare GeoJSON snapshots and show feature changes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare two GeoJSON snapshots")]
    Diff {
        #[arg(help = "Path to the old/previous snapshot")]
        old: String,
        #[arg(help = "Path to the new/current snapshot")]
        new: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(
            long,
            value_name = "FIELDS",
            help = "Comma-separated tracked property fields (replaces the default list)"
        )]
        fields: Option<String>,
        #[arg(long, help = "Report coordinate drift on matched features")]
        track_coordinates: bool,
        #[arg(long, help = "Keep the first feature on a duplicate identity key instead of the last")]
        first_wins: bool,
        #[arg(long, short, help = "Quiet mode: only show the summary")]
        quiet: bool,
        #[arg(long, short, help = "Verbose mode: show index diagnostics")]
        verbose: bool,
    },
    #[command(about = "Show identity statistics for one snapshot")]
    Info {
        #[arg(help = "Path to the snapshot")]
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff {
            old,
            new,
            format,
            fields,
            track_coordinates,
            first_wins,
            quiet,
            verbose,
        } => commands::diff::run(
            &old,
            &new,
            format,
            fields.as_deref(),
            track_coordinates,
            first_wins,
            quiet,
            verbose,
        ),
        Commands::Info { path } => commands::info::run(&path),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
