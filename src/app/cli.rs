//! CLI adapter.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::commands::{check, emit, resolve};
use crate::app::commands::resolve::OutputFormat;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sdloggen")]
#[command(version)]
#[command(
    about = "Validate SD logger component configuration and resolve framework build bindings",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration document and report every defect
    #[clap(visible_alias = "c")]
    Check {
        /// Path to the YAML configuration document
        config: PathBuf,
    },
    /// Resolve the framework build binding for a document
    #[clap(visible_alias = "r")]
    Resolve {
        /// Path to the YAML configuration document
        config: PathBuf,
        /// Output format for the resolved binding
        #[arg(long, value_enum, default_value = "yaml")]
        format: Format,
    },
    /// Emit the generated C++ setup code for a document
    #[clap(visible_alias = "e")]
    Emit {
        /// Path to the YAML configuration document
        config: PathBuf,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// clap-facing mirror of the export format.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Yaml => OutputFormat::Yaml,
            Format::Json => OutputFormat::Json,
        }
    }
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => {
            let outcome = check::execute(&config)?;
            println!(
                "✅ Configuration valid: component '{}' on {} ({} SPI bus(es) declared)",
                outcome.configuration.id, outcome.configuration.framework, outcome.declared_buses
            );
            Ok(())
        }
        Commands::Resolve { config, format } => {
            let outcome = resolve::execute(&config)?;
            print!("{}", outcome.to_output(format.into())?);
            Ok(())
        }
        Commands::Emit { config, out } => {
            let outcome = emit::execute(&config)?;
            match out {
                Some(path) => {
                    fs::write(&path, &outcome.code)?;
                    println!("✅ Generated setup code written to {}", path.display());
                }
                None => print!("{}", outcome.code),
            }
            Ok(())
        }
    }
}
