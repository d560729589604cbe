//! pomkit CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pomkit")]
#[command(about = "Inspect and rewrite project descriptors", long_about = None)]
struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a descriptor decodes
    Validate {
        /// Path to the descriptor
        #[arg(default_value = "pom.xml")]
        path: PathBuf,
    },
    /// Print a summary of a descriptor
    Show {
        /// Path to the descriptor
        #[arg(default_value = "pom.xml")]
        path: PathBuf,
        /// Print the full model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Expand ${...} placeholders in a template using the descriptor's properties
    Expand {
        /// Path to the descriptor
        path: PathBuf,
        /// Template to expand, e.g. "${project.artifactId}-${revision}"
        template: String,
        /// Also resolve project.* and pom.* names
        #[arg(long)]
        builtins: bool,
        /// Property override, takes precedence over the descriptor
        #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = commands::expand::parse_define)]
        defines: Vec<(String, String)>,
    },
    /// Re-encode a descriptor
    Fmt {
        /// Path to the descriptor
        #[arg(default_value = "pom.xml")]
        path: PathBuf,
        /// Indentation per nesting level
        #[arg(long, env = "POMKIT_INDENT", default_value = "    ")]
        indent: String,
        /// Prefix for every line
        #[arg(long, env = "POMKIT_PREFIX", default_value = "")]
        prefix: String,
        /// Omit the XML declaration
        #[arg(long)]
        no_declaration: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print repository paths for the project and its dependencies
    Path {
        /// Path to the descriptor
        #[arg(default_value = "pom.xml")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { path } => {
            commands::validate(&path)?;
        }
        Commands::Show { path, json } => {
            commands::show(&path, json)?;
        }
        Commands::Expand {
            path,
            template,
            builtins,
            defines,
        } => {
            commands::expand::run(&path, &template, builtins, &defines)?;
        }
        Commands::Fmt {
            path,
            indent,
            prefix,
            no_declaration,
            output,
        } => {
            let options = pomkit_xml::EncodeOptions::compact()
                .with_indent(indent)
                .with_prefix(prefix)
                .with_declaration(!no_declaration);
            commands::fmt::run(&path, &options, output.as_deref())?;
        }
        Commands::Path { path } => {
            commands::path(&path)?;
        }
    }

    Ok(())
}
