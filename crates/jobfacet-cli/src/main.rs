mod filters;
mod input;
mod text;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jobfacet_core::FilterDimension;
use jobfacet_filters::Normalizer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobfacet")]
#[command(about = "Job description parsing and filter value normalization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a description into classified blocks
    Parse {
        /// Description file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Group a description into about/responsibilities/requirements/benefits
    Sections {
        /// Description file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Print a truncated plain-text preview of a description
    Preview {
        /// Description file (stdin when omitted or `-`)
        file: Option<PathBuf>,
        /// Maximum characters before the ellipsis (defaults to `JOBFACET_PREVIEW_MAX_LEN`)
        #[arg(long)]
        max_len: Option<usize>,
    },
    /// Format raw values into display labels
    Format {
        /// Filter dimension (e.g. `company_stage`, `workArrangement`)
        #[arg(long, short)]
        dimension: FilterDimension,
        /// Raw values (one per stdin line when omitted)
        values: Vec<String>,
    },
    /// Expand display labels into the raw values they match
    Reverse {
        /// Filter dimension (e.g. `company_stage`, `workArrangement`)
        #[arg(long, short)]
        dimension: FilterDimension,
        /// Display labels (one per stdin line when omitted)
        labels: Vec<String>,
    },
    /// Build dropdown options from stored raw values, one per line
    Facets {
        /// Filter dimension (e.g. `location`)
        #[arg(long, short)]
        dimension: FilterDimension,
        /// File of raw values (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Build inclusion predicates from a JSON filter selection
    Predicates {
        /// Selection JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Extract display tags from a JSON job record
    Tags {
        /// Job record JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = jobfacet_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let custom;
    let normalizer: &Normalizer = match &config.vocab_path {
        Some(path) => {
            let vocab = jobfacet_core::load_vocab(path)
                .with_context(|| format!("failed to load vocabulary {}", path.display()))?;
            custom = Normalizer::with_overrides(&vocab)?;
            &custom
        }
        None => Normalizer::builtin(),
    };
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Parse { file } => text::run_parse(file.as_deref()),
        Commands::Sections { file } => text::run_sections(file.as_deref()),
        Commands::Preview { file, max_len } => {
            text::run_preview(file.as_deref(), max_len.unwrap_or(config.preview_max_len))
        }
        Commands::Format { dimension, values } => {
            filters::run_format(normalizer, dimension, values, &config.location_fallback)
        }
        Commands::Reverse { dimension, labels } => {
            filters::run_reverse(normalizer, dimension, labels)
        }
        Commands::Facets { dimension, file } => {
            filters::run_facets(normalizer, dimension, file.as_deref())
        }
        Commands::Predicates { file } => filters::run_predicates(normalizer, file.as_deref()),
        Commands::Tags { file } => filters::run_tags(normalizer, file.as_deref()),
    }
}
