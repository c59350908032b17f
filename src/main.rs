use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cvanalyzer::report::{self, EntryFilter, SortOrder};
use cvanalyzer::{Catalog, Config, SkillComparator, SkillExtractor};

#[derive(Parser, Debug)]
#[command(name = "cvanalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Extract developer skills from CV text and compare skill sets")]
struct Args {
    /// Path to a custom catalog JSON file
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract skills from a plain-text CV
    Extract {
        /// CV text file to analyze
        input: PathBuf,

        /// Output format (text, json, markdown, html)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare the skills found in two plain-text CVs
    Compare {
        /// CV text file for side A
        cv_a: PathBuf,

        /// CV text file for side B
        cv_b: PathBuf,

        /// Output format (text, json, markdown)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Entry order: difference, alphabetical
        #[arg(long, default_value = "difference")]
        sort: String,

        /// Entries to keep: all, differences, exclusive
        #[arg(long, default_value = "all")]
        filter: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("cvanalyzer=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    let catalog_path = args.catalog.as_deref().or(config.catalog_path.as_deref());
    let catalog = Arc::new(load_catalog(catalog_path)?);
    tracing::info!("Catalog loaded: {} keywords", catalog.skills().len());

    match args.command {
        Command::Extract {
            input,
            format,
            output,
        } => {
            let text = fs::read_to_string(&input)?;
            let extractor = SkillExtractor::new(catalog);
            let skills = extractor.extract(&text);
            tracing::info!("Found {} skills in {}", skills.len(), input.display());

            let format = format.unwrap_or_else(|| config.default_format.clone());
            let rendered = match format.as_str() {
                "json" => report::skills_json(&skills)?,
                "markdown" => report::skills_markdown(&skills),
                "html" => report::skills_html(&skills),
                _ => report::skills_text(&skills),
            };

            write_output(&rendered, output.as_deref())?;
        }
        Command::Compare {
            cv_a,
            cv_b,
            format,
            output,
            sort,
            filter,
        } => {
            let text_a = fs::read_to_string(&cv_a)?;
            let text_b = fs::read_to_string(&cv_b)?;

            let extractor = SkillExtractor::new(catalog);
            let skills_a = extractor.extract(&text_a);
            let skills_b = extractor.extract(&text_b);
            tracing::info!(
                "Comparing {} skills from {} against {} skills from {}",
                skills_a.len(),
                cv_a.display(),
                skills_b.len(),
                cv_b.display()
            );

            let result = SkillComparator::new().compare(&skills_a, &skills_b);

            let sort = match sort.as_str() {
                "alphabetical" => SortOrder::Alphabetical,
                _ => SortOrder::Difference,
            };
            let filter = match filter.as_str() {
                "differences" => EntryFilter::Differences,
                "exclusive" => EntryFilter::Exclusive,
                _ => EntryFilter::All,
            };

            let format = format.unwrap_or_else(|| config.default_format.clone());
            let rendered = match format.as_str() {
                "json" => report::comparison_json(&result)?,
                "markdown" => report::comparison_markdown(&result, sort, filter),
                _ => report::comparison_text(&result, sort, filter),
            };

            write_output(&rendered, output.as_deref())?;
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            tracing::info!("Loading custom catalog from {}", path.display());
            let raw = fs::read_to_string(path)?;
            Ok(Catalog::from_json(&raw)?)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn write_output(rendered: &str, path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = path {
        fs::write(path, rendered)?;
        tracing::info!("Output written to: {}", path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
