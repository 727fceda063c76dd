use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dashboard::{AssetSource, CommitLink, Dashboard, commit, load_dashboard, render};
use data_loader::ChangeRef;
use pipeline::{FilterConfig, Level, Selection, SortField};
use std::path::PathBuf;
use std::time::Instant;

/// sm100 - SM-100 benchmark explorer
#[derive(Parser)]
#[command(name = "sm100")]
#[command(about = "Browse SM-100 benchmark results and the issue dataset", long_about = None)]
struct Cli {
    /// Directory holding results.json and SM-100.json
    #[arg(short, long, default_value = "public")]
    data_dir: PathBuf,

    /// Fetch the snapshots from this site instead of --data-dir
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the benchmark results table
    Results {
        /// Column to sort by (descending)
        #[arg(long, default_value_t = SortField::NeedleInHaystack)]
        sort: SortField,

        /// Expand this row (1-based, in sorted order) to list its issues
        #[arg(long)]
        expand: Option<usize>,
    },

    /// Explore the issue dataset
    Dataset {
        /// Only this language ("all" for any)
        #[arg(long, default_value_t = Selection::All)]
        language: Selection,

        /// Only this implication ("all" for any)
        #[arg(long, default_value_t = Selection::All)]
        implication: Selection,

        /// Only entries that name the change that introduced them
        #[arg(long)]
        has_introduced_by: bool,

        /// Minimum severity rating (1-3)
        #[arg(long, default_value_t = Level::Low)]
        min_severity: Level,

        /// Minimum domain expertise rating (1-3)
        #[arg(long, default_value_t = Level::Low)]
        min_domain_expertise: Level,

        /// Minimum difficulty-to-find rating (1-3)
        #[arg(long, default_value_t = Level::Low)]
        min_difficulty_to_find: Level,
    },

    /// List the languages and implications present in the dataset
    Facets,

    /// Render a single "introduced by" reference
    Commit {
        /// Commit hash, tag or note; omit to render a missing reference
        #[arg(long)]
        hash: Option<String>,

        /// Issue URL the reference belongs to
        #[arg(long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so tables on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = match cli.base_url {
        Some(base_url) => AssetSource::Http(base_url),
        None => AssetSource::Directory(cli.data_dir),
    };

    // Dispatch to appropriate command handler; only commands that show data load it
    match cli.command {
        Commands::Results { sort, expand } => handle_results(load(&source).await, sort, expand)?,
        Commands::Dataset {
            language,
            implication,
            has_introduced_by,
            min_severity,
            min_domain_expertise,
            min_difficulty_to_find,
        } => {
            let filters = FilterConfig::new()
                .with_language(language)
                .with_implication(implication)
                .with_require_introduced_by(has_introduced_by)
                .with_min_severity(min_severity)
                .with_min_domain_expertise(min_domain_expertise)
                .with_min_difficulty_to_find(min_difficulty_to_find);
            handle_dataset(load(&source).await, filters)?
        }
        Commands::Facets => handle_facets(load(&source).await)?,
        Commands::Commit { hash, url } => handle_commit(hash, &url)?,
    }

    Ok(())
}

async fn load(source: &AssetSource) -> Dashboard {
    eprintln!("Loading snapshots from {}...", source.describe(""));
    let start = Instant::now();
    let dashboard = load_dashboard(source).await;
    eprintln!("{} Loaded in {:?}", "✓".green(), start.elapsed());
    dashboard
}

/// Handle the 'results' command
fn handle_results(dashboard: Dashboard, sort: SortField, expand: Option<usize>) -> Result<()> {
    let mut view = dashboard.results;
    view.sort_by(sort);

    if let Some(row) = expand {
        let count = view.rows().len();
        if row == 0 || row > count {
            bail!("Row {} out of range (table has {} rows)", row, count);
        }
        view.toggle_row(row - 1);
    }

    println!("{}", format!("SM-100 results (sorted by {})", sort.title()).bold().blue());
    print!("{}", render::results_table(&view));
    Ok(())
}

/// Handle the 'dataset' command
fn handle_dataset(dashboard: Dashboard, filters: FilterConfig) -> Result<()> {
    let mut view = dashboard.dataset;
    tracing::debug!("Dataset filters: {:?}", filters);
    view.set_filters(filters);

    print!("{}", render::dataset_table(&view));
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(dashboard: Dashboard) -> Result<()> {
    let view = &dashboard.dataset;

    println!("{}", "Languages:".bold().blue());
    for language in view.languages() {
        println!("{}{}", "• ".green(), language);
    }

    println!("{}", "Implications:".bold().blue());
    for implication in view.implications() {
        println!("{}{}", "• ".cyan(), implication);
    }
    Ok(())
}

/// Handle the 'commit' command
fn handle_commit(hash: Option<String>, url: &str) -> Result<()> {
    let reference = hash.map(ChangeRef::Text);
    let link = commit::render(reference.as_ref(), url);

    match &link {
        CommitLink::Link { label, href } => println!("{} -> {}", label.green(), href),
        CommitLink::Inert(text) => println!("{}", text),
        CommitLink::Missing => println!("{}", link.to_string().dimmed()),
    }
    Ok(())
}
