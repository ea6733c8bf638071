// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use chrono::Local;
use clap::{ArgAction, Parser};
use repo_scraper::utils::logging::{
    format_error, format_heading, format_success, format_warning, init_logger,
};
use repo_scraper::{
    Config, Exporters, OutputFormat, PaginatingCollector, ProgressTracker, RepositoryFilter,
    RepositorySummary, Target, TargetKind, Validator, export_file_stem,
};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "repo_scraper")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Export every repository of a GitHub user or organization", long_about = None)]
#[command(after_help = "Examples:\n  repo_scraper org noi-techpark\n  repo_scraper user samnart1 --token ghp_xxxx --output both")]
struct Cli {
    /// Whether NAME is a user or an organization (user|org)
    kind: String,

    /// GitHub username or organization name
    name: String,

    /// GitHub personal access token (recommended)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Output format (json|csv|both)
    #[arg(short, long, value_name = "FORMAT")]
    output: Option<String>,

    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    #[arg(long, action = ArgAction::SetTrue)]
    include_private: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    exclude_forks: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    include_archived: bool,

    /// Write single-line JSON
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    let mut config =
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?;
    apply_overrides(&mut config, &cli);

    let kind: TargetKind = cli.kind.parse()?;
    Validator::validate_target_name(&cli.name)?;
    let target = Target::new(kind, cli.name.clone());

    let format = match config.output.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            return Ok(());
        }
    };

    if config.api.token.is_none() {
        warn!("No GitHub token supplied; anonymous requests are heavily rate limited");
    }

    cmd_scrape(&config, &target, format, cli.color).await
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(token) = cli.token.as_ref().filter(|t| !t.is_empty()) {
        config.api.token = Some(token.clone());
    }
    if let Some(output) = &cli.output {
        config.output.format = output.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if cli.compact {
        config.output.pretty_json = false;
    }

    config.filter.include_private |= cli.include_private;
    config.filter.include_forks &= !cli.exclude_forks;
    config.filter.include_archived |= cli.include_archived;
}

async fn cmd_scrape(
    config: &Config,
    target: &Target,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    info!("Scraping repositories for {}: {}...", target.kind, target.name);

    let collector = PaginatingCollector::from_config(&config.api)
        .context("Failed to create GitHub client")?
        .with_progress(ProgressTracker::with_color(color));

    let repos = collector
        .collect(target)
        .await
        .context("Error scraping repositories")?;

    let stats = collector.stats();
    info!(
        "Fetched {} repositories in {} pages ({:.2}s, {:.1} per page)",
        stats.repositories_fetched,
        stats.pages_fetched,
        stats.duration.as_secs_f64(),
        stats.average_page_size()
    );

    let filter = RepositoryFilter::from(&config.filter);
    let repos = filter.apply(&repos);
    let removed = stats.repositories_fetched - repos.len();
    if removed > 0 {
        info!("Filtered out {} repositories", removed);
    }

    let summary = RepositorySummary::from_repositories(&repos);
    println!("\n{}", format_heading(&summary.format(&target.name)));
    if repos.is_empty() {
        println!("{}", format_warning("No repositories left to export"));
    }

    let stem = export_file_stem(target, Local::now().naive_local());
    let exporters = Exporters::new(&config.output.directory, config.output.pretty_json);

    for outcome in exporters.export(format, &repos, &stem) {
        match outcome.result {
            Ok(path) => println!(
                "{}",
                format_success(&format!("Repositories saved to {}", path.display()))
            ),
            Err(e) => {
                error!("{} export failed: {}", outcome.kind, e);
                eprintln!(
                    "{}",
                    format_error(&format!("Error saving {}: {}", outcome.kind, e))
                );
            }
        }
    }

    Ok(())
}
