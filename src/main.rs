use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use yt_jira_import::api::jira::JiraClient;
use yt_jira_import::config::settings::Settings;
use yt_jira_import::import::{source, ImportReport, Importer};
use yt_jira_import::mapping::{tables::MappingTables, IssueMapper};

#[derive(Parser)]
#[command(name = "yt-jira-import")]
#[command(version = "0.1.0")]
#[command(about = "Import a YouTrack issue export into Jira", long_about = None)]
struct Cli {
    /// Zero-based index of the first issue to import; earlier issues are skipped
    #[arg(default_value_t = 0)]
    start_index: usize,

    /// YouTrack export (JSON array of issues)
    #[arg(short, long, default_value = source::DEFAULT_INPUT)]
    input: PathBuf,

    /// Config file (default: ~/.yt-jira-import/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// for debugging purposes
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    println!("{}", "YouTrack → Jira import v0.1.0".bright_cyan().bold());
    println!();

    if let Err(e) = run(&cli).await {
        eprintln!("\n{}", e);
        std::process::exit(1);
    }

    println!();
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let issues = source::load_source_issues(&cli.input)?;

    println!(
        "  {} {} ({} issues)",
        "Source:".bold(),
        cli.input.display(),
        issues.len()
    );
    println!(
        "  {} {} / {}",
        "Target:".bold(),
        settings.jira.url.bright_white(),
        settings.jira.project_key.bright_white()
    );
    if cli.start_index > 0 {
        println!("  {} {}", "Starting at:".bold(), cli.start_index);
    }

    let client = JiraClient::new(
        settings.jira.url.clone(),
        settings.jira.email.clone(),
        settings.jira.api_token.clone(),
    );
    let mapper = IssueMapper::new(MappingTables::default(), settings.jira.project_key.clone());
    let mut importer = Importer::new(Box::new(client), mapper);

    let report = importer.run(&issues, cli.start_index).await;
    print_summary(&report);

    Ok(())
}

fn print_summary(report: &ImportReport) {
    println!();
    println!("{}", "Import finished".cyan().bold());
    println!("  {} {}", "Skipped:".bold(), report.skipped);
    println!("  {} {}", "Processed:".bold(), report.processed);
    println!("  {} {}", "Created:".bold(), report.created.to_string().green());
    if report.failed > 0 {
        println!("  {} {}", "Failed:".bold(), report.failed.to_string().red());
    }
    println!(
        "  {} {} added, {} failed",
        "Comments:".bold(),
        report.comments_added,
        report.comments_failed
    );
    println!(
        "  {} {} done, {} without a Done transition, {} failed",
        "Transitions:".bold(),
        report.transitioned,
        report.transitions_missing,
        report.transitions_failed
    );
}
