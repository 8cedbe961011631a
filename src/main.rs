//! `gh-org-repos` — list a GitHub organization's public repositories.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load transport config ([`gh_org_repos::config::load_config`]).
//! 3. Fetch the organization and its repository list ([`gh_org_repos::OrgClient`]).
//! 4. Filter by `--license` and render the requested report.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::{Cli, ReportFormat};
use gh_org_repos::config::load_config;
use gh_org_repos::logging::init_tracing;
use gh_org_repos::report;
use gh_org_repos::OrgClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    let fetcher = config.api.fetcher()?;
    let mut client = OrgClient::new(cli.org.as_str(), fetcher).with_base_url(config.api.base_url.as_str());

    let license = cli.license.as_deref();
    let repos = client
        .public_repo_details(license)
        .await
        .with_context(|| format!("failed to list repositories for {}", cli.org))?;

    info!(org = %cli.org, license = ?license, count = repos.len(), "listed repositories");

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&cli.org, license, &repos, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&repos)?);
        }
    }

    Ok(())
}
