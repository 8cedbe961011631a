use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gh-org-repos",
    about = "List a GitHub organization's public repositories",
    version
)]
pub struct Cli {
    /// Organization login (e.g. `google`)
    pub org: String,

    /// Only list repositories with this license key (e.g. `apache-2.0`)
    #[arg(long, value_name = "KEY")]
    pub license: Option<String>,

    /// Config file [default: ./.gh-org-repos/config.toml, fallback ~/.config/gh-org-repos/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show extra columns and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print repository names
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["gh-org-repos", "google"]).unwrap();
        assert_eq!(cli.org, "google");
        assert!(cli.license.is_none());
        assert!(matches!(cli.report, ReportFormat::Terminal));
    }

    #[test]
    fn test_parse_license_and_json() {
        let cli = Cli::try_parse_from([
            "gh-org-repos",
            "google",
            "--license",
            "apache-2.0",
            "--report",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.license.as_deref(), Some("apache-2.0"));
        assert!(matches!(cli.report, ReportFormat::Json));
    }

    #[test]
    fn test_org_is_required() {
        assert!(Cli::try_parse_from(["gh-org-repos"]).is_err());
    }
}
