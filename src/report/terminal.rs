use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::license::classify_key;
use crate::models::{LicenseRisk, Repo};

/// Render a colored terminal report.
pub fn render(org: &str, license: Option<&str>, repos: &[Repo], verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        for repo in repos {
            println!("{}", repo.name);
        }
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "gh-org-repos".bold(),
        env!("CARGO_PKG_VERSION")
    );
    match license {
        Some(key) => println!(" Organization: {}  License: {}\n", org, key.cyan()),
        None => println!(" Organization: {}\n", org),
    }

    if repos.is_empty() {
        println!(" {} No matching public repositories.\n", "→".cyan());
        return Ok(());
    }

    println!("{}", build_table(repos, verbose));
    println!("\n {}\n", summary_line(repos));

    Ok(())
}

fn build_table(repos: &[Repo], verbose: bool) -> Table {
    let mut header = vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("License").add_attribute(Attribute::Bold),
        Cell::new("Risk").add_attribute(Attribute::Bold),
        Cell::new("Stars").add_attribute(Attribute::Bold),
    ];
    if verbose {
        header.push(Cell::new("Fork").add_attribute(Attribute::Bold));
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for repo in repos {
        let key = repo.license_key().unwrap_or("none");
        let risk = classify_key(key);

        let mut row = vec![
            Cell::new(&repo.name),
            Cell::new(key),
            Cell::new(risk.to_string()).fg(risk_color(risk)),
            Cell::new(repo.stargazers_count).set_alignment(CellAlignment::Right),
        ];
        if verbose {
            let fork = if repo.fork { "yes" } else { "" };
            row.push(Cell::new(fork).set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }

    table
}

fn risk_color(risk: LicenseRisk) -> Color {
    match risk {
        LicenseRisk::Permissive => Color::Green,
        LicenseRisk::WeakCopyleft => Color::Yellow,
        LicenseRisk::StrongCopyleft => Color::Red,
        LicenseRisk::Unknown => Color::DarkGrey,
    }
}

/// `"Total: N  [apache-2.0 (4), none (2), mit (1)]"` with the three most common keys.
fn summary_line(repos: &[Repo]) -> String {
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for repo in repos {
        *counts.entry(repo.license_key().unwrap_or("none")).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let top: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(key, count)| format!("{} ({})", key, count))
        .collect();

    format!("Total: {}  [{}]", repos.len(), top.join(", "))
}
