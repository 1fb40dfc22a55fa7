// src/render/table.rs
// =============================================================================
// Human-readable output built with the `tabled` crate.
//
// - write_summary: one row per repository (default view)
// - write_detail:  a heading plus a PR/issue table per repository (--verbose)
//
// Colors come from `console`, which turns them off on its own when stdout is
// not a terminal, so piping the output stays clean. Cells are styled before
// they reach tabled; its `ansi` feature keeps widths right.
//
// Column colors:
//   summary: Repository cyan, URL magenta
//   detail:  Type cyan, Title magenta, URL green
// =============================================================================

use std::io::Write;

use anyhow::Result;
use console::style;
use tabled::settings::object::Columns;
use tabled::settings::{Panel, Style, Width};
use tabled::{Table, Tabled};

use crate::contributions::{Contribution, ContributionItem};

// Long titles wrap instead of pushing the URL column off screen
const TITLE_WIDTH: usize = 40;

#[derive(Tabled)]
struct RepositoryRow {
    #[tabled(rename = "Repository")]
    name: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl RepositoryRow {
    fn new(contribution: &Contribution) -> Self {
        RepositoryRow {
            name: style(&contribution.name).cyan().to_string(),
            url: style(&contribution.url).magenta().to_string(),
        }
    }
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl ItemRow {
    fn new(kind: &str, item: &ContributionItem) -> Self {
        ItemRow {
            kind: style(kind).cyan().to_string(),
            title: style(&item.title).magenta().to_string(),
            url: style(&item.url).green().to_string(),
        }
    }
}

/// Prints a titled table listing every repository and its URL.
pub fn write_summary<W: Write>(
    out: &mut W,
    username: &str,
    contributions: &[Contribution],
) -> Result<()> {
    let mut table = Table::new(contributions.iter().map(RepositoryRow::new));
    table.with(Style::rounded()).with(Panel::header(format!(
        "Third-Party GitHub Contributions for {}",
        username
    )));

    writeln!(out)?;
    writeln!(out, "{}", table)?;
    writeln!(out)?;
    Ok(())
}

/// Prints, for each repository, the PRs and then the issues the user authored.
pub fn write_detail<W: Write>(
    out: &mut W,
    username: &str,
    contributions: &[Contribution],
) -> Result<()> {
    if contributions.is_empty() {
        writeln!(out, "No third-party contributions found for {}", username)?;
        return Ok(());
    }

    for contribution in contributions {
        let heading = format!("Contributions to {}", contribution.name);
        writeln!(out, "{}", style(heading).bold().cyan())?;

        if contribution.prs.is_empty() && contribution.issues.is_empty() {
            writeln!(out, "No authored pull requests or issues")?;
        } else {
            let rows = contribution
                .prs
                .iter()
                .map(|pr| ItemRow::new("PR", pr))
                .chain(contribution.issues.iter().map(|issue| ItemRow::new("Issue", issue)));

            let mut table = Table::new(rows);
            table
                .with(Style::rounded())
                .modify(Columns::single(1), Width::wrap(TITLE_WIDTH));
            writeln!(out, "{}", table)?;
        }

        // Blank line between repositories
        writeln!(out)?;
    }

    Ok(())
}
