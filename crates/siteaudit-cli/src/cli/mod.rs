//! CLI for the siteaudit static-site maintenance tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use siteaudit_core::audit::AssetKind;
use siteaudit_core::config;
use std::path::PathBuf;

use commands::{
    run_audit_assets, run_audit_pages, run_extract, run_inject_scripts, run_inject_stylesheets,
};

/// Top-level CLI for the siteaudit maintenance tool.
#[derive(Debug, Parser)]
#[command(name = "siteaudit")]
#[command(about = "siteaudit: dead-asset auditor and rewriter for a static site", long_about = None)]
pub struct Cli {
    /// Site root directory (contains *.html, css/, js/).
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub site_root: PathBuf,

    /// Site profile TOML. Defaults to the XDG profile, created on first run.
    #[arg(long, global = true, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Also emit the structured result as JSON after the report.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Report used and unused stylesheets.
    AuditCss,

    /// Report used and unused scripts.
    AuditJs,

    /// Report reachable and orphaned pages, categorized, with reclaimable size.
    AuditHtml,

    /// Extract inline <style>/<script> blocks from one page into external files.
    Extract {
        /// Page to clean (e.g. "about.html").
        page: String,
    },

    /// Insert the global stylesheet link into every main page.
    InjectCss,

    /// Insert the global script tag into every main page.
    InjectJs,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let profile = match &cli.profile {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("site root: {}", cli.site_root.display());
        let root = cli.site_root.as_path();

        match cli.command {
            CliCommand::AuditCss => {
                run_audit_assets(root, &profile, AssetKind::Stylesheet, cli.json)?
            }
            CliCommand::AuditJs => run_audit_assets(root, &profile, AssetKind::Script, cli.json)?,
            CliCommand::AuditHtml => run_audit_pages(root, &profile, cli.json)?,
            CliCommand::Extract { page } => run_extract(root, &profile, &page, cli.json)?,
            CliCommand::InjectCss => run_inject_stylesheets(root, &profile, cli.json)?,
            CliCommand::InjectJs => run_inject_scripts(root, &profile, cli.json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
