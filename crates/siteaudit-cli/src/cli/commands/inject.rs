//! `siteaudit inject-css` / `inject-js` – batch reference injection.

use anyhow::Result;
use siteaudit_core::config::SiteProfile;
use siteaudit_core::rewrite::inject::{self, InjectStatus, PageResult};
use std::path::Path;

pub fn run_inject_stylesheets(site_root: &Path, profile: &SiteProfile, json: bool) -> Result<()> {
    let results = inject::inject_stylesheet(site_root, profile)?;
    print_results(&results, json)
}

pub fn run_inject_scripts(site_root: &Path, profile: &SiteProfile, json: bool) -> Result<()> {
    let results = inject::inject_script(site_root, profile)?;
    print_results(&results, json)
}

fn print_results(results: &[PageResult], json: bool) -> Result<()> {
    for result in results {
        match result.status {
            InjectStatus::Updated => {
                println!("📝 Updating {}", result.page);
                println!("✅ {} updated", result.page);
            }
            InjectStatus::AlreadyApplied => {
                println!("📝 Updating {}", result.page);
                println!("ℹ️  {} already up to date", result.page);
            }
            InjectStatus::FileMissing => println!("⚠️  File not found: {}", result.page),
            InjectStatus::AnchorMissing => {
                println!("📝 Updating {}", result.page);
                println!("⚠️  Anchor not found in {}", result.page);
            }
        }
    }
    println!();
    println!("🎉 Update complete!");

    if json {
        println!();
        println!("{}", serde_json::to_string_pretty(results)?);
    }
    Ok(())
}
