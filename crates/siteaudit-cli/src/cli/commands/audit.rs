//! `siteaudit audit-css` / `audit-js` / `audit-html` – read-only usage reports.

use anyhow::Result;
use siteaudit_core::audit::report::{AssetReport, PageReport};
use siteaudit_core::audit::{self, AssetKind};
use siteaudit_core::config::SiteProfile;
use std::path::Path;

pub fn run_audit_assets(
    site_root: &Path,
    profile: &SiteProfile,
    kind: AssetKind,
    json: bool,
) -> Result<()> {
    let audit = audit::audit_assets(site_root, profile, kind)?;
    print!("{}", AssetReport { kind, audit: &audit });
    if json {
        println!();
        println!("{}", serde_json::to_string_pretty(&audit)?);
    }
    Ok(())
}

pub fn run_audit_pages(site_root: &Path, profile: &SiteProfile, json: bool) -> Result<()> {
    let audit = audit::audit_pages(site_root, profile)?;
    print!("{}", PageReport(&audit));
    if json {
        println!();
        println!("{}", serde_json::to_string_pretty(&audit)?);
    }
    Ok(())
}
