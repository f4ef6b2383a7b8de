//! Read-only usage audits over the site's asset directories.
//!
//! An asset is "used" iff its filename appears among the references
//! collected from the profile's main pages. Missing main pages are skipped;
//! any other read failure aborts the whole audit.

pub mod report;

use crate::classify::{self, PageCategory, UNUSED_CATEGORIES};
use crate::config::SiteProfile;
use crate::inventory;
use crate::scan;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Asset family an audit runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl AssetKind {
    pub fn dir(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => "css",
            AssetKind::Script => "js",
        }
    }

    pub fn ext(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => ".css",
            AssetKind::Script => ".js",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => "CSS",
            AssetKind::Script => "JavaScript",
        }
    }

    /// Short form used in the summary table.
    pub fn short(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => "CSS",
            AssetKind::Script => "JS",
        }
    }

    fn refs(self, content: &str) -> Vec<String> {
        match self {
            AssetKind::Stylesheet => scan::stylesheet_refs(content),
            AssetKind::Script => scan::script_refs(content),
        }
    }
}

/// References collected from one main page, in document order.
#[derive(Debug, Serialize)]
pub struct PageRefs {
    pub page: String,
    pub refs: Vec<String>,
}

/// An unreferenced file and its on-disk size, if it still exists.
#[derive(Debug, Serialize)]
pub struct UnusedFile {
    pub name: String,
    pub size_bytes: Option<u64>,
}

/// Result of a stylesheet or script audit. `used` and `unused` partition
/// the inventory.
#[derive(Debug, Serialize)]
pub struct AssetAudit {
    pub inventory: Vec<String>,
    pub per_page: Vec<PageRefs>,
    pub used: Vec<String>,
    pub unused: Vec<UnusedFile>,
    pub reclaimable_bytes: u64,
}

/// Audit one asset directory against the profile's main pages.
pub fn audit_assets(site_root: &Path, profile: &SiteProfile, kind: AssetKind) -> Result<AssetAudit> {
    let inventory = inventory::list_files(&site_root.join(kind.dir()), kind.ext())?;

    let mut referenced = BTreeSet::new();
    let mut per_page = Vec::new();
    for page in &profile.main_pages {
        let Some(content) = read_page(site_root, page)? else {
            tracing::debug!("main page {page} not found, skipping");
            continue;
        };
        let refs = kind.refs(&content);
        referenced.extend(refs.iter().cloned());
        per_page.push(PageRefs {
            page: page.clone(),
            refs,
        });
    }

    let used: Vec<String> = inventory
        .iter()
        .filter(|name| referenced.contains(*name))
        .cloned()
        .collect();
    let unused: Vec<UnusedFile> = inventory
        .iter()
        .filter(|name| !referenced.contains(*name))
        .map(|name| UnusedFile {
            size_bytes: inventory::file_size(&site_root.join(kind.dir()).join(name)),
            name: name.clone(),
        })
        .collect();
    let reclaimable_bytes = unused.iter().filter_map(|u| u.size_bytes).sum();

    Ok(AssetAudit {
        inventory,
        per_page,
        used,
        unused,
        reclaimable_bytes,
    })
}

/// Unused-script counts bucketed by filename substring. A name matching
/// several buckets is counted in each; `other` means none matched.
#[derive(Debug, Default, Serialize)]
pub struct ScriptBreakdown {
    pub custom: usize,
    pub extracted: usize,
    pub animations: usize,
    pub webflow: usize,
    pub other: usize,
}

pub fn script_breakdown(unused: &[UnusedFile]) -> ScriptBreakdown {
    let mut breakdown = ScriptBreakdown::default();
    for file in unused {
        let mut tagged = false;
        if file.name.contains("custom") {
            breakdown.custom += 1;
            tagged = true;
        }
        if file.name.contains("extracted") {
            breakdown.extracted += 1;
            tagged = true;
        }
        if file.name.contains("animations") {
            breakdown.animations += 1;
            tagged = true;
        }
        if file.name.contains("webflow") {
            breakdown.webflow += 1;
            tagged = true;
        }
        if !tagged {
            breakdown.other += 1;
        }
    }
    breakdown
}

/// One category bucket of unused pages.
#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: PageCategory,
    pub pages: Vec<UnusedFile>,
}

/// Result of the HTML page audit. The used set is the union of the main
/// pages and the internal links they carry; categorized groups partition
/// the unused pages.
#[derive(Debug, Serialize)]
pub struct PageAudit {
    pub inventory: Vec<String>,
    pub internal_links: Vec<String>,
    pub main_count: usize,
    pub used: Vec<String>,
    pub unused_count: usize,
    pub groups: Vec<CategoryGroup>,
    pub safe_to_delete: Vec<String>,
    pub reclaimable_bytes: u64,
}

/// Audit the site's top-level pages against the main-page set plus one hop
/// of internal links.
pub fn audit_pages(site_root: &Path, profile: &SiteProfile) -> Result<PageAudit> {
    let inventory = inventory::list_files(site_root, ".html")?;

    let mut links = BTreeSet::new();
    for page in &profile.main_pages {
        let Some(content) = read_page(site_root, page)? else {
            tracing::debug!("main page {page} not found, skipping");
            continue;
        };
        for link in scan::page_links(&content) {
            if let Some(clean) = scan::normalize_page_link(&link) {
                links.insert(clean);
            }
        }
    }

    let mut used: BTreeSet<String> = profile.main_pages.iter().cloned().collect();
    used.extend(links.iter().cloned());

    let unused: Vec<(String, Option<u64>, PageCategory)> = inventory
        .iter()
        .filter(|name| !used.contains(*name))
        .map(|name| {
            (
                name.clone(),
                inventory::file_size(&site_root.join(name)),
                classify::classify(profile, name),
            )
        })
        .collect();

    let groups: Vec<CategoryGroup> = UNUSED_CATEGORIES
        .iter()
        .map(|&category| CategoryGroup {
            category,
            pages: unused
                .iter()
                .filter(|(_, _, cat)| *cat == category)
                .map(|(name, size_bytes, _)| UnusedFile {
                    name: name.clone(),
                    size_bytes: *size_bytes,
                })
                .collect(),
        })
        .collect();

    let safe_to_delete: Vec<String> = unused
        .iter()
        .filter(|(_, _, cat)| cat.safe_to_delete())
        .map(|(name, _, _)| name.clone())
        .collect();
    let reclaimable_bytes = unused
        .iter()
        .filter(|(_, _, cat)| cat.safe_to_delete())
        .filter_map(|(_, size, _)| *size)
        .sum();

    Ok(PageAudit {
        main_count: profile.main_pages.len(),
        internal_links: links.into_iter().collect(),
        used: used.into_iter().collect(),
        unused_count: unused.len(),
        groups,
        safe_to_delete,
        reclaimable_bytes,
        inventory,
    })
}

/// Read one main page, treating nonexistence as "skip" and any other
/// failure (e.g. permissions) as fatal for the run.
fn read_page(site_root: &Path, page: &str) -> Result<Option<String>> {
    let path = site_root.join(page);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}
