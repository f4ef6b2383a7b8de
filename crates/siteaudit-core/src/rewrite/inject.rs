//! Batch reference injection across the profile's main pages.
//!
//! Each page is handled in isolation: a missing file or anchor is reported
//! and skipped while the batch moves on, unlike the audits where an
//! unreadable page aborts the run. The marker check runs against the
//! freshly read content, so a second invocation is a byte-for-byte no-op.

use super::atomic::write_atomic;
use crate::config::SiteProfile;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What happened to one page of an injection batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectStatus {
    /// Tag inserted and the file rewritten in place.
    Updated,
    /// Marker already present; file left byte-for-byte unchanged.
    AlreadyApplied,
    /// Page file does not exist.
    FileMissing,
    /// No configured anchor found in the page.
    AnchorMissing,
}

#[derive(Debug, Serialize)]
pub struct PageResult {
    pub page: String,
    pub status: InjectStatus,
}

/// Single-page edit decision, computed on content alone so it can be tested
/// without touching disk.
enum InjectEdit {
    Rewritten(String),
    AlreadyApplied,
    AnchorMissing,
}

fn stylesheet_edit(profile: &SiteProfile, content: &str) -> InjectEdit {
    let inject = &profile.inject;
    let Some(anchor) = inject
        .css_anchors
        .iter()
        .find(|a| content.contains(a.as_str()))
    else {
        return InjectEdit::AnchorMissing;
    };
    if content.contains(&inject.css_marker) {
        return InjectEdit::AlreadyApplied;
    }
    let replacement = format!("{anchor}\n  {}", inject.css_tag);
    InjectEdit::Rewritten(content.replace(anchor.as_str(), &replacement))
}

fn script_edit(profile: &SiteProfile, content: &str) -> InjectEdit {
    let inject = &profile.inject;
    if !content.contains(&inject.js_anchor) {
        return InjectEdit::AnchorMissing;
    }
    if content.contains(&inject.js_marker) {
        return InjectEdit::AlreadyApplied;
    }
    // The new tag goes on the line before the anchor; the anchor itself is
    // left as the legacy documents wrote it.
    let replacement = format!("{}\n  {}", inject.js_tag, inject.js_anchor);
    InjectEdit::Rewritten(content.replace(inject.js_anchor.as_str(), &replacement))
}

fn run_batch(
    site_root: &Path,
    profile: &SiteProfile,
    edit: impl Fn(&SiteProfile, &str) -> InjectEdit,
) -> Result<Vec<PageResult>> {
    let mut results = Vec::new();
    for page in &profile.main_pages {
        let path = site_root.join(page);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                results.push(PageResult {
                    page: page.clone(),
                    status: InjectStatus::FileMissing,
                });
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        let status = match edit(profile, &content) {
            InjectEdit::Rewritten(new_content) => {
                write_atomic(&path, &new_content)?;
                tracing::info!("updated {page}");
                InjectStatus::Updated
            }
            InjectEdit::AlreadyApplied => InjectStatus::AlreadyApplied,
            InjectEdit::AnchorMissing => {
                tracing::warn!("no anchor found in {page}");
                InjectStatus::AnchorMissing
            }
        };
        results.push(PageResult {
            page: page.clone(),
            status,
        });
    }
    Ok(results)
}

/// Insert the global stylesheet link into every main page that lacks it.
pub fn inject_stylesheet(site_root: &Path, profile: &SiteProfile) -> Result<Vec<PageResult>> {
    run_batch(site_root, profile, stylesheet_edit)
}

/// Insert the global script tag into every main page that lacks it.
pub fn inject_script(site_root: &Path, profile: &SiteProfile) -> Result<Vec<PageResult>> {
    run_batch(site_root, profile, script_edit)
}
