//! Human-readable report rendering.
//!
//! Section order is part of the contract: discovery listing, per-page
//! detail, summary table, categorized unused listing, reclaimable total.

use crate::audit::{script_breakdown, AssetAudit, AssetKind, PageAudit};
use crate::classify::PageCategory;
use std::fmt;

fn kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

fn write_file_line(
    f: &mut fmt::Formatter<'_>,
    icon: &str,
    name: &str,
    size_bytes: Option<u64>,
    note: &str,
) -> fmt::Result {
    match size_bytes {
        Some(bytes) => writeln!(f, "   {icon} {name} ({:.1} KB){note}", kb(bytes)),
        None => writeln!(f, "   {icon} {name} (file not found){note}"),
    }
}

/// Renders a stylesheet/script audit in the fixed report order.
pub struct AssetReport<'a> {
    pub kind: AssetKind,
    pub audit: &'a AssetAudit,
}

impl fmt::Display for AssetReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let audit = self.audit;
        let kind = self.kind;

        writeln!(f, "📁 {} files found:", kind.label())?;
        for name in &audit.inventory {
            writeln!(f, "   - {name}")?;
        }

        writeln!(f)?;
        writeln!(f, "🔍 Scanning {} references:", kind.label())?;
        for page in &audit.per_page {
            writeln!(f)?;
            writeln!(f, "📄 {}:", page.page)?;
            for r in &page.refs {
                writeln!(f, "   ✅ {r}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "📊 Summary:")?;
        writeln!(f, "   Total {}: {}", kind.short(), audit.inventory.len())?;
        writeln!(f, "   Used {}: {}", kind.short(), audit.used.len())?;
        writeln!(f, "   Unused {}: {}", kind.short(), audit.unused.len())?;

        if audit.unused.is_empty() {
            writeln!(f)?;
            writeln!(f, "✅ No unused {} files found!", kind.label())?;
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "🗑️  Unused {} files:", kind.label())?;
        for file in &audit.unused {
            write_file_line(f, "❌", &file.name, file.size_bytes, "")?;
        }

        writeln!(f)?;
        writeln!(f, "💾 Reclaimable space: {:.1} KB", kb(audit.reclaimable_bytes))?;

        if kind == AssetKind::Script {
            let b = script_breakdown(&audit.unused);
            writeln!(f)?;
            writeln!(f, "📋 Unused file categories:")?;
            if b.custom > 0 {
                writeln!(f, "   🎨 Custom: {} files", b.custom)?;
            }
            if b.extracted > 0 {
                writeln!(f, "   📤 Extracted: {} files", b.extracted)?;
            }
            if b.animations > 0 {
                writeln!(f, "   🎬 Animations: {} files", b.animations)?;
            }
            if b.webflow > 0 {
                writeln!(f, "   🌊 Webflow: {} files", b.webflow)?;
            }
            if b.other > 0 {
                writeln!(f, "   📦 Other: {} files", b.other)?;
            }
        }

        Ok(())
    }
}

fn category_heading(category: PageCategory) -> (&'static str, &'static str) {
    match category {
        PageCategory::Main => ("📄", "Main pages"),
        PageCategory::Backup => ("💾", "Backup pages"),
        PageCategory::Test => ("🧪", "Test pages"),
        PageCategory::Portfolio => ("🎨", "Portfolio pages"),
        PageCategory::Filter => ("🔍", "Filter pages"),
        PageCategory::Utility => ("📄", "Utility pages"),
        PageCategory::Other => ("❓", "Other pages"),
    }
}

/// Per-line icon and trailing annotation for a category's pages. The ⚠️
/// buckets are excluded from the safe-to-delete total.
fn category_line(category: PageCategory) -> (&'static str, &'static str) {
    match category {
        PageCategory::Portfolio => ("⚠️ ", " - maybe used via work.html"),
        PageCategory::Filter => ("⚠️ ", " - maybe used via JavaScript"),
        PageCategory::Utility => ("⚠️ ", " - maybe required legally"),
        _ => ("❌", ""),
    }
}

/// Renders the HTML page audit in the fixed report order.
pub struct PageReport<'a>(pub &'a PageAudit);

impl fmt::Display for PageReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let audit = self.0;

        writeln!(f, "📁 HTML pages found:")?;
        for name in &audit.inventory {
            writeln!(f, "   - {name}")?;
        }

        writeln!(f)?;
        writeln!(f, "🔗 Internal links found in main pages:")?;
        for link in &audit.internal_links {
            writeln!(f, "   - {link}")?;
        }

        writeln!(f)?;
        writeln!(f, "📊 Summary:")?;
        writeln!(f, "   Total HTML pages: {}", audit.inventory.len())?;
        writeln!(f, "   Main pages: {}", audit.main_count)?;
        writeln!(f, "   Linked pages: {}", audit.internal_links.len())?;
        writeln!(f, "   Used pages: {}", audit.used.len())?;
        writeln!(f, "   Unused pages: {}", audit.unused_count)?;

        if audit.unused_count == 0 {
            writeln!(f)?;
            writeln!(f, "✅ No unused HTML pages found!")?;
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "📋 Categorization of unused pages:")?;
        for group in &audit.groups {
            if group.pages.is_empty() {
                continue;
            }
            let (emoji, title) = category_heading(group.category);
            let (icon, note) = category_line(group.category);
            writeln!(f)?;
            writeln!(f, "{emoji} {title} ({}):", group.pages.len())?;
            for page in &group.pages {
                write_file_line(f, icon, &page.name, page.size_bytes, note)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "💾 Reclaimable space (safe-to-delete pages): {:.1} KB",
            kb(audit.reclaimable_bytes)
        )?;

        if !audit.safe_to_delete.is_empty() {
            writeln!(f)?;
            writeln!(f, "✅ Pages safe to delete:")?;
            for page in &audit.safe_to_delete {
                writeln!(f, "   🗑️  {page}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{PageRefs, UnusedFile};

    fn sample_audit() -> AssetAudit {
        AssetAudit {
            inventory: vec!["a.css".into(), "b.css".into()],
            per_page: vec![PageRefs {
                page: "index.html".into(),
                refs: vec!["a.css".into()],
            }],
            used: vec!["a.css".into()],
            unused: vec![UnusedFile {
                name: "b.css".into(),
                size_bytes: Some(2048),
            }],
            reclaimable_bytes: 2048,
        }
    }

    #[test]
    fn asset_report_section_order() {
        let audit = sample_audit();
        let out = AssetReport {
            kind: AssetKind::Stylesheet,
            audit: &audit,
        }
        .to_string();

        let discovery = out.find("📁 CSS files found:").unwrap();
        let detail = out.find("📄 index.html:").unwrap();
        let summary = out.find("📊 Summary:").unwrap();
        let listing = out.find("❌ b.css (2.0 KB)").unwrap();
        let total = out.find("💾 Reclaimable space: 2.0 KB").unwrap();
        assert!(discovery < detail && detail < summary && summary < listing && listing < total);
    }

    #[test]
    fn asset_report_missing_size_sentinel() {
        let mut audit = sample_audit();
        audit.unused[0].size_bytes = None;
        audit.reclaimable_bytes = 0;
        let out = AssetReport {
            kind: AssetKind::Stylesheet,
            audit: &audit,
        }
        .to_string();
        assert!(out.contains("❌ b.css (file not found)"));
    }

    #[test]
    fn asset_report_happy_path() {
        let audit = AssetAudit {
            inventory: vec!["a.css".into()],
            per_page: vec![],
            used: vec!["a.css".into()],
            unused: vec![],
            reclaimable_bytes: 0,
        };
        let out = AssetReport {
            kind: AssetKind::Stylesheet,
            audit: &audit,
        }
        .to_string();
        assert!(out.contains("✅ No unused CSS files found!"));
        assert!(!out.contains("Reclaimable"));
    }

    #[test]
    fn script_report_includes_breakdown() {
        let audit = AssetAudit {
            inventory: vec!["old-custom.js".into()],
            per_page: vec![],
            used: vec![],
            unused: vec![UnusedFile {
                name: "old-custom.js".into(),
                size_bytes: Some(100),
            }],
            reclaimable_bytes: 100,
        };
        let out = AssetReport {
            kind: AssetKind::Script,
            audit: &audit,
        }
        .to_string();
        assert!(out.contains("📋 Unused file categories:"));
        assert!(out.contains("🎨 Custom: 1 files"));
        assert!(!out.contains("🌊 Webflow"));
    }
}
