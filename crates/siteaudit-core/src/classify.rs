//! Page categorization against the profile's filename tables.

use crate::config::SiteProfile;
use serde::Serialize;

/// Category a page falls into. Every page belongs to exactly one; filenames
/// in none of the profile tables are `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageCategory {
    Main,
    Backup,
    Test,
    Portfolio,
    Filter,
    Utility,
    Other,
}

impl PageCategory {
    /// Backup and test pages are the only ones the auditor considers safe to
    /// delete; the remaining buckets may be reached by JavaScript or be
    /// legally required.
    pub fn safe_to_delete(self) -> bool {
        matches!(self, PageCategory::Backup | PageCategory::Test)
    }
}

/// Buckets reported for unused pages, in report order.
pub const UNUSED_CATEGORIES: [PageCategory; 6] = [
    PageCategory::Backup,
    PageCategory::Test,
    PageCategory::Portfolio,
    PageCategory::Filter,
    PageCategory::Utility,
    PageCategory::Other,
];

pub fn classify(profile: &SiteProfile, page: &str) -> PageCategory {
    let has = |table: &[String]| table.iter().any(|entry| entry == page);
    if has(&profile.main_pages) {
        PageCategory::Main
    } else if has(&profile.backup_pages) {
        PageCategory::Backup
    } else if has(&profile.test_pages) {
        PageCategory::Test
    } else if has(&profile.portfolio_pages) {
        PageCategory::Portfolio
    } else if has(&profile.filter_pages) {
        PageCategory::Filter
    } else if has(&profile.utility_pages) {
        PageCategory::Utility
    } else {
        PageCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_tables() {
        let profile = SiteProfile::default();
        assert_eq!(classify(&profile, "index.html"), PageCategory::Main);
        assert_eq!(
            classify(&profile, "index-original.html"),
            PageCategory::Backup
        );
        assert_eq!(
            classify(&profile, "test-animations.html"),
            PageCategory::Test
        );
        assert_eq!(classify(&profile, "netflix.html"), PageCategory::Portfolio);
        assert_eq!(
            classify(&profile, "work@filter=mobile.html"),
            PageCategory::Filter
        );
        assert_eq!(classify(&profile, "privacy.html"), PageCategory::Utility);
    }

    #[test]
    fn classify_falls_back_to_other() {
        let profile = SiteProfile::default();
        assert_eq!(classify(&profile, "draft.html"), PageCategory::Other);
        assert_eq!(classify(&profile, "about-clean.html"), PageCategory::Other);
    }

    #[test]
    fn safe_to_delete_is_backup_and_test_only() {
        for cat in UNUSED_CATEGORIES {
            let expected = matches!(cat, PageCategory::Backup | PageCategory::Test);
            assert_eq!(cat.safe_to_delete(), expected);
        }
    }
}
