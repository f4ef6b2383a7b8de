use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Anchors and markers for the batch reference injector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectTable {
    /// `<link>` anchor tags tried in order; the first one present in a page wins.
    pub css_anchors: Vec<String>,
    /// Stylesheet name whose presence means the CSS injection already ran.
    pub css_marker: String,
    /// Tag inserted on the line after the chosen CSS anchor.
    pub css_tag: String,
    /// `<script>` open tag used as the JS anchor. The legacy documents leave
    /// this tag unclosed; the injector inserts before it and does not rewrite it.
    pub js_anchor: String,
    /// Script name whose presence means the JS injection already ran.
    pub js_marker: String,
    /// Tag inserted on the line before the JS anchor.
    pub js_tag: String,
}

impl Default for InjectTable {
    fn default() -> Self {
        Self {
            css_anchors: vec![
                r#"<link href="css/animation-fixes.css" rel="stylesheet"/>"#.into(),
                r#"<link href="css/slater-main.css" rel="stylesheet"/>"#.into(),
            ],
            css_marker: "global-custom.css".into(),
            css_tag: r#"<link rel="stylesheet" href="css/global-custom.css" />"#.into(),
            js_anchor: r#"<script src="js/animations-main.js" type="text/javascript">"#.into(),
            js_marker: "global-custom.js".into(),
            js_tag: r#"<script src="js/global-custom.js"></script>"#.into(),
        }
    }
}

/// Per-page insertion anchors for the inline-asset extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractTable {
    /// Page the anchors apply to (e.g. "about.html").
    pub page: String,
    /// `<link>` tag after which the extracted/custom stylesheet links go.
    pub css_anchor: String,
    /// Unclosed `<script>` open tag; rewritten to closed form so the
    /// extracted/custom script tags can follow it.
    pub js_anchor: String,
}

/// Site profile: the page tables, anchors and markers that drive every
/// operation. Loaded from `~/.config/siteaudit/profile.toml` (created with
/// these defaults on first run) or from an explicit `--profile` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Top-level pages considered authoritative when scanning references.
    pub main_pages: Vec<String>,
    /// Pristine copies kept next to the live pages. Safe to delete when unreferenced.
    pub backup_pages: Vec<String>,
    /// Scratch pages left over from animation work. Safe to delete when unreferenced.
    pub test_pages: Vec<String>,
    /// Case-study pages reached through work.html at runtime.
    pub portfolio_pages: Vec<String>,
    /// Pre-rendered filter views of work.html, reached via JavaScript.
    pub filter_pages: Vec<String>,
    /// Pages that may be required regardless of inbound links.
    pub utility_pages: Vec<String>,
    #[serde(default)]
    pub inject: InjectTable,
    #[serde(default)]
    pub extract: Vec<ExtractTable>,
}

impl Default for SiteProfile {
    fn default() -> Self {
        let pages = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        Self {
            main_pages: pages(&[
                "index.html",
                "services.html",
                "work.html",
                "about.html",
                "contact.html",
            ]),
            backup_pages: pages(&[
                "index-original.html",
                "services-original.html",
                "work-original.html",
                "about-original.html",
                "contact-original.html",
            ]),
            test_pages: pages(&["test-animations.html", "test-title-animations.html"]),
            portfolio_pages: pages(&[
                "booksprout-saas.html",
                "booksprout.html",
                "greco-gum.html",
                "investy-club.html",
                "journaler.html",
                "moments.html",
                "netflix.html",
                "nobe-saas.html",
                "nobe.html",
                "ordine.html",
                "poesial.html",
                "zesty.html",
            ]),
            filter_pages: pages(&[
                "work@filter=mobile.html",
                "work@filter=product.html",
                "work@filter=website.html",
            ]),
            utility_pages: pages(&["privacy.html"]),
            inject: InjectTable::default(),
            extract: vec![
                ExtractTable {
                    page: "about.html".into(),
                    css_anchor: r#"<link href="css/slater-main.css" rel="stylesheet"/>"#.into(),
                    js_anchor: r#"<script src="js/animations-about.js" type="text/javascript">"#
                        .into(),
                },
                ExtractTable {
                    page: "contact.html".into(),
                    css_anchor: r#"<link href="css/animation-fixes.css" rel="stylesheet"/>"#.into(),
                    js_anchor: r#"<script src="js/animations-contact.js" type="text/javascript">"#
                        .into(),
                },
            ],
        }
    }
}

/// Failure loading an explicitly named profile. An explicit `--profile` path
/// is never auto-created; only the default XDG profile is.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile {} does not exist", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to read profile {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("profile {} is not valid TOML", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a profile from an explicit path.
pub fn load_from(path: &Path) -> Result<SiteProfile, ProfileError> {
    if !path.exists() {
        return Err(ProfileError::Missing {
            path: path.to_path_buf(),
        });
    }
    let data = fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn profile_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("siteaudit")?;
    Ok(xdg_dirs.place_config_file("profile.toml")?)
}

/// Load the default profile from disk, creating it on first run.
pub fn load_or_init() -> Result<SiteProfile> {
    let path = profile_path()?;
    if !path.exists() {
        let profile = SiteProfile::default();
        let toml = toml::to_string_pretty(&profile)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default site profile at {}", path.display());
        return Ok(profile);
    }
    Ok(load_from(&path)?)
}
