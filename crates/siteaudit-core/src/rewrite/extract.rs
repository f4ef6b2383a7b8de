//! Inline `<style>`/`<script>` extraction for one page.
//!
//! Produces `css/<page>-extracted.css`, `js/<page>-extracted.js`, and
//! `<page>-clean.html`; the original document is left untouched. The
//! transform is one-shot: running it against its own output is unsupported,
//! but running it against a document with no inline blocks left yields
//! header-only extracted files and is not an error.

use super::atomic::write_atomic;
use crate::config::{ExtractTable, SiteProfile};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<style>(.*?)</style>").unwrap())
}

fn blank_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n\s*\n").unwrap())
}

/// Tag-inclusive span of one inline `<script>` block.
struct ScriptSpan {
    start: usize,
    body_start: usize,
    body_end: usize,
    end: usize,
}

/// Locate inline `<script>` blocks: open tags whose attribute text carries
/// no `src`. A `src` script's open tag is stepped over, so an inline block
/// nested after an unclosed `src` tag is still found, mirroring how the
/// legacy documents interleave the two.
fn inline_script_spans(content: &str) -> Vec<ScriptSpan> {
    const OPEN: &str = "<script";
    const CLOSE: &str = "</script>";

    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(rel) = content[pos..].find(OPEN) {
        let start = pos + rel;
        let Some(gt_rel) = content[start..].find('>') else {
            break;
        };
        let body_start = start + gt_rel + 1;
        let attrs = &content[start + OPEN.len()..body_start - 1];
        if attrs.contains("src") {
            pos = body_start;
            continue;
        }
        match content[body_start..].find(CLOSE) {
            Some(close_rel) => {
                let body_end = body_start + close_rel;
                let end = body_end + CLOSE.len();
                spans.push(ScriptSpan {
                    start,
                    body_start,
                    body_end,
                    end,
                });
                pos = end;
            }
            None => break,
        }
    }
    spans
}

/// Remove the given spans from `content`.
fn strip_spans(content: &str, spans: &[ScriptSpan]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut pos = 0;
    for span in spans {
        out.push_str(&content[pos..span.start]);
        pos = span.end;
    }
    out.push_str(&content[pos..]);
    out
}

/// Concatenate surviving blocks under a header comment. Whitespace-only
/// blocks are dropped but the numbering keeps each block's original
/// extraction index.
fn consolidated(header: &str, marker: &str, blocks: &[String]) -> String {
    let mut out = format!("{header}\n\n");
    for (i, block) in blocks.iter().enumerate() {
        let trimmed = block.trim();
        if trimmed.is_empty() {
            continue;
        }
        out.push_str(&format!("/* {marker} {} */\n{trimmed}\n\n", i + 1));
    }
    out
}

/// Strip inline blocks, collapse blank-line runs, and insert the references
/// to the extracted/custom files after the page's anchors. Returns the
/// cleaned document plus whether each anchor was found.
fn clean_document(content: &str, anchors: Option<&ExtractTable>, stem: &str) -> (String, bool, bool) {
    let without_styles = style_re().replace_all(content, "");
    let spans = inline_script_spans(&without_styles);
    let without_scripts = strip_spans(&without_styles, &spans);
    let mut out = blank_run_re()
        .replace_all(&without_scripts, "\n\n")
        .into_owned();

    let mut css_found = false;
    let mut js_found = false;
    if let Some(table) = anchors {
        if out.contains(&table.css_anchor) {
            css_found = true;
            let insert = format!(
                "{}\n  <link rel=\"stylesheet\" href=\"css/{stem}-custom.css\" />\n  <link rel=\"stylesheet\" href=\"css/{stem}-extracted.css\" />",
                table.css_anchor
            );
            out = out.replace(&table.css_anchor, &insert);
        }
        if out.contains(&table.js_anchor) {
            js_found = true;
            // The legacy anchor tag is unclosed; close it before appending
            // the new script tags.
            let insert = format!(
                "{}</script>\n  <script src=\"js/{stem}-custom.js\"></script>\n  <script src=\"js/{stem}-extracted.js\"></script>",
                table.js_anchor
            );
            out = out.replace(&table.js_anchor, &insert);
        }
    }
    (out, css_found, js_found)
}

/// Outcome of one extraction run. Paths are relative to the site root.
#[derive(Debug, Serialize)]
pub struct ExtractOutcome {
    pub style_blocks: usize,
    pub inline_scripts: usize,
    pub css_file: PathBuf,
    pub js_file: PathBuf,
    pub clean_file: PathBuf,
    pub css_anchor_found: bool,
    pub js_anchor_found: bool,
}

/// Extract `page`'s inline styles and scripts into external files and write
/// a cleaned copy of the document. Writes exactly three files; deletes none.
pub fn extract_page(
    site_root: &Path,
    profile: &SiteProfile,
    page: &str,
) -> Result<ExtractOutcome> {
    let page_file = if page.ends_with(".html") {
        page.to_string()
    } else {
        format!("{page}.html")
    };
    let stem = page_file
        .strip_suffix(".html")
        .unwrap_or(&page_file)
        .to_string();

    let page_path = site_root.join(&page_file);
    let content = fs::read_to_string(&page_path)
        .with_context(|| format!("failed to read {}", page_path.display()))?;

    let anchors = profile.extract.iter().find(|t| t.page == page_file);
    if anchors.is_none() {
        tracing::warn!("no extraction anchors configured for {page_file}");
    }

    let styles: Vec<String> = style_re()
        .captures_iter(&content)
        .map(|c| c[1].to_string())
        .collect();
    let scripts: Vec<String> = inline_script_spans(&content)
        .iter()
        .map(|span| content[span.body_start..span.body_end].to_string())
        .collect();

    let css_doc = consolidated(
        &format!("/* CSS extrait de {page_file} */"),
        "Bloc CSS",
        &styles,
    );
    let js_doc = consolidated(
        &format!("/* JavaScript extrait de {page_file} */"),
        "Script",
        &scripts,
    );
    let (cleaned, css_anchor_found, js_anchor_found) = clean_document(&content, anchors, &stem);

    let css_file = PathBuf::from("css").join(format!("{stem}-extracted.css"));
    let js_file = PathBuf::from("js").join(format!("{stem}-extracted.js"));
    let clean_file = PathBuf::from(format!("{stem}-clean.html"));

    write_atomic(&site_root.join(&css_file), &css_doc)?;
    write_atomic(&site_root.join(&js_file), &js_doc)?;
    write_atomic(&site_root.join(&clean_file), &cleaned)?;

    tracing::info!(
        "extracted {} style blocks and {} inline scripts from {page_file}",
        styles.len(),
        scripts.len()
    );

    Ok(ExtractOutcome {
        style_blocks: styles.len(),
        inline_scripts: scripts.len(),
        css_file,
        js_file,
        clean_file,
        css_anchor_found,
        js_anchor_found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractTable;

    #[test]
    fn spans_skip_src_scripts() {
        let html = r#"<script src="js/app.js"></script><script>var x = 1;</script>"#;
        let spans = inline_script_spans(html);
        assert_eq!(spans.len(), 1);
        assert_eq!(&html[spans[0].body_start..spans[0].body_end], "var x = 1;");
    }

    #[test]
    fn spans_find_inline_after_unclosed_src_tag() {
        // The legacy pages carry an unclosed src script; inline blocks after
        // it must still be found.
        let html = "<script src=\"js/a.js\" type=\"text/javascript\">\n<script>run();</script>";
        let spans = inline_script_spans(html);
        assert_eq!(spans.len(), 1);
        assert_eq!(&html[spans[0].body_start..spans[0].body_end], "run();");
    }

    #[test]
    fn spans_handle_attributes_without_src() {
        let html = r#"<script type="text/javascript">go();</script>"#;
        let spans = inline_script_spans(html);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn consolidated_keeps_original_numbering() {
        let blocks = vec![
            "a { color: red; }".to_string(),
            "   \n  ".to_string(),
            "b { color: blue; }".to_string(),
        ];
        let out = consolidated("/* CSS extrait de x.html */", "Bloc CSS", &blocks);
        assert!(out.contains("/* Bloc CSS 1 */\na { color: red; }"));
        assert!(!out.contains("/* Bloc CSS 2 */"));
        assert!(out.contains("/* Bloc CSS 3 */\nb { color: blue; }"));
    }

    #[test]
    fn consolidated_empty_input_is_header_only() {
        let out = consolidated("/* CSS extrait de x.html */", "Bloc CSS", &[]);
        assert_eq!(out, "/* CSS extrait de x.html */\n\n");
    }

    fn anchors() -> ExtractTable {
        ExtractTable {
            page: "about.html".into(),
            css_anchor: r#"<link href="css/slater-main.css" rel="stylesheet"/>"#.into(),
            js_anchor: r#"<script src="js/animations-about.js" type="text/javascript">"#.into(),
        }
    }

    #[test]
    fn clean_removes_blocks_and_inserts_after_anchors() {
        let html = "<head>\n<link href=\"css/slater-main.css\" rel=\"stylesheet\"/>\n<style>body {}</style>\n</head>\n<body>\n<script src=\"js/animations-about.js\" type=\"text/javascript\">\n<script>init();</script>\n</body>\n";
        let table = anchors();
        let (out, css_found, js_found) = clean_document(html, Some(&table), "about");

        assert!(css_found && js_found);
        assert!(!out.contains("<style>"));
        assert!(!out.contains("init();"));
        assert!(out.contains(
            "<link href=\"css/slater-main.css\" rel=\"stylesheet\"/>\n  <link rel=\"stylesheet\" href=\"css/about-custom.css\" />\n  <link rel=\"stylesheet\" href=\"css/about-extracted.css\" />"
        ));
        assert!(out.contains(
            "<script src=\"js/animations-about.js\" type=\"text/javascript\"></script>\n  <script src=\"js/about-custom.js\"></script>\n  <script src=\"js/about-extracted.js\"></script>"
        ));
    }

    #[test]
    fn clean_collapses_blank_runs() {
        let html = "<p>a</p>\n\n\n\n<p>b</p>";
        let (out, _, _) = clean_document(html, None, "about");
        assert_eq!(out, "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn clean_missing_anchors_reported_not_fatal() {
        let html = "<p>no anchors here</p>";
        let table = anchors();
        let (out, css_found, js_found) = clean_document(html, Some(&table), "about");
        assert_eq!(out, html);
        assert!(!css_found && !js_found);
    }
}
