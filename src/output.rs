//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Share
//!
//! ```text
//! Share
//!     Href: https://twitter.com/compose/tweet?text=@rgp4ss%20Read%20this
//! ```
//!
//! ## Check
//!
//! ```text
//! Site
//!     Title: Gerry Pass
//!     URL: https://www.gerrypass.com
//!     Author: Gerry Pass
//!
//! Share
//!     Endpoint: https://twitter.com/compose/tweet?text=@rgp4ss
//!     Label: Share
//!
//! Config
//!     config.toml
//! ```

use crate::compose::ComposedLink;
use crate::config::SiteConfig;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a labelled context line under a header.
fn field(name: &str, value: &str) -> String {
    format!("{}{}: {}", indent(1), name, value)
}

// ============================================================================
// Share output
// ============================================================================

/// Format a composed link: the label as header, the URL as context.
///
/// An empty label is shown as `(no label)` so the header line never vanishes.
pub fn format_link(link: &ComposedLink) -> Vec<String> {
    let header = if link.label.is_empty() {
        "(no label)".to_string()
    } else {
        link.label.clone()
    };
    vec![header, field("Href", &link.href)]
}

/// Print a composed link to stdout.
pub fn print_link(link: &ComposedLink) {
    for line in format_link(link) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format a summary of the resolved site config.
pub fn format_check_output(config: &SiteConfig, site_root: &Path) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        field("Title", &config.title),
        field("URL", &config.url),
        field("Author", &config.author),
    ];

    lines.push(String::new());
    lines.push("Share".to_string());
    match config.share_endpoint() {
        Some(endpoint) => lines.push(field("Endpoint", &endpoint)),
        None => lines.push(format!(
            "{}disabled: set user_twitter or share.base_endpoint",
            indent(1)
        )),
    }
    lines.push(field("Label", &config.share.label));

    lines.push(String::new());
    lines.push("Config".to_string());
    if site_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}stock defaults", indent(1)));
    }

    lines
}

/// Print the config summary to stdout.
pub fn print_check_output(config: &SiteConfig, site_root: &Path) {
    for line in format_check_output(config, site_root) {
        println!("{}", line);
    }
}
