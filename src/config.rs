//! Site configuration module.
//!
//! Handles loading, validating, and merging the site's `config.toml`. Stock
//! defaults are the base layer; the user's file only needs the keys it wants
//! to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! path_prefix = "/"
//! title = "Gerry Pass"
//! title_alt = "Gerry Pass"
//! title_manifest = "GerryPass"
//! url = "https://www.gerrypass.com"   # No trailing slash
//! language = "en"
//! headline = "Articles on React, Node, Rails, and Cypress"
//! banner = "/social/banner.jpg"
//! favicon = "src/favicon.png"
//! description = "I write articles on React, Node, Rails, and Cypress."
//! author = "Gerry Pass"
//! logo = "/social/logo.png"
//! user_twitter = "@rgp4ss"            # Omit to disable share links
//! theme_color = "#3498DB"
//! background_color = "#2b2e3c"
//!
//! [share]
//! # base_endpoint = "https://twitter.com/compose/tweet?text=@rgp4ss"
//! label = "Share"
//!
//! [footer]
//! name = "Gerry Pass"
//! bio = "is a software engineer, mentor, and teacher. ..."
//! ```
//!
//! ## Share Endpoint
//!
//! The share link's base endpoint is derived from `user_twitter` unless
//! `share.base_endpoint` is set explicitly:
//!
//! ```text
//! user_twitter = "@rgp4ss"  →  https://twitter.com/compose/tweet?text=@rgp4ss
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::compose::LinkComposer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Tweet composer URL the handle is appended to.
pub const TWEET_COMPOSE_URL: &str = "https://twitter.com/compose/tweet?text=";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Prefix for all links; `/` unless the site is deployed under a subpath.
    pub path_prefix: String,
    /// Navigation and site title.
    pub title: String,
    /// Alternative title for search engines.
    pub title_alt: String,
    /// Short name for the web app manifest.
    pub title_manifest: String,
    /// Site domain, without trailing slash.
    pub url: String,
    /// Language tag for the `<html>` element.
    pub language: String,
    pub headline: String,
    pub banner: String,
    pub favicon: String,
    pub description: String,
    pub author: String,
    pub logo: String,
    /// Twitter handle including the leading `@`. Share links are disabled when
    /// this is absent and no explicit endpoint is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_twitter: Option<String>,
    /// Manifest and progress bar color.
    pub theme_color: String,
    /// Manifest background color.
    pub background_color: String,
    pub share: ShareConfig,
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            path_prefix: "/".to_string(),
            title: "Gerry Pass".to_string(),
            title_alt: "Gerry Pass".to_string(),
            title_manifest: "GerryPass".to_string(),
            url: "https://www.gerrypass.com".to_string(),
            language: "en".to_string(),
            headline: "Articles on React, Node, Rails, and Cypress".to_string(),
            banner: "/social/banner.jpg".to_string(),
            favicon: "src/favicon.png".to_string(),
            description: "I write articles on React, Node, Rails, and Cypress.".to_string(),
            author: "Gerry Pass".to_string(),
            logo: "/social/logo.png".to_string(),
            user_twitter: Some("@rgp4ss".to_string()),
            theme_color: "#3498DB".to_string(),
            background_color: "#2b2e3c".to_string(),
            share: ShareConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

/// Share link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareConfig {
    /// Explicit base endpoint. Overrides the one derived from `user_twitter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_endpoint: Option<String>,
    /// Default link label.
    pub label: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_endpoint: None,
            label: "Share".to_string(),
        }
    }
}

/// Author blurb shown under every post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Author name, rendered in bold.
    pub name: String,
    /// Markdown text following the name.
    pub bio: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            name: "Gerry Pass".to_string(),
            bio: "is a software engineer, mentor, and teacher. He's taught hundreds of \
                  people how to write clean, future-proof code by focusing on best \
                  practices, readability, and testing. He lives with his wife and son \
                  in Atlanta, Georgia, USA."
                .to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let site_url = parse_http_url(&self.url)
            .ok_or_else(|| ConfigError::Validation("url must be an absolute http(s) URL".into()))?;
        if self.url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "url must not end with a slash: {site_url}"
            )));
        }
        if !self.path_prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "path_prefix must start with '/'".into(),
            ));
        }
        if let Some(handle) = &self.user_twitter {
            if !is_twitter_handle(handle) {
                return Err(ConfigError::Validation(format!(
                    "user_twitter must look like @name (1-15 letters, digits, underscores): {handle}"
                )));
            }
        }
        for (key, value) in [
            ("theme_color", &self.theme_color),
            ("background_color", &self.background_color),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be #rgb or #rrggbb: {value}"
                )));
            }
        }
        if let Some(endpoint) = &self.share.base_endpoint {
            if endpoint.chars().any(char::is_whitespace) || parse_http_url(endpoint).is_none() {
                return Err(ConfigError::Validation(format!(
                    "share.base_endpoint must be an absolute http(s) URL without whitespace: {endpoint}"
                )));
            }
        }
        if self.share.label.is_empty() {
            return Err(ConfigError::Validation(
                "share.label must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The base endpoint share links are built on, if sharing is enabled.
    ///
    /// - explicit `share.base_endpoint` → used as-is
    /// - otherwise `user_twitter` → appended to [`TWEET_COMPOSE_URL`]
    /// - neither → `None`
    pub fn share_endpoint(&self) -> Option<String> {
        if let Some(endpoint) = &self.share.base_endpoint {
            return Some(endpoint.clone());
        }
        self.user_twitter
            .as_ref()
            .map(|handle| format!("{TWEET_COMPOSE_URL}{handle}"))
    }

    /// Build a [`LinkComposer`] for this site, or `None` if sharing is disabled.
    pub fn link_composer(&self) -> Option<LinkComposer> {
        self.share_endpoint().map(LinkComposer::new)
    }
}

fn parse_http_url(value: &str) -> Option<url::Url> {
    url::Url::parse(value)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
}

fn is_twitter_handle(handle: &str) -> bool {
    match handle.strip_prefix('@') {
        Some(name) => {
            (1..=15).contains(&name.len())
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// `SiteConfig::default()` as a TOML table: the bottom layer that the site's
/// `config.toml` is merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Overlay one TOML value onto another.
///
/// Tables merge per key, recursing into nested tables such as `[share]`, so a
/// file that sets only `footer.name` keeps the stock `footer.bio`. Any other
/// value in `overlay` (strings, arrays) replaces the base value outright.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using stock defaults");
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    debug!(path = %config_path.display(), "loaded config file");
    Ok(Some(value))
}

/// Apply the optional user layer, deserialize into [`SiteConfig`], and validate.
///
/// Unknown keys surface here as [`ConfigError::Toml`], bad values as
/// [`ConfigError::Validation`].
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Resolve the site config for `root`: stock defaults plus `root/config.toml`
/// when it exists.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Sharekit Site Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Prefix for all links. If the site is deployed to example.com/blog,
# set this to "/blog".
path_prefix = "/"

# Navigation and site title.
title = "Gerry Pass"
# Alternative site title for search engines.
title_alt = "Gerry Pass"
# Short name for the web app manifest.
title_manifest = "GerryPass"

# Domain of the site. No trailing slash!
url = "https://www.gerrypass.com"
# Language tag on the <html> element.
language = "en"
headline = "Articles on React, Node, Rails, and Cypress"
banner = "/social/banner.jpg"
favicon = "src/favicon.png"
description = "I write articles on React, Node, Rails, and Cypress."
author = "Gerry Pass"
logo = "/social/logo.png"

# Twitter handle, including the @. Share links are built from it.
# Comment out to disable share links.
user_twitter = "@rgp4ss"

# Manifest and progress colors (#rgb or #rrggbb).
theme_color = "#3498DB"
background_color = "#2b2e3c"

# ---------------------------------------------------------------------------
# Share links
# ---------------------------------------------------------------------------
[share]
# Explicit base endpoint. When unset, it is derived from user_twitter:
#   https://twitter.com/compose/tweet?text=<user_twitter>
# base_endpoint = "https://twitter.com/compose/tweet?text=@rgp4ss"

# Label used when no link text is given.
label = "Share"

# ---------------------------------------------------------------------------
# Post footer
# ---------------------------------------------------------------------------
[footer]
# Author name, shown in bold.
name = "Gerry Pass"
# Markdown following the name.
bio = "is a software engineer, mentor, and teacher. He's taught hundreds of people how to write clean, future-proof code by focusing on best practices, readability, and testing. He lives with his wife and son in Atlanta, Georgia, USA."
"##
}
