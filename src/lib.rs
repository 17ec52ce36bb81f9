//! # Sharekit
//!
//! Share links and post components for a personal static blog.
//!
//! The heart of the crate is [`compose::LinkComposer`]: given the site's share
//! endpoint and an optional message, it produces a percent-encoded URL and the
//! label to show for it. Everything else feeds it or renders its output:
//!
//! ```text
//! config.toml  →  SiteConfig  →  LinkComposer  →  ComposedLink  →  <a …>
//!                     │
//!                     └──────────→  FooterConfig  →  post footer
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`compose`] | Builds share URLs from a base endpoint and an optional message |
//! | [`config`] | `config.toml` loading, validation, merging; derives the share endpoint |
//! | [`components`] | Maud HTML for the share link and the post footer |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Absent and Empty Messages Are the Same Link
//!
//! A post without a custom message shares the bare endpoint. An empty message
//! does the same, so templates can pass whatever they have without checking.
//! Both cases are matched explicitly rather than through a truthiness-style
//! helper, which keeps the door open for treating them differently later.
//!
//! ## Labels Are Not Encoded
//!
//! The label is display content. [`compose::ComposedLink::label`] holds it
//! exactly as given; HTML escaping happens once, in maud, when it is rendered.
//!
//! ## Links Open Without an Opener
//!
//! Share links open in a new tab with `rel="noopener noreferrer"`, so the
//! third-party page can neither navigate nor inspect the blog's window.
//!
//! # Example
//!
//! ```
//! use sharekit::compose::LinkComposer;
//!
//! let composer = LinkComposer::new("https://twitter.com/compose/tweet?text=@rgp4ss");
//! let link = composer.compose(Some("Check this out!"), "Share");
//! assert_eq!(
//!     link.href,
//!     "https://twitter.com/compose/tweet?text=@rgp4ss%20Check%20this%20out%21"
//! );
//! ```

pub mod components;
pub mod compose;
pub mod config;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
