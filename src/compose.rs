//! Share-link composition.
//!
//! A [`LinkComposer`] holds a fixed base endpoint (for example
//! `https://twitter.com/compose/tweet?text=@rgp4ss`) and turns an optional
//! free-text message into a [`ComposedLink`]:
//!
//! ```text
//! message = None               →  href = base
//! message = Some("")           →  href = base
//! message = Some("Read this!") →  href = base + "%20Read%20this%21"
//! ```
//!
//! The message is prefixed with a single space before encoding so it reads as
//! a separate word after whatever the endpoint already carries (usually the
//! author's handle). The label is never encoded: it is display content, and
//! escaping it is the renderer's job.
//!
//! ## Encoding
//!
//! Every byte except ASCII alphanumerics and the RFC 3986 unreserved marks
//! (`-`, `.`, `_`, `~`) is percent-encoded, non-ASCII text as its UTF-8
//! octets. The set is stricter than a query string strictly needs, so the
//! segment is safe to append after any `=` in the endpoint.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Characters encoded in the message segment.
pub const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("missing required input: {0}")]
    MissingRequiredInput(&'static str),
}

/// A share URL paired with the text shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedLink {
    /// Absolute URL, always starting with the composer's base endpoint.
    pub href: String,
    /// Display label, exactly as passed in.
    pub label: String,
}

/// Composition inputs as they arrive from an untyped boundary (CLI flags,
/// JSON, TOML), where `text` can be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Builds share links against a single base endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkComposer {
    base_endpoint: String,
}

impl LinkComposer {
    /// Create a composer for `base_endpoint`.
    ///
    /// The endpoint is used as-is. Callers loading it from configuration should
    /// go through [`crate::config::SiteConfig::link_composer`], which validates
    /// it first.
    pub fn new(base_endpoint: impl Into<String>) -> Self {
        Self {
            base_endpoint: base_endpoint.into(),
        }
    }

    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// Compose a link from an optional message and a label.
    pub fn compose(&self, message: Option<&str>, text: &str) -> ComposedLink {
        let href = match message {
            None => self.base_endpoint.clone(),
            Some("") => self.base_endpoint.clone(),
            Some(msg) => format!("{}{}", self.base_endpoint, encode_message(msg)),
        };
        debug!(%href, "composed share link");
        ComposedLink {
            href,
            label: text.to_string(),
        }
    }

    /// Compose from a [`LinkRequest`], rejecting a missing `text` before any
    /// URL is built.
    pub fn compose_request(&self, request: &LinkRequest) -> Result<ComposedLink, ComposeError> {
        let text = request
            .text
            .as_deref()
            .ok_or(ComposeError::MissingRequiredInput("text"))?;
        Ok(self.compose(request.message.as_deref(), text))
    }
}

/// Percent-encode a non-empty message as the segment appended to the base
/// endpoint, including its leading separator space.
pub fn encode_message(message: &str) -> String {
    let spaced = format!(" {message}");
    utf8_percent_encode(&spaced, MESSAGE_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    const BASE: &str = "https://twitter.com/compose/tweet?text=@rgp4ss";

    fn composer() -> LinkComposer {
        LinkComposer::new(BASE)
    }

    #[test]
    fn absent_message_yields_base() {
        let link = composer().compose(None, "Share");
        assert_eq!(link.href, BASE);
        assert_eq!(link.label, "Share");
    }

    #[test]
    fn empty_message_yields_base() {
        let link = composer().compose(Some(""), "Share");
        assert_eq!(link.href, BASE);
    }

    #[test]
    fn message_is_space_prefixed_and_encoded() {
        let link = composer().compose(Some("Check this out!"), "Share");
        assert_eq!(
            link.href,
            "https://twitter.com/compose/tweet?text=@rgp4ss%20Check%20this%20out%21"
        );
        assert_eq!(link.label, "Share");
    }

    #[test]
    fn whitespace_only_message_is_still_encoded() {
        let link = composer().compose(Some(" "), "Share");
        assert_eq!(link.href, format!("{BASE}%20%20"));
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let link = composer().compose(Some("50% off #rust @you & me?"), "Share");
        let segment = link.href.strip_prefix(BASE).unwrap();
        for raw in [' ', '#', '@', '&', '?'] {
            assert!(!segment.contains(raw), "raw {raw:?} in {segment}");
        }
        assert!(segment.contains("50%25"));
        assert!(segment.contains("%23rust"));
        assert!(segment.contains("%40you"));
    }

    #[test]
    fn non_ascii_is_encoded_as_utf8_octets() {
        let link = composer().compose(Some("café"), "Share");
        assert_eq!(link.href, format!("{BASE}%20caf%C3%A9"));
    }

    #[test]
    fn control_characters_are_encoded() {
        let link = composer().compose(Some("a\nb\tc"), "Share");
        assert_eq!(link.href, format!("{BASE}%20a%0Ab%09c"));
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(encode_message("a-b.c_d~e"), "%20a-b.c_d~e");
    }

    #[test]
    fn encoded_segment_decodes_to_spaced_message() {
        let messages = ["hello", "Check this out!", "ünïcødé 🚀", "a+b=c&d", "100%"];
        for msg in messages {
            let link = composer().compose(Some(msg), "x");
            let segment = link.href.strip_prefix(BASE).unwrap();
            let decoded = percent_decode_str(segment).decode_utf8().unwrap();
            assert_eq!(decoded, format!(" {msg}"));
        }
    }

    #[test]
    fn label_is_not_transformed() {
        let text = r#"<b>"Share" & 'tweet'</b> 100%"#;
        let link = composer().compose(Some("hi"), text);
        assert_eq!(link.label, text);
    }

    #[test]
    fn compose_is_idempotent() {
        let c = composer();
        assert_eq!(
            c.compose(Some("same input"), "Share"),
            c.compose(Some("same input"), "Share")
        );
    }

    #[test]
    fn request_without_text_is_rejected() {
        let request = LinkRequest {
            message: Some("hello".to_string()),
            text: None,
        };
        let err = composer().compose_request(&request).unwrap_err();
        assert_eq!(err, ComposeError::MissingRequiredInput("text"));
        assert!(err.to_string().contains("text"));
    }

    #[test]
    fn request_with_empty_text_is_accepted() {
        let request = LinkRequest {
            message: None,
            text: Some(String::new()),
        };
        let link = composer().compose_request(&request).unwrap();
        assert_eq!(link.label, "");
        assert_eq!(link.href, BASE);
    }

    #[test]
    fn request_deserializes_from_json() {
        let request: LinkRequest =
            serde_json::from_str(r#"{"message": "Nice post", "text": "Tweet"}"#).unwrap();
        let link = composer().compose_request(&request).unwrap();
        assert_eq!(link.href, format!("{BASE}%20Nice%20post"));
        assert_eq!(link.label, "Tweet");
    }

    #[test]
    fn request_rejects_unknown_fields() {
        let result: Result<LinkRequest, _> =
            serde_json::from_str(r#"{"text": "Tweet", "mesage": "typo"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn composer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LinkComposer>();
    }
}
