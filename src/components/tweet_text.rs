use crate::compose::ComposedLink;
use maud::{Markup, html};

/// Opens the link in a new browsing context.
pub const SHARE_LINK_TARGET: &str = "_blank";
/// Denies the opened page a handle on `window.opener` and the referrer.
pub const SHARE_LINK_REL: &str = "noopener noreferrer";

/// Renders a composed share link as an anchor.
pub fn tweet_text(link: &ComposedLink) -> Markup {
    html! {
        a href=(link.href) target=(SHARE_LINK_TARGET) rel=(SHARE_LINK_REL) {
            (link.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::LinkComposer;

    fn link(message: Option<&str>, text: &str) -> ComposedLink {
        LinkComposer::new("https://twitter.com/compose/tweet?text=@rgp4ss").compose(message, text)
    }

    #[test]
    fn renders_anchor_with_href_and_label() {
        let html = tweet_text(&link(Some("Check this out!"), "Share")).into_string();
        assert_eq!(
            html,
            r#"<a href="https://twitter.com/compose/tweet?text=@rgp4ss%20Check%20this%20out%21" target="_blank" rel="noopener noreferrer">Share</a>"#
        );
    }

    #[test]
    fn opens_in_new_context_without_opener() {
        let html = tweet_text(&link(None, "Share")).into_string();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn label_is_escaped_in_markup_only() {
        let composed = link(None, "<script>alert('x')</script>");
        let html = tweet_text(&composed).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        // The value itself is untouched
        assert_eq!(composed.label, "<script>alert('x')</script>");
    }
}
