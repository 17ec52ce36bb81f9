//! HTML components for blog posts.
//!
//! Each component is a plain function returning maud [`Markup`](maud::Markup),
//! so pages can embed them with `(component(...))`. All interpolated text is
//! escaped by maud.
//!
//! | Component | Renders |
//! |-----------|---------|
//! | [`tweet_text`] | A share link that opens in a new tab without an opener handle |
//! | [`post_footer`] | The author blurb shown under every post |

mod post_footer;
mod tweet_text;

pub use post_footer::post_footer;
pub use tweet_text::{SHARE_LINK_REL, SHARE_LINK_TARGET, tweet_text};
