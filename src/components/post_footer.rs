use crate::config::FooterConfig;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, Tag, TagEnd, html as md_html};

/// Renders the author blurb: the name in bold, followed by the bio.
///
/// The bio is markdown. Paragraph wrappers are dropped so the name and bio
/// read as one run of text inside the footer block; paragraph breaks become a
/// single space.
pub fn post_footer(footer: &FooterConfig) -> Markup {
    html! {
        div.post-footer {
            strong { (footer.name) }
            " "
            (PreEscaped(render_inline_markdown(&footer.bio)))
        }
    }
}

fn render_inline_markdown(source: &str) -> String {
    let events = Parser::new(source).filter_map(|event| match event {
        Event::Start(Tag::Paragraph) => None,
        Event::End(TagEnd::Paragraph) => Some(Event::Text(" ".into())),
        other => Some(other),
    });
    let mut out = String::new();
    md_html::push_html(&mut out, events);
    out.trim_end().to_string()
}
