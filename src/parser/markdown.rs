//! Markdown rendering of entry bodies.

use pulldown_cmark::{Event, Options, Parser, TagEnd, html};
use regex::Regex;
use std::sync::LazyLock;

/// A tag, comment or doctype inside raw HTML.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap());

/// Rendered body: HTML for the entry page, plain text for indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub text: String,
}

/// Render `body` to HTML and extract its visible text.
///
/// Raw HTML contributes the text between its tags.
pub fn render(body: &str) -> Rendered {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let events: Vec<Event> = Parser::new_ext(body, options).collect();

    let mut text = String::with_capacity(body.len());
    for event in &events {
        match event {
            Event::Text(s) | Event::Code(s) => text.push_str(s),
            Event::Html(s) | Event::InlineHtml(s) => text.push_str(&MARKUP.replace_all(s, " ")),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak | Event::Rule => text.push('\n'),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::TableCell
                | TagEnd::CodeBlock
                | TagEnd::BlockQuote,
            ) => text.push('\n'),
            _ => {}
        }
    }

    let mut html = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut html, events.into_iter());

    Rendered { html, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_html() {
        let rendered = render("# Title\n\nSome *emphasis* here.\n");
        assert!(rendered.html.contains("<h1>Title</h1>"));
        assert!(rendered.html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_render_text_has_no_markup() {
        let rendered = render("A [link](http://example.com) and `code`.\n\n- one\n- two\n");
        assert!(rendered.text.contains("A link and code."));
        assert!(rendered.text.contains("one"));
        assert!(!rendered.text.contains("http"));
        assert!(!rendered.text.contains('<'));
    }

    #[test]
    fn test_render_blocks_are_separated() {
        let rendered = render("first\n\nsecond\n");
        assert_eq!(rendered.text, "first\nsecond\n");
    }

    #[test]
    fn test_render_text_inside_raw_html() {
        let rendered = render("<div class=\"note\">\n<p>Hidden gem</p>\n</div>\n\nSay <b>bold</b> words <!-- secret -->\n");

        assert!(rendered.text.contains("Hidden gem"));
        assert!(rendered.text.contains("bold"));
        assert!(!rendered.text.contains("note"));
        assert!(!rendered.text.contains("secret"));
        assert!(!rendered.text.contains('<'));
        assert!(rendered.html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(""), Rendered::default());
    }
}
