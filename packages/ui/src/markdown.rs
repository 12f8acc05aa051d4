use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render post markdown to HTML.
///
/// Raw HTML in the source is escaped and shown as text.
pub fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, opts).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn Markdown(source: String, #[props(default)] class: String) -> Element {
    let rendered = render_markdown(&source);

    rsx! {
        div {
            class: "prose prose-lg prose-indigo dark:prose-invert max-w-none {class}",
            dangerous_inner_html: "{rendered}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_emphasis() {
        let out = render_markdown("# Title\n\nSome **bold** text");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render_markdown("hello <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_code_block() {
        let out = render_markdown("```rust\nfn main() {}\n```");
        assert!(out.contains("<pre><code class=\"language-rust\">"));
    }
}
