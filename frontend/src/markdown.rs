//! Markdown rendering for project descriptions. Raw HTML in the source is
//! shown as text, never injected.

use pulldown_cmark::{html, CowStr, Event, Options, Parser};
use yew::{AttrValue, Html};

pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub fn render_markdown(source: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(markdown_to_html(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis_and_escapes_raw_html() {
        let html = markdown_to_html("**5 kWc** sur toiture <script>alert(1)</script>");
        assert!(html.contains("<strong>5 kWc</strong>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
