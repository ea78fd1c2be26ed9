//! Document skeleton and server-side rendering helper.

use axum::response::Html;
use leptos::{
    html::{body, head, html, main, meta, style, title},
    prelude::*,
};

const STYLES: &str = "body { font-family: system-ui, sans-serif; margin: 0; } \
    .container { max-width: 40rem; margin: 3rem auto; padding: 0 1rem; } \
    .flash-error { color: #8a1c1c; background: #fde8e8; padding: 0.75rem; border-radius: 0.25rem; } \
    .search-term { word-break: break-all; }";

/// Wraps `content` in the full HTML document.
pub fn shell(page_title: &'static str, content: impl IntoView + 'static) -> impl IntoView {
    let document = html().attr("lang", "en").child((
        head().child((
            meta().attr("charset", "utf-8"),
            meta()
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
            title().child(page_title),
            style().child(STYLES),
        )),
        body().child(main().class("container").child(content)),
    ));

    view! {
        <!DOCTYPE html>
        {document}
    }
}

/// Renders a complete page to an HTML response body.
pub fn render(page_title: &'static str, content: impl IntoView + 'static) -> Html<String> {
    Html(shell(page_title, content).to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::html::p;

    #[test]
    fn test_render_wraps_content_in_document() {
        let Html(page) = render("Layout Test", p().child("inner content"));
        assert!(page.to_ascii_lowercase().starts_with("<!doctype html>"));
        assert!(page.contains("<title>"));
        assert!(page.contains("Layout Test"));
        assert!(page.contains("inner content"));
        assert!(page.contains("charset=\"utf-8\""));
    }

    #[test]
    fn test_render_escapes_plain_text_children() {
        let Html(page) = render("Layout Test", p().child("<b>bold</b>".to_owned()));
        assert!(!page.contains("<b>bold</b>"));
        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
