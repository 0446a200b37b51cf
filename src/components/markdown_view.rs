use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

/// Sanitized markdown block.
#[component]
pub fn MarkdownView(#[prop(into)] source: String) -> impl IntoView {
    let html = render_markdown_html(&source);
    view! { <div class="markdown-body" inner_html=html></div> }
}

/// Code example block.
#[component]
pub fn CodeBlock(code: &'static str) -> impl IntoView {
    view! {
        <pre class="code-block">
            <code>{code}</code>
        </pre>
    }
}
