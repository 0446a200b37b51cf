use super::*;

#[test]
fn renders_basic_markdown() {
    let out = render_markdown_html("Java is **portable** and *secure*.");
    assert!(out.contains("<strong>portable</strong>"));
    assert!(out.contains("<em>secure</em>"));
}

#[test]
fn renders_tables_and_strikethrough() {
    let out = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~");
    assert!(out.contains("<table>"));
    assert!(out.contains("<del>old</del>"));
}

#[test]
fn drops_raw_html() {
    let out = render_markdown_html("before <script>alert(1)</script> after\n\n<div onclick=\"x()\">block</div>");
    assert!(!out.contains("<script>"));
    assert!(!out.contains("onclick"));
    assert!(out.contains("before"));
}

#[test]
fn neutralizes_script_links_and_images() {
    let out = render_markdown_html("[click](javascript:alert(1)) ![img](data:text/html;base64,AAAA)");
    assert!(!out.contains("javascript:"));
    assert!(!out.contains("data:"));
    assert!(out.contains("href=\"#\""));
    assert!(out.contains("src=\"#\""));
}

#[test]
fn keeps_ordinary_links() {
    let out = render_markdown_html("[docs](https://docs.oracle.com/javase/)");
    assert!(out.contains("href=\"https://docs.oracle.com/javase/\""));
}

#[test]
fn unsafe_url_detection_ignores_case_and_whitespace() {
    assert!(is_unsafe_url("JavaScript:alert(1)"));
    assert!(is_unsafe_url("  java\tscript:void(0)"));
    assert!(is_unsafe_url("VBSCRIPT:msgbox"));
    assert!(!is_unsafe_url("/languages/java/history"));
    assert!(!is_unsafe_url("https://example.com/data:x"));
}
