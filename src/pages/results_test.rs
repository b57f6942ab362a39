use super::*;

#[test]
fn render_markdown_html_renders_basic_structure() {
    let rendered = render_markdown_html("## Strengths\n\n- clear goals\n- steady pacing");
    assert!(rendered.contains("<h2>Strengths</h2>"));
    assert!(rendered.contains("<li>clear goals</li>"));
}

#[test]
fn render_markdown_html_drops_raw_html() {
    let rendered = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!rendered.contains("<script>"));
    assert!(rendered.contains("before"));
    assert!(rendered.contains("after"));
}

#[test]
fn render_markdown_html_keeps_tables_enabled() {
    let rendered = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(rendered.contains("<table>"));
}
