use mdx2html::{MarkdownToHtml, RenderOptions};
use pretty_assertions::assert_eq;

fn render(body: &str) -> String {
    MarkdownToHtml::with_defaults().render(body)
}

fn render_for_page(body: &str, page_path: &str) -> String {
    MarkdownToHtml::new(RenderOptions {
        resolve_image_paths: true,
        page_path: page_path.to_string(),
    })
    .render(body)
}

#[test]
fn test_heading_and_emphasis() {
    let html = render("# Title\n\nSome *italic* and **bold** text.");
    assert_eq!(
        html,
        "<h1>Title</h1>\n<p>Some <em>italic</em> and <strong>bold</strong> text.</p>"
    );
}

#[test]
fn test_code_block_discards_language_and_escapes() {
    let html = render("```js\nconsole.log(1)\n```");
    assert_eq!(html, "<pre><code>console.log(1)</code></pre>");

    let html = render("```html\n<b>bold</b>\n```");
    assert_eq!(html, "<pre><code>&lt;b&gt;bold&lt;/b&gt;</code></pre>");
}

#[test]
fn test_inline_code_is_escaped() {
    let html = render("run `rm -rf <dir>` carefully");
    assert_eq!(
        html,
        "<p>run <code>rm -rf &lt;dir&gt;</code> carefully</p>"
    );
}

#[test]
fn test_bare_image_filename_is_not_wrapped_in_paragraph() {
    let html = render("![alt](photo.png)");
    assert_eq!(
        html,
        "<img src=\"/blog/images/photo.png\" alt=\"alt\" loading=\"lazy\" class=\"blog-image\" data-img-src=\"/blog/images/photo.png\" />"
    );
}

#[test]
fn test_image_with_surrounding_text_is_hoisted() {
    let html = render("Look at this:\n![shot](shot.jpg) and onward.");
    assert_eq!(
        html,
        "<p>Look at this:</p>\n<img src=\"/blog/images/shot.jpg\" alt=\"shot\" loading=\"lazy\" class=\"blog-image\" data-img-src=\"/blog/images/shot.jpg\" />\n<p>and onward.</p>"
    );
}

#[test]
fn test_absolute_image_sources_pass_through() {
    let html = render("![a](https://cdn.example.com/a.png)");
    assert_eq!(
        html,
        "<img src=\"https://cdn.example.com/a.png\" alt=\"a\" loading=\"lazy\" class=\"blog-image\" />"
    );

    let html = render("![a](/pics/a.png)");
    assert_eq!(
        html,
        "<img src=\"/pics/a.png\" alt=\"a\" loading=\"lazy\" class=\"blog-image\" />"
    );
}

#[test]
fn test_relative_image_sources_resolve_against_page_dir() {
    let html = render_for_page("![a](../images/a.png)", "/blog/post.html");
    assert!(html.contains("src=\"/blog/images/a.png\""));

    let html = render_for_page("![a](../drafts/a.png)", "/blog/post.html");
    assert!(html.contains("src=\"/blog/drafts/a.png\""));

    let html = render_for_page("![a](./images/a.png)", "/blog/post.html");
    assert!(html.contains("src=\"/blog/images/a.png\""));
}

#[test]
fn test_excerpt_mode_never_tracks_images() {
    let converter = MarkdownToHtml::new(RenderOptions {
        resolve_image_paths: false,
        page_path: "/blog.html".to_string(),
    });
    let html = converter.render("![a](photo.png)");
    assert_eq!(
        html,
        "<img src=\"photo.png\" alt=\"a\" loading=\"lazy\" class=\"blog-image\" />"
    );
    assert!(!html.contains("data-img-src"));
}

#[test]
fn test_dangerous_link_schemes_render_text_only() {
    for body in [
        "[click](javascript:alert(1))",
        "[click](data:text/html,x)",
        "[click](vbscript:msgbox)",
    ] {
        let html = render(body);
        assert!(html.contains("click"), "text must be kept: {}", html);
        assert!(!html.contains("<a "), "no anchor allowed: {}", html);
    }
}

#[test]
fn test_safe_link_renders_anchor() {
    let html = render("see the [map](https://example.com/map)");
    assert_eq!(
        html,
        "<p>see the <a href=\"https://example.com/map\">map</a></p>"
    );
}

#[test]
fn test_horizontal_rules() {
    assert_eq!(render("above\n\n---\n\nbelow"), "<p>above</p>\n<hr />\n<p>below</p>");
    assert_eq!(render("***"), "<hr />");
}

#[test]
fn test_blockquote_lines_merge() {
    let html = render("> Travel light.\n> Come back heavy.");
    assert_eq!(html, "<blockquote>Travel light. Come back heavy.</blockquote>");
}

#[test]
fn test_ordered_run_is_not_reclaimed_by_unordered_pass() {
    let html = render("1. first\n2. second\n- bullet\n* star");
    assert_eq!(
        html,
        "<ol><li>first</li><li>second</li></ol>\n<ul><li>bullet</li><li>star</li></ul>"
    );
}

#[test]
fn test_paragraph_lines_join_with_spaces() {
    let html = render("one\ntwo\nthree\n\nfour");
    assert_eq!(html, "<p>one two three</p>\n<p>four</p>");
}

#[test]
fn test_triple_asterisk_emphasis() {
    let html = render("***both***");
    assert_eq!(html, "<p><strong><em>both</em></strong></p>");
}

#[test]
fn test_unrecognized_syntax_degrades_to_literal_text() {
    let html = render("| not | a | table |");
    assert_eq!(html, "<p>| not | a | table |</p>");
}

#[test]
fn test_whole_document_rendering() {
    let post = MarkdownToHtml::with_defaults()
        .render_document("---\ntitle: Hello\ndate: 2024-01-01\n---\nBody text");
    assert_eq!(
        post.frontmatter.get("title").map(String::as_str),
        Some("Hello")
    );
    assert_eq!(
        post.frontmatter.get("date").map(String::as_str),
        Some("2024-01-01")
    );
    assert_eq!(post.html, "<p>Body text</p>");
}
