use crate::core::ast::{BlockNode, DocumentAst, ImageNode, InlineNode};
use crate::render::escape::{escape_alt_attr, escape_html};
use crate::render::Renderer;

/// URL schemes that must never reach an `<a href>`. Checked against the
/// escaped URL, case-sensitively, exactly like the sanitizer downstream.
const DANGEROUS_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, document: &DocumentAst) -> String {
        let rendered: Vec<String> = document.blocks.iter().map(Self::render_block).collect();
        rendered.join("\n")
    }
}

impl HtmlRenderer {
    fn render_block(block: &BlockNode) -> String {
        match block {
            BlockNode::Heading { level, content } => {
                format!("<h{0}>{1}</h{0}>", level, Self::render_inlines(content))
            }
            BlockNode::Paragraph(content) => {
                format!("<p>{}</p>", Self::render_inlines(content))
            }
            BlockNode::Blockquote(content) => {
                format!("<blockquote>{}</blockquote>", Self::render_inlines(content))
            }
            BlockNode::OrderedList(items) => Self::render_list("ol", items),
            BlockNode::UnorderedList(items) => Self::render_list("ul", items),
            BlockNode::CodeBlock(code) => {
                format!("<pre><code>{}</code></pre>", escape_html(code))
            }
            BlockNode::HorizontalRule => "<hr />".to_string(),
            BlockNode::Image(image) => Self::image_tag(image),
            BlockNode::RawHtml(line) => line.clone(),
        }
    }

    // List items are emitted back to back; whitespace between adjacent
    // <li> tags would show up as text nodes in the page.
    fn render_list(tag: &str, items: &[Vec<InlineNode>]) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(tag);
        out.push('>');
        for item in items {
            out.push_str("<li>");
            out.push_str(&Self::render_inlines(item));
            out.push_str("</li>");
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        out
    }

    fn render_inlines(nodes: &[InlineNode]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                InlineNode::Text(text) => out.push_str(text),
                InlineNode::Code(code) => {
                    out.push_str("<code>");
                    out.push_str(&escape_html(code));
                    out.push_str("</code>");
                }
                InlineNode::Emphasis { strong, em, content } => {
                    let inner = Self::render_inlines(content);
                    match (strong, em) {
                        (true, true) => {
                            out.push_str("<strong><em>");
                            out.push_str(&inner);
                            out.push_str("</em></strong>");
                        }
                        (true, false) => {
                            out.push_str("<strong>");
                            out.push_str(&inner);
                            out.push_str("</strong>");
                        }
                        _ => {
                            out.push_str("<em>");
                            out.push_str(&inner);
                            out.push_str("</em>");
                        }
                    }
                }
                InlineNode::Link { text, url } => {
                    let safe_text = escape_html(text);
                    let safe_url = escape_html(url);
                    if Self::is_dangerous_scheme(&safe_url) {
                        out.push_str(&safe_text);
                    } else {
                        out.push_str("<a href=\"");
                        out.push_str(&safe_url);
                        out.push_str("\">");
                        out.push_str(&safe_text);
                        out.push_str("</a>");
                    }
                }
                InlineNode::Image(image) => out.push_str(&Self::image_tag(image)),
            }
        }
        out
    }

    fn is_dangerous_scheme(escaped_url: &str) -> bool {
        DANGEROUS_SCHEMES
            .iter()
            .any(|scheme| escaped_url.starts_with(scheme))
    }

    fn image_tag(image: &ImageNode) -> String {
        let alt = escape_alt_attr(&image.alt);
        if image.tracked {
            format!(
                r#"<img src="{0}" alt="{1}" loading="lazy" class="blog-image" data-img-src="{0}" />"#,
                image.src, alt
            )
        } else {
            format!(
                r#"<img src="{}" alt="{}" loading="lazy" class="blog-image" />"#,
                image.src, alt
            )
        }
    }
}
