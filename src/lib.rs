//! # mdx2html
//!
//! Renderer for MDX-flavored blog posts: extracts the `---`-delimited
//! frontmatter header and converts the Markdown body into an HTML fragment.
//!
//! The produced HTML is untrusted output. Callers are expected to pass it
//! through an allow-list sanitizer before inserting it into a page; the
//! converter itself only guarantees that code content is escaped and that
//! links with dangerous URL schemes degrade to plain text.
//!
//! ## Example
//!
//! ```
//! use mdx2html::{MarkdownToHtml, RenderOptions};
//!
//! let options = RenderOptions {
//!     page_path: "/blog/field-notes.html".into(),
//!     ..Default::default()
//! };
//!
//! let converter = MarkdownToHtml::new(options);
//! let post = converter.render_document("---\ntitle: Hello\n---\n# Hello");
//! assert_eq!(post.frontmatter.get("title").map(String::as_str), Some("Hello"));
//! assert_eq!(post.html, "<h1>Hello</h1>");
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod frontmatter;
pub mod render;

pub use converter::MarkdownToHtml;
pub use error::{Error, Result};
pub use frontmatter::{extract, Frontmatter, ParsedDocument};

/// Options for Markdown to HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Whether relative image sources are rewritten to site-absolute paths.
    ///
    /// The full post renderer sets this; the listing-page excerpt renderer
    /// turns it off and leaves image sources untouched.
    pub resolve_image_paths: bool,
    /// Path of the page the rendered HTML will be inserted into, used to
    /// resolve `../` image references against the page's directory.
    pub page_path: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            resolve_image_paths: true,
            page_path: "/".to_string(),
        }
    }
}

/// Result of rendering a whole document: parsed header plus body HTML.
#[derive(Debug, Clone, Default)]
pub struct RenderedPost {
    /// Frontmatter key/value pairs (empty when the document has no header).
    pub frontmatter: Frontmatter,
    /// HTML fragment rendered from the body. Untrusted until sanitized.
    pub html: String,
}
