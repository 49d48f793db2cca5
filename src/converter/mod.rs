//! Converter modules for Markdown to HTML transformation.

mod blocks;
mod image;
mod inline;

use crate::frontmatter;
use crate::render::{HtmlRenderer, Renderer};
use crate::{RenderOptions, RenderedPost, Result};
use std::path::Path;

pub use self::blocks::BlockParser;
pub use self::image::ImagePathResolver;
pub use self::inline::InlineParser;

/// Main converter struct that orchestrates Markdown to HTML rendering.
///
/// One converter serves both call sites the site has: the post page (image
/// path resolution on) and the listing-page excerpts (resolution off); see
/// [`RenderOptions::resolve_image_paths`].
pub struct MarkdownToHtml {
    options: RenderOptions,
}

impl MarkdownToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    /// Converts a Markdown body to an HTML fragment.
    ///
    /// Never fails: malformed syntax degrades to literal paragraph text.
    /// The result is untrusted and must pass through the caller's sanitizer
    /// before insertion into a page.
    pub fn render(&self, body: &str) -> String {
        let resolver = ImagePathResolver::new(&self.options);
        let document = BlockParser::new(&resolver).parse(body);
        HtmlRenderer.render(&document)
    }

    /// Splits a raw document into frontmatter and body and renders the body.
    pub fn render_document(&self, raw: &str) -> RenderedPost {
        let parsed = frontmatter::extract(raw);
        let html = self.render(&parsed.body);
        RenderedPost {
            frontmatter: parsed.frontmatter,
            html,
        }
    }

    /// Reads a document from disk and renders it.
    ///
    /// # Arguments
    /// * `path` - Path to the `.md`/`.mdx` file
    pub fn render_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderedPost> {
        let raw = std::fs::read_to_string(path)?;
        Ok(self.render_document(&raw))
    }
}
