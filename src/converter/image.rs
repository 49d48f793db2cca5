//! Image path resolution.
//!
//! Blog posts reference images relative to the post file, but the rendered
//! HTML is served from page URLs like `/blog/<slug>.html`, so relative
//! sources are rewritten to site-absolute paths under `/blog/images/`.

use crate::core::ast::ImageNode;
use crate::RenderOptions;

/// Directory that holds all blog images, as served by the site.
const BLOG_IMAGES_DIR: &str = "/blog/images";

/// Resolves Markdown image sources to final `src` values.
#[derive(Debug, Clone)]
pub struct ImagePathResolver {
    resolve_paths: bool,
    /// Directory portion of the current page path, without trailing slash.
    page_dir: String,
}

impl ImagePathResolver {
    pub fn new(options: &RenderOptions) -> Self {
        let page_dir = match options.page_path.rfind('/') {
            Some(idx) => options.page_path[..idx].to_string(),
            None => String::new(),
        };
        Self {
            resolve_paths: options.resolve_image_paths,
            page_dir,
        }
    }

    /// Produces the image node for an `![alt](src)` occurrence.
    ///
    /// Absolute URLs and rooted paths pass through untouched and are not
    /// tracked; every resolved relative path is tracked so the page script
    /// can attach error handling via `data-img-src`.
    pub fn resolve(&self, alt: &str, src: &str) -> ImageNode {
        if !self.resolve_paths {
            return ImageNode {
                src: src.to_string(),
                alt: alt.to_string(),
                tracked: false,
            };
        }

        if src.starts_with("http://") || src.starts_with("https://") || src.starts_with("//") {
            return ImageNode {
                src: src.to_string(),
                alt: alt.to_string(),
                tracked: false,
            };
        }
        if src.starts_with('/') {
            return ImageNode {
                src: src.to_string(),
                alt: alt.to_string(),
                tracked: false,
            };
        }

        let resolved = if let Some(name) = src.strip_prefix("../images/") {
            format!("{}/{}", BLOG_IMAGES_DIR, name)
        } else if let Some(rest) = src.strip_prefix("../") {
            // Other ../ paths resolve against the current page's directory.
            format!("{}/{}", self.page_dir, rest)
        } else if let Some(name) = src.strip_prefix("./images/") {
            format!("{}/{}", BLOG_IMAGES_DIR, name)
        } else {
            format!("{}/{}", BLOG_IMAGES_DIR, src)
        };

        log::debug!("image path resolved: {} -> {}", src, resolved);

        ImageNode {
            src: resolved,
            alt: alt.to_string(),
            tracked: true,
        }
    }
}
