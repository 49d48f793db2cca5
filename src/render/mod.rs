mod escape;
mod html;

use crate::core::ast::DocumentAst;

pub use escape::{escape_alt_attr, escape_html};
pub use html::HtmlRenderer;

/// Walks a parsed document and produces output text.
///
/// Rendering is infallible by design: unrecognized structure has already
/// degraded to literal text during parsing, so there is nothing left to
/// reject here.
pub trait Renderer {
    fn render(&self, document: &DocumentAst) -> String;
}
