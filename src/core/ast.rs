//! Document AST produced by the block and inline parsers.
//!
//! Typed nodes replace the string placeholder tokens the line-oriented
//! rewrite passes would otherwise need: an image is an `InlineNode::Image`
//! from the moment it is recognized, so later paragraph grouping can hoist
//! it without any marker bookkeeping.

#[derive(Debug, Clone, Default)]
pub struct DocumentAst {
    pub blocks: Vec<BlockNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockNode {
    Heading { level: u8, content: Vec<InlineNode> },
    Paragraph(Vec<InlineNode>),
    Blockquote(Vec<InlineNode>),
    OrderedList(Vec<Vec<InlineNode>>),
    UnorderedList(Vec<Vec<InlineNode>>),
    CodeBlock(String),
    HorizontalRule,
    /// A standalone image, hoisted out of paragraph flow.
    Image(ImageNode),
    /// A source line that already is HTML; passed through untouched.
    RawHtml(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    /// Plain text, emitted as-is (escaping happens only at trust seams).
    Text(String),
    /// Inline code span; content is HTML-escaped at render time.
    Code(String),
    Emphasis {
        strong: bool,
        em: bool,
        content: Vec<InlineNode>,
    },
    /// Link; text and URL are escaped at render time, and dangerous URL
    /// schemes degrade the whole node to its text.
    Link { text: String, url: String },
    Image(ImageNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    /// Final image source, after any relative-path resolution.
    pub src: String,
    pub alt: String,
    /// True when the source went through path resolution; such images also
    /// carry a `data-img-src` attribute for client-side error handling.
    pub tracked: bool,
}
