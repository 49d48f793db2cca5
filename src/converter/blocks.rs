//! Block parser - the line-oriented state machine behind `render`.
//!
//! Lines are classified in a fixed precedence order (headers, rules, fenced
//! code, blockquotes, lists, raw HTML passthrough, paragraph text) and
//! grouped into AST blocks. Consecutive plain lines form one paragraph,
//! joined with spaces; consecutive `> ` lines merge into one blockquote;
//! runs of list items of the same kind form one list, and an ordered run is
//! never reclaimed by the unordered grouping. Top-level images are hoisted
//! out of paragraphs, with any surrounding text kept in its own paragraph.
//!
//! Nothing in here errors: unrecognized syntax falls through to paragraph
//! text, and an unterminated code fence degrades the buffered lines back to
//! paragraphs.

use regex::Regex;
use std::sync::OnceLock;

use super::image::ImagePathResolver;
use super::inline::InlineParser;
use crate::core::ast::{BlockNode, DocumentAst, InlineNode};

/// Raw HTML lines opening with one of these pass straight through even when
/// the line does not end with `>`.
const BLOCK_TAG_PREFIXES: [&str; 11] = [
    "<ol>", "<ul>", "<h1", "<h2", "<h3", "<h4", "<h5", "<h6", "<blockquote", "<pre", "<hr",
];

fn ordered_item_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\A\d+\.\s+(.+)\z").expect("ordered item pattern must compile"))
}

fn unordered_item_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\A[-*]\s+(.+)\z").expect("unordered item pattern must compile"))
}

fn blockquote_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\A>\s+(.+)\z").expect("blockquote pattern must compile"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

struct FenceState {
    opening: String,
    lines: Vec<String>,
}

pub struct BlockParser<'a> {
    inline: InlineParser<'a>,
}

impl<'a> BlockParser<'a> {
    pub fn new(resolver: &'a ImagePathResolver) -> Self {
        Self {
            inline: InlineParser::new(resolver),
        }
    }

    pub fn parse(&self, body: &str) -> DocumentAst {
        let mut acc = Accumulator::new(&self.inline);
        let mut fence: Option<FenceState> = None;

        for raw_line in body.lines() {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

            if fence.is_some() {
                if line.trim() == "```" {
                    if let Some(state) = fence.take() {
                        let code = state.lines.join("\n").trim().to_string();
                        acc.blocks.push(BlockNode::CodeBlock(code));
                    }
                } else if let Some(state) = fence.as_mut() {
                    state.lines.push(line.to_string());
                }
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                acc.flush_all();
                continue;
            }

            if let Some((level, text)) = heading_line(line) {
                acc.flush_all();
                let content = self.inline.parse(text);
                acc.blocks.push(BlockNode::Heading { level, content });
            } else if line == "---" || line == "***" {
                acc.flush_all();
                acc.blocks.push(BlockNode::HorizontalRule);
            } else if trimmed.starts_with("```") {
                // The language tag shares the opening fence line; it is
                // discarded, not rendered.
                acc.flush_all();
                fence = Some(FenceState {
                    opening: trimmed.to_string(),
                    lines: Vec::new(),
                });
            } else if let Some(captures) = blockquote_pattern().captures(line) {
                acc.push_quote_line(&captures[1]);
            } else if let Some(captures) = ordered_item_pattern().captures(line) {
                acc.push_list_item(ListKind::Ordered, self.inline.parse(&captures[1]));
            } else if let Some(captures) = unordered_item_pattern().captures(line) {
                acc.push_list_item(ListKind::Unordered, self.inline.parse(&captures[1]));
            } else if is_raw_html_line(trimmed) {
                acc.flush_all();
                acc.blocks.push(BlockNode::RawHtml(line.to_string()));
            } else {
                acc.push_paragraph_line(trimmed);
            }
        }

        if let Some(state) = fence.take() {
            // Unterminated fence: keep the lines as literal paragraph text.
            log::warn!("unterminated code fence; rendering its lines as paragraph text");
            acc.push_paragraph_line(&state.opening);
            for line in &state.lines {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    acc.flush_all();
                } else {
                    acc.push_paragraph_line(trimmed);
                }
            }
        }

        acc.flush_all();
        DocumentAst { blocks: acc.blocks }
    }
}

fn heading_line(line: &str) -> Option<(u8, &str)> {
    // Largest hash count first, so `#### ` is never read as `# `.
    for (level, prefix) in [(4u8, "#### "), (3, "### "), (2, "## "), (1, "# ")] {
        if let Some(text) = line.strip_prefix(prefix) {
            return Some((level, text));
        }
    }
    None
}

fn is_raw_html_line(trimmed: &str) -> bool {
    if !trimmed.starts_with('<') {
        return false;
    }
    trimmed.ends_with('>')
        || BLOCK_TAG_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
}

/// Pending block state; at most one of the three accumulators is non-empty
/// at any time because pushing into one flushes the others.
struct Accumulator<'p, 'a> {
    inline: &'p InlineParser<'a>,
    blocks: Vec<BlockNode>,
    paragraph: Vec<String>,
    quote: Vec<String>,
    list: Option<(ListKind, Vec<Vec<InlineNode>>)>,
}

impl<'p, 'a> Accumulator<'p, 'a> {
    fn new(inline: &'p InlineParser<'a>) -> Self {
        Self {
            inline,
            blocks: Vec::new(),
            paragraph: Vec::new(),
            quote: Vec::new(),
            list: None,
        }
    }

    fn push_paragraph_line(&mut self, trimmed: &str) {
        self.flush_quote();
        self.flush_list();
        self.paragraph.push(trimmed.to_string());
    }

    fn push_quote_line(&mut self, content: &str) {
        self.flush_paragraph();
        self.flush_list();
        self.quote.push(content.to_string());
    }

    fn push_list_item(&mut self, kind: ListKind, item: Vec<InlineNode>) {
        self.flush_paragraph();
        self.flush_quote();
        match &mut self.list {
            Some((current, items)) if *current == kind => items.push(item),
            _ => {
                self.flush_list();
                self.list = Some((kind, vec![item]));
            }
        }
    }

    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_quote();
        self.flush_list();
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();

        // Hoist top-level images out of the paragraph; surrounding text
        // stays behind in its own paragraph(s).
        let mut segment: Vec<InlineNode> = Vec::new();
        for node in self.inline.parse(&text) {
            if let InlineNode::Image(image) = node {
                push_paragraph_segment(&mut self.blocks, std::mem::take(&mut segment));
                self.blocks.push(BlockNode::Image(image));
            } else {
                segment.push(node);
            }
        }
        push_paragraph_segment(&mut self.blocks, segment);
    }

    fn flush_quote(&mut self) {
        if self.quote.is_empty() {
            return;
        }
        let text = self.quote.join(" ");
        self.quote.clear();
        self.blocks.push(BlockNode::Blockquote(self.inline.parse(&text)));
    }

    fn flush_list(&mut self) {
        if let Some((kind, items)) = self.list.take() {
            let block = match kind {
                ListKind::Ordered => BlockNode::OrderedList(items),
                ListKind::Unordered => BlockNode::UnorderedList(items),
            };
            self.blocks.push(block);
        }
    }
}

/// Pushes a paragraph built from `segment`, trimming boundary whitespace
/// and dropping segments with no visible content.
fn push_paragraph_segment(blocks: &mut Vec<BlockNode>, mut segment: Vec<InlineNode>) {
    if let Some(InlineNode::Text(text)) = segment.first_mut() {
        *text = text.trim_start().to_string();
    }
    if let Some(InlineNode::Text(text)) = segment.last_mut() {
        *text = text.trim_end().to_string();
    }
    segment.retain(|node| !matches!(node, InlineNode::Text(text) if text.is_empty()));
    if !segment.is_empty() {
        blocks.push(BlockNode::Paragraph(segment));
    }
}
