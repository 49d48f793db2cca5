//! Inline parser - turns a line of Markdown into typed inline nodes.
//!
//! Single left-to-right scan, no backtracking. Precedence mirrors the
//! rewrite order the output contract fixes: images bind before links, and
//! `***` before `**` before `*`. A delimiter with no closer is kept as
//! literal text; nothing here ever fails.

use super::image::ImagePathResolver;
use crate::core::ast::InlineNode;

pub struct InlineParser<'a> {
    resolver: &'a ImagePathResolver,
}

impl<'a> InlineParser<'a> {
    pub fn new(resolver: &'a ImagePathResolver) -> Self {
        Self { resolver }
    }

    pub fn parse(&self, text: &str) -> Vec<InlineNode> {
        let mut nodes = Vec::new();
        let mut literal = String::new();
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            let scanned = if rest.starts_with("![") {
                self.scan_image(rest)
            } else if rest.starts_with('`') {
                Self::scan_code(rest)
            } else if rest.starts_with('*') {
                self.scan_emphasis(rest)
            } else if rest.starts_with('[') {
                self.scan_link(rest)
            } else {
                None
            };

            if let Some((node, consumed)) = scanned {
                if !literal.is_empty() {
                    nodes.push(InlineNode::Text(std::mem::take(&mut literal)));
                }
                nodes.push(node);
                pos += consumed;
                continue;
            }

            let Some(ch) = rest.chars().next() else { break };
            literal.push(ch);
            pos += ch.len_utf8();
        }

        if !literal.is_empty() {
            nodes.push(InlineNode::Text(literal));
        }
        nodes
    }

    /// `![alt](src)` — alt may be empty, src must not be.
    fn scan_image(&self, rest: &str) -> Option<(InlineNode, usize)> {
        let after_bang = &rest[2..];
        let alt_end = after_bang.find(']')?;
        let alt = &after_bang[..alt_end];
        let tail = after_bang[alt_end + 1..].strip_prefix('(')?;
        let src_end = tail.find(')')?;
        if src_end == 0 {
            return None;
        }
        let src = &tail[..src_end];
        let consumed = 2 + alt_end + 2 + src_end + 1;
        Some((InlineNode::Image(self.resolver.resolve(alt, src)), consumed))
    }

    /// `[text](url)` — both parts must be non-empty.
    fn scan_link(&self, rest: &str) -> Option<(InlineNode, usize)> {
        let after_open = &rest[1..];
        let text_end = after_open.find(']')?;
        if text_end == 0 {
            return None;
        }
        let text = &after_open[..text_end];
        let tail = after_open[text_end + 1..].strip_prefix('(')?;
        let url_end = tail.find(')')?;
        if url_end == 0 {
            return None;
        }
        let url = &tail[..url_end];
        let consumed = 1 + text_end + 2 + url_end + 1;
        Some((
            InlineNode::Link {
                text: text.to_string(),
                url: url.to_string(),
            },
            consumed,
        ))
    }

    /// Backtick span; the content is opaque to every other inline rule.
    fn scan_code(rest: &str) -> Option<(InlineNode, usize)> {
        let after_tick = &rest[1..];
        let close = after_tick.find('`')?;
        if close == 0 {
            return None;
        }
        let code = &after_tick[..close];
        Some((InlineNode::Code(code.to_string()), close + 2))
    }

    /// `***x***`, `**x**` or `*x*`, tried in that order so triple markers
    /// are never misread as nested single/double. Emphasis content is
    /// parsed recursively, which is what gives `**a *b* c**` its nesting.
    fn scan_emphasis(&self, rest: &str) -> Option<(InlineNode, usize)> {
        let run = rest.chars().take_while(|&c| c == '*').count();

        if run >= 3 {
            if let Some(end) = find_nonempty(&rest[3..], "***") {
                let content = &rest[3..3 + end];
                return Some((
                    InlineNode::Emphasis {
                        strong: true,
                        em: true,
                        content: self.parse(content),
                    },
                    end + 6,
                ));
            }
        }

        if run >= 2 {
            if let Some(end) = find_nonempty(&rest[2..], "**") {
                let content = &rest[2..2 + end];
                return Some((
                    InlineNode::Emphasis {
                        strong: true,
                        em: false,
                        content: self.parse(content),
                    },
                    end + 4,
                ));
            }
        }

        if let Some(end) = find_single_star(&rest[1..]) {
            let content = &rest[1..1 + end];
            return Some((
                InlineNode::Emphasis {
                    strong: false,
                    em: true,
                    content: self.parse(content),
                },
                end + 2,
            ));
        }

        None
    }
}

fn find_nonempty(haystack: &str, needle: &str) -> Option<usize> {
    match haystack.find(needle) {
        Some(0) => haystack[needle.len()..]
            .find(needle)
            .map(|idx| idx + needle.len()),
        other => other,
    }
}

/// Position of the closing `*` for an italic span: the first `*` that is
/// not half of a `**` pair (those belong to a nested bold span) and does
/// not close an empty span.
fn find_single_star(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'*' {
            if idx + 1 < bytes.len() && bytes[idx + 1] == b'*' {
                idx += 2;
                continue;
            }
            if idx > 0 {
                return Some(idx);
            }
        }
        idx += 1;
    }
    None
}
