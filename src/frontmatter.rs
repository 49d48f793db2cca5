//! Frontmatter extraction.
//!
//! A document may begin with a flat `key: value` metadata block delimited by
//! `---` lines:
//!
//! ```text
//! ---
//! title: "Field Notes"
//! date: 2024-03-05
//! ---
//! Body starts here.
//! ```
//!
//! Extraction never fails: a document without a well-formed header block
//! yields an empty mapping with the whole (trimmed) document as body. Values
//! are kept as strings; date parsing and similar coercions are the caller's
//! concern.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Flat key/value metadata parsed from the header block.
pub type Frontmatter = HashMap<String, String>;

/// Output of [`extract`]: header mapping plus the remaining body.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub frontmatter: Frontmatter,
    /// Body text after the header block, trimmed of surrounding whitespace.
    pub body: String,
}

fn header_block_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\A---[ \t]*\n(.*?)\n---[ \t]*\n(.*)\z")
            .expect("header block pattern must compile")
    })
}

fn header_line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\A([^:]+):\s*(.+)\z").expect("header line pattern must compile")
    })
}

/// Splits a raw document into frontmatter and body.
///
/// Header lines that do not match the `key: value` shape are silently
/// skipped; on duplicate keys the last occurrence wins.
pub fn extract(raw: &str) -> ParsedDocument {
    let Some(captures) = header_block_pattern().captures(raw) else {
        return ParsedDocument {
            frontmatter: Frontmatter::new(),
            body: raw.trim().to_string(),
        };
    };

    let header = &captures[1];
    let body = captures[2].trim().to_string();

    let mut frontmatter = Frontmatter::new();
    for line in header.lines() {
        if let Some(entry) = header_line_pattern().captures(line) {
            let key = entry[1].trim().to_string();
            let value = strip_matching_quotes(entry[2].trim());
            frontmatter.insert(key, value.to_string());
        }
    }

    ParsedDocument { frontmatter, body }
}

/// Removes one pair of matching surrounding quotes, if present. Interior
/// quote characters are not unescaped.
fn strip_matching_quotes(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
