use mdx2html::{MarkdownToHtml, RenderOptions};

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[(self.next_u64() % pool.len() as u64) as usize]
    }

    fn next_inclusive_usize(&mut self, low: usize, high: usize) -> usize {
        let span = (high - low + 1) as u64;
        low + (self.next_u64() % span) as usize
    }
}

// HTML specials only ever appear inside code constructs, so any literal
// `<script` in the output would mean an escaping failure.
const FRAGMENTS: [&str; 18] = [
    "# Alpha heading",
    "## Beta *section*",
    "#### Deep heading",
    "plain prose line without markup",
    "some *emphasized* words in a line",
    "a **strong** statement and more text",
    "mixed ***both*** markers here",
    "uses `inline <code> & such` midline",
    "[home](https://example.com/) link in prose",
    "[about](/about.html) rooted link",
    "[evil](javascript:alert(1)) attempt",
    "[evil](data:text/html,<script>alert(1)</script>) attempt",
    "[evil](vbscript:msgbox) attempt",
    "![shot](pic.png)",
    "![remote](https://cdn.example.com/c.gif)",
    "before text ![inline](d.png) after text",
    "> a quoted observation",
    "---",
];

const MULTILINE_FRAGMENTS: [&str; 4] = [
    "- item one\n- item two\n- item three",
    "1. first step\n2. second step",
    "```js\nlet x = \"<script>alert(1)</script>\";\n```",
    "> first quoted line\n> second quoted line",
];

fn generate_document(rng: &mut Lcg) -> String {
    let count = rng.next_inclusive_usize(3, 10);
    let mut parts = Vec::with_capacity(count);
    for _ in 0..count {
        if rng.next_bool() {
            parts.push(rng.pick(&FRAGMENTS));
        } else {
            parts.push(rng.pick(&MULTILINE_FRAGMENTS));
        }
    }
    // Occasionally butt fragments directly against each other instead of
    // separating them with a blank line.
    let separator = if rng.next_bool() { "\n\n" } else { "\n" };
    parts.join(separator)
}

fn assert_balanced(html: &str, open: &str, close: &str) {
    assert_eq!(
        html.matches(open).count(),
        html.matches(close).count(),
        "unbalanced {}/{} in: {}",
        open,
        close,
        html
    );
}

fn assert_no_image_inside_paragraph(html: &str) {
    let mut rest = html;
    while let Some(start) = rest.find("<p>") {
        let after = &rest[start + 3..];
        let end = after.find("</p>").unwrap_or(after.len());
        assert!(
            !after[..end].contains("<img"),
            "image left inside a paragraph in: {}",
            html
        );
        rest = &after[end..];
    }
}

#[test]
fn randomized_rendering_invariants() {
    let mut rng = Lcg::new(0x5EED_2024_0305);
    let iterations = 48;

    let full = MarkdownToHtml::new(RenderOptions {
        resolve_image_paths: true,
        page_path: "/blog/post.html".to_string(),
    });
    let excerpt = MarkdownToHtml::new(RenderOptions {
        resolve_image_paths: false,
        page_path: "/blog.html".to_string(),
    });

    for i in 0..iterations {
        let body = generate_document(&mut rng);

        let html = full.render(&body);
        let again = full.render(&body);
        assert_eq!(html, again, "rendering must be deterministic (iteration {})", i);

        for scheme in ["javascript:", "data:", "vbscript:"] {
            let needle = format!("<a href=\"{}", scheme);
            assert!(
                !html.contains(&needle),
                "dangerous scheme reached an anchor on iteration {}: {}",
                i,
                html
            );
        }

        assert!(
            !html.contains("<script"),
            "unescaped code content on iteration {}: {}",
            i,
            html
        );

        assert_balanced(&html, "<p>", "</p>");
        assert_balanced(&html, "<ol>", "</ol>");
        assert_balanced(&html, "<ul>", "</ul>");
        assert_balanced(&html, "<li>", "</li>");
        assert_balanced(&html, "<blockquote>", "</blockquote>");
        assert_balanced(&html, "<pre>", "</pre>");
        assert_no_image_inside_paragraph(&html);

        let excerpt_html = excerpt.render(&body);
        assert!(
            !excerpt_html.contains("data-img-src"),
            "excerpt mode must not track images on iteration {}: {}",
            i,
            excerpt_html
        );
    }
}
