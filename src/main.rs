//! CLI for mdx2html - renders an MDX/Markdown blog post to an HTML fragment.

use clap::Parser;
use mdx2html::{MarkdownToHtml, RenderOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown/MDX file path
    input: PathBuf,

    /// Output HTML file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Page path the fragment will be served under; relative image
    /// references resolve against its directory
    #[arg(long, default_value = "/blog/post.html")]
    page_path: String,

    /// Leave image sources untouched (excerpt mode)
    #[arg(long)]
    no_resolve_images: bool,

    /// Print frontmatter key/value pairs to stderr
    #[arg(long)]
    show_meta: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = RenderOptions {
        resolve_image_paths: !args.no_resolve_images,
        page_path: args.page_path,
    };

    let converter = MarkdownToHtml::new(options);

    match converter.render_file(&args.input) {
        Ok(post) => {
            if args.show_meta {
                for (key, value) in &post.frontmatter {
                    eprintln!("{}: {}", key, value);
                }
            }
            if let Some(output) = args.output {
                if let Err(e) = std::fs::write(&output, &post.html) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully rendered to {:?}", output);
            } else {
                println!("{}", post.html);
            }
        }
        Err(e) => {
            eprintln!("Error rendering post: {}", e);
            std::process::exit(1);
        }
    }
}
