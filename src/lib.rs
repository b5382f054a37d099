mod block;
mod config;
mod error;
mod inline;
mod node;
mod render;
mod site;

pub use block::{BlockKind, classify, markdown_to_blocks};
pub use config::Config;
pub use error::MarkdownError;
pub use inline::{Span, parse_spans};
pub use node::HtmlNode;
pub use render::{block_to_node, extract_title, markdown_to_html_node};
pub use site::{copy_dir, generate_page, generate_pages_recursive};

/// Convert a Markdown document to its HTML body fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(markdown)?.to_html()
}
