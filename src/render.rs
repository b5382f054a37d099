use crate::block::{BlockKind, ORDERED_PREFIX, classify, markdown_to_blocks};
use crate::error::MarkdownError;
use crate::inline::parse_spans;
use crate::node::HtmlNode;

/// Convert a whole Markdown document into a single `div` node whose
/// children are the rendered blocks, in document order.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let mut children = Vec::new();
    for block in markdown_to_blocks(markdown) {
        children.push(block_to_node(&block, classify(&block))?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Render one classified block to its HTML node.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<HtmlNode, MarkdownError> {
    match kind {
        BlockKind::Paragraph => Ok(HtmlNode::leaf("p", spans_to_html(block)?)),
        BlockKind::Heading => Ok(heading_to_node(block)),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => Ok(quote_to_node(block)),
        BlockKind::UnorderedList => list_to_node(block, "ul", |line| {
            line.strip_prefix("- ").unwrap_or(line).trim()
        }),
        BlockKind::OrderedList => list_to_node(block, "ol", |line| {
            // The source-level number is discarded; <ol> numbers items.
            match ORDERED_PREFIX.find(line) {
                Some(m) => line[m.end()..].trim(),
                None => line.trim(),
            }
        }),
    }
}

/// Parse inline spans and concatenate their serialized fragments.
fn spans_to_html(text: &str) -> Result<String, MarkdownError> {
    let mut out = String::new();
    for span in parse_spans(text)? {
        out.push_str(&span.to_node().to_html()?);
    }
    Ok(out)
}

fn heading_to_node(block: &str) -> HtmlNode {
    let level = block.chars().take_while(|&c| c == '#').count().min(6);
    let text = block.trim_start_matches('#').trim();
    HtmlNode::leaf(&format!("h{level}"), text)
}

fn code_to_node(block: &str) -> HtmlNode {
    let inner = block
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(block)
        .trim();
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", inner)])
}

fn quote_to_node(block: &str) -> HtmlNode {
    // Strip at most one quote marker per line so nested markers survive.
    let joined = block
        .lines()
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix('>').unwrap_or(line).trim()
        })
        .collect::<Vec<_>>()
        .join("<br>");
    HtmlNode::leaf("blockquote", joined)
}

fn list_to_node(
    block: &str,
    tag: &str,
    strip_marker: impl Fn(&str) -> &str,
) -> Result<HtmlNode, MarkdownError> {
    let mut items = Vec::new();
    for line in block.lines() {
        items.push(HtmlNode::leaf("li", spans_to_html(strip_marker(line))?));
    }
    Ok(HtmlNode::parent(tag, items))
}

/// Return the trimmed text of the first `# ` heading line.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(MarkdownError::MissingTitle)
}
