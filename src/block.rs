use std::sync::LazyLock;

use regex::Regex;

static HEADING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} ").expect("valid pattern"));

/// Ordered-list marker, shared with the renderer so classification and
/// marker stripping can't drift apart.
pub(crate) static ORDERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("valid pattern"));

/// Block-level element kinds, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into normalized block strings.
///
/// Blocks are separated by blank lines. Within a block, empty lines are
/// dropped and each remaining line is trimmed, so runs of several blank
/// lines separate blocks the same way a single one does. Blocks that
/// normalize to the empty string are discarded.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    markdown
        .split("\n\n")
        .map(|chunk| {
            chunk
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a normalized block. Predicates run in a fixed precedence
/// order and the first match wins. The code-fence predicate inspects the
/// whole block, so a fence containing a heading-looking line is still
/// code; the other predicates only look at the start of the block.
pub fn classify(block: &str) -> BlockKind {
    if HEADING_PREFIX.is_match(block) {
        BlockKind::Heading
    } else if is_fenced_code(block) {
        BlockKind::Code
    } else if block.starts_with('>') {
        BlockKind::Quote
    } else if block.starts_with("- ") {
        BlockKind::UnorderedList
    } else if ORDERED_PREFIX.is_match(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

fn is_fenced_code(block: &str) -> bool {
    block.len() >= 6 && block.starts_with("```") && block.ends_with("```")
}
