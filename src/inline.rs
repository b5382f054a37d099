use std::sync::LazyLock;

use regex::Regex;

use crate::error::MarkdownError;
use crate::node::HtmlNode;

/// Matches `[text](url)` with an optional leading `!` marking an image.
/// Non-greedy so adjacent links split into separate matches.
static LINK_OR_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[(.*?)\]\((.*?)\)").expect("valid pattern"));

/// One classified run of inline text.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    /// The HTML node this span renders as.
    pub fn to_node(&self) -> HtmlNode {
        match self {
            Span::Text(text) => HtmlNode::text(text.clone()),
            Span::Bold(text) => HtmlNode::leaf("b", text.clone()),
            Span::Italic(text) => HtmlNode::leaf("i", text.clone()),
            Span::Code(text) => HtmlNode::leaf("code", text.clone()),
            Span::Link { text, url } => HtmlNode::Leaf {
                tag: Some("a".to_string()),
                content: Some(text.clone()),
                attrs: vec![("href".to_string(), url.clone())],
            },
            Span::Image { alt, url } => HtmlNode::Leaf {
                tag: Some("img".to_string()),
                content: None,
                attrs: vec![
                    ("src".to_string(), url.clone()),
                    ("alt".to_string(), alt.clone()),
                ],
            },
        }
    }
}

/// Parse raw text into an ordered sequence of spans.
///
/// Passes run in a fixed order: bold, italic, code, then links/images.
/// Each pass re-splits only `Span::Text` output of the previous pass, so
/// already-typed spans are never split again.
pub fn parse_spans(text: &str) -> Result<Vec<Span>, MarkdownError> {
    let spans = vec![Span::Text(text.to_string())];
    let spans = split_delimiter(spans, "**", Span::Bold)?;
    let spans = split_delimiter(spans, "_", Span::Italic)?;
    let spans = split_delimiter(spans, "`", Span::Code)?;
    Ok(split_links(spans))
}

/// Split every `Text` span on `delimiter`, emitting odd-indexed pieces as
/// typed spans. An even piece count means an opening delimiter was never
/// closed; the whole parse fails.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    make: fn(String) -> Span,
) -> Result<Vec<Span>, MarkdownError> {
    let mut out = Vec::new();
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };
        let pieces: Vec<&str> = text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(MarkdownError::UnterminatedDelimiter { delimiter, text });
        }
        for (i, piece) in pieces.iter().enumerate() {
            if i % 2 == 0 {
                if !piece.is_empty() {
                    out.push(Span::Text(piece.to_string()));
                }
            } else {
                // Delimited pieces are kept even when empty: `****` is a
                // zero-length bold span.
                out.push(make(piece.to_string()));
            }
        }
    }
    Ok(out)
}

/// Extract link and image spans from `Text` spans. Malformed brackets
/// simply fail to match and stay plain text.
fn split_links(spans: Vec<Span>) -> Vec<Span> {
    let mut out = Vec::new();
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };
        let mut last_end = 0;
        for caps in LINK_OR_IMAGE.captures_iter(&text) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if whole.start() > last_end {
                out.push(Span::Text(text[last_end..whole.start()].to_string()));
            }
            if whole.as_str().starts_with('!') {
                out.push(Span::Image {
                    alt: label.as_str().to_string(),
                    url: url.as_str().to_string(),
                });
            } else {
                out.push(Span::Link {
                    text: label.as_str().to_string(),
                    url: url.as_str().to_string(),
                });
            }
            last_end = whole.end();
        }
        if last_end < text.len() {
            out.push(Span::Text(text[last_end..].to_string()));
        }
    }
    out
}
