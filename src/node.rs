use crate::error::MarkdownError;

/// An HTML element tree. A `Leaf` holds literal content (an untagged leaf
/// renders its content verbatim); a `Parent` holds an ordered list of
/// children and must have a tag and at least one child when serialized.
///
/// Attribute values are emitted as-is, with no escaping of embedded
/// quotes. Known limitation, kept deliberately.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        content: Option<String>,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A tagged leaf with text content and no attributes.
    pub fn leaf(tag: &str, content: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            content: Some(content.into()),
            attrs: Vec::new(),
        }
    }

    /// An untagged leaf: serializes to its content with no surrounding tag.
    pub fn text(content: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            content: Some(content.into()),
            attrs: Vec::new(),
        }
    }

    /// A parent element wrapping the given children.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Vec::new(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attrs(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf { attrs, .. } => attrs,
            HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    /// Serialize the tree to an HTML string.
    pub fn to_html(&self) -> Result<String, MarkdownError> {
        match self {
            HtmlNode::Leaf {
                tag,
                content,
                attrs,
            } => {
                let Some(tag) = tag else {
                    // Untagged leaf: content verbatim, no wrapping.
                    return Ok(content.clone().unwrap_or_default());
                };
                let body = content.as_deref().unwrap_or("");
                Ok(format!(
                    "<{tag}{attrs}>{body}</{tag}>",
                    attrs = attrs_to_html(attrs)
                ))
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(MarkdownError::Structure(
                        "parent node has no tag".to_string(),
                    ));
                }
                if children.is_empty() {
                    return Err(MarkdownError::Structure(format!(
                        "parent node <{tag}> has no children"
                    )));
                }
                let mut out = String::new();
                out.push('<');
                out.push_str(tag);
                out.push_str(&attrs_to_html(attrs));
                out.push('>');
                for child in children {
                    out.push_str(&child.to_html()?);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                Ok(out)
            }
        }
    }
}

/// Render attributes in insertion order as ` key="value"` pairs.
fn attrs_to_html(attrs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}
