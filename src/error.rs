use thiserror::Error;

/// Errors produced while converting Markdown or generating pages.
#[derive(Debug, Error)]
pub enum MarkdownError {
    /// An inline delimiter opened but never closed. Splitting the text on
    /// the delimiter produced an even number of pieces.
    #[error("unterminated delimiter {delimiter:?} in: {text}")]
    UnterminatedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// A parent node was serialized without a tag or without children.
    #[error("invalid node structure: {0}")]
    Structure(String),

    /// No line starting with "# " was found when extracting a page title.
    #[error("no title heading found")]
    MissingTitle,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
