use crate::tag::Tag;

/// Terminator of a regular `<!-- ... -->` comment.
pub(crate) const COMMENT_END: &str = "-->";

/// Terminator of processing instructions, bogus comments and document type declarations.
pub(crate) const MARKUP_END: &str = ">";

/// The states of the tokenizer. Each variant carries the data that only makes sense while it is
/// active.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub(crate) enum State {
    /// Text content between tags.
    #[default]
    CharacterData,
    /// After `<!`, deciding between a comment, a document type declaration and a bogus comment.
    CommentOrDoctype,
    /// Inside a comment that ends with `terminator`.
    CommentBody { terminator: &'static str },
    /// Inside `<!DOCTYPE ...>`.
    DoctypeBody,
    /// Reading the name of a start tag.
    TagName,
    /// Reading the attributes of `tag`.
    ///
    /// `quote` is the delimiter of the value currently being read, `name` the name of the
    /// attribute whose value is being read.
    Attribute {
        quote: Option<char>,
        name: Option<String>,
        tag: Tag,
    },
    /// After `</`. `name_found` is set once whitespace ended the tag name.
    EndTag { name_found: bool },
}

impl State {
    pub(crate) fn debug_name(&self) -> &'static str {
        match self {
            State::CharacterData => "CharacterData",
            State::CommentOrDoctype => "CommentOrDoctype",
            State::CommentBody { .. } => "CommentBody",
            State::DoctypeBody => "DoctypeBody",
            State::TagName => "TagName",
            State::Attribute { .. } => "Attribute",
            State::EndTag { .. } => "EndTag",
        }
    }
}
