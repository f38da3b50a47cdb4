use crate::{Attributes, HtmlParser, ParseError};

/// An emitter is the consumer of parsing events, the "delegate" of [`HtmlParser`].
///
/// The parser calls into the emitter synchronously, in document order, while it walks the
/// document. Every method has a no-op default, so implementations only override what they care
/// about.
///
/// Every method receives the parser that is driving it. Call [`HtmlParser::abort_parsing`] on it
/// to stop parsing: no further method is called after the current one returns.
///
/// If you only want to look at events without writing a type for it, use
/// [`crate::CallbackEmitter`]. If you want owned events in a `Vec`, use
/// [`crate::DefaultEmitter`].
pub trait Emitter {
    /// The parser has started processing a document. Always the first event of a parse.
    fn start_document(&mut self, _parser: &HtmlParser) {}

    /// The parser has reached the end of the document. Always the last event of a successful
    /// parse. It is not sent when parsing was aborted.
    fn end_document(&mut self, _parser: &HtmlParser) {}

    /// A start tag was found.
    ///
    /// `name` is upper-cased, attribute names are lower-cased. For void elements such as `BR` or
    /// `IMG`, [`Emitter::end_element`] immediately follows.
    fn start_element(&mut self, _parser: &HtmlParser, _name: &str, _attributes: &Attributes) {}

    /// An element was closed.
    ///
    /// `name` is upper-cased. Never sent for an explicit end tag of a void element.
    fn end_element(&mut self, _parser: &HtmlParser, _name: &str) {}

    /// A namespace prefix came into scope.
    ///
    /// Part of the event interface for compatibility, but never sent: the parser does not process
    /// namespaces.
    fn start_prefix_mapping(&mut self, _parser: &HtmlParser, _prefix: &str, _namespace_uri: &str) {
    }

    /// A namespace prefix went out of scope.
    ///
    /// Part of the event interface for compatibility, but never sent: the parser does not process
    /// namespaces.
    fn end_prefix_mapping(&mut self, _parser: &HtmlParser, _prefix: &str) {}

    /// Text content was found.
    ///
    /// Whitespace runs inside the text are collapsed to a single space.
    fn characters(&mut self, _parser: &HtmlParser, _text: &str) {}

    /// Whitespace that does not contribute to the text content was found, for example
    /// indentation between tags.
    fn ignorable_whitespace(&mut self, _parser: &HtmlParser, _whitespace: &str) {}

    /// A comment was found.
    ///
    /// Processing instructions (`<?...>`) and malformed markup declarations are reported as
    /// comments as well.
    fn comment(&mut self, _parser: &HtmlParser, _text: &str) {}

    /// A document type declaration was found.
    ///
    /// Its contents are not inspected: the name is always `"html"` and both identifiers are
    /// `None`.
    fn doctype(
        &mut self,
        _parser: &HtmlParser,
        _name: &str,
        _public_id: Option<&str>,
        _system_id: Option<&str>,
    ) {
    }

    /// A fatal error occurred and parsing cannot continue.
    fn parse_error(&mut self, _parser: &HtmlParser, _error: &ParseError) {}

    /// A validation error occurred.
    ///
    /// Part of the event interface for compatibility, but never sent: the parser does not
    /// validate.
    fn validation_error(&mut self, _parser: &HtmlParser, _error: &ParseError) {}
}

/// Borrowed pair of parser and emitter for the duration of one parse.
///
/// Every event is dropped once the parser has been aborted. This includes events produced by the
/// same character as the one that triggered the abort, such as the end of a void element.
pub(crate) struct Dispatcher<'a, E: Emitter + ?Sized> {
    parser: &'a HtmlParser,
    emitter: &'a mut E,
}

impl<'a, E: Emitter + ?Sized> Dispatcher<'a, E> {
    pub(crate) fn new(parser: &'a HtmlParser, emitter: &'a mut E) -> Self {
        Dispatcher { parser, emitter }
    }

    #[inline]
    pub(crate) fn is_active(&self) -> bool {
        self.parser.is_parsing()
    }

    pub(crate) fn start_document(&mut self) {
        if self.is_active() {
            self.emitter.start_document(self.parser);
        }
    }

    pub(crate) fn end_document(&mut self) {
        if self.is_active() {
            self.emitter.end_document(self.parser);
        }
    }

    pub(crate) fn start_element(&mut self, name: &str, attributes: &Attributes) {
        if self.is_active() {
            self.emitter.start_element(self.parser, name, attributes);
        }
    }

    pub(crate) fn end_element(&mut self, name: &str) {
        if self.is_active() {
            self.emitter.end_element(self.parser, name);
        }
    }

    pub(crate) fn characters(&mut self, text: &str) {
        if self.is_active() {
            self.emitter.characters(self.parser, text);
        }
    }

    pub(crate) fn ignorable_whitespace(&mut self, whitespace: &str) {
        if self.is_active() {
            self.emitter.ignorable_whitespace(self.parser, whitespace);
        }
    }

    pub(crate) fn comment(&mut self, text: &str) {
        if self.is_active() {
            self.emitter.comment(self.parser, text);
        }
    }

    pub(crate) fn doctype(&mut self) {
        if self.is_active() {
            self.emitter.doctype(self.parser, "html", None, None);
        }
    }
}
