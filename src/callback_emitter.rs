use crate::{Attributes, Emitter, HtmlParser, ParseError};

/// Events used by [`CallbackEmitter`].
///
/// One variant per event that the parser actually sends. All strings are borrowed from the
/// parser's buffers and are only valid for the duration of the callback.
#[derive(Debug)]
pub enum CallbackEvent<'a> {
    /// The parser has started processing a document.
    StartDocument,

    /// The parser has reached the end of the document.
    EndDocument,

    /// Visit `"<mytag mykey=myvalue>"`.
    StartElement {
        /// The upper-cased name of the element.
        name: &'a str,
        /// The attributes of the element, keyed by lower-cased name.
        attributes: &'a Attributes,
    },

    /// Visit `"</mytag>"`, or the implicit end of a void element.
    EndElement {
        /// The upper-cased name of the element.
        name: &'a str,
    },

    /// Visit the text between tags, with whitespace runs collapsed.
    Characters {
        /// The text.
        value: &'a str,
    },

    /// Visit whitespace that does not contribute to the text content.
    IgnorableWhitespace {
        /// The whitespace, as it appeared in the document.
        value: &'a str,
    },

    /// Visit a comment, like `<!-- DON'T HACK THIS WEBSITE -->`
    Comment {
        /// The contents of the comment.
        value: &'a str,
    },

    /// Visit `<!DOCTYPE html>`.
    Doctype {
        /// Name of the document type. Always `"html"`.
        name: &'a str,
        /// Public identifier. Never extracted.
        public_identifier: Option<&'a str>,
        /// System identifier. Never extracted.
        system_identifier: Option<&'a str>,
    },

    /// Visit a fatal parsing error.
    Error(&'a ParseError),
}

/// This trait is implemented for all functions that have the same signature as
/// [Callback::handle_event]. The trait only exists in case you want to implement it on a nameable
/// type.
pub trait Callback {
    /// Perform some action on a parsing event. Call [`HtmlParser::abort_parsing`] on `parser` to
    /// stop parsing.
    fn handle_event(&mut self, event: CallbackEvent<'_>, parser: &HtmlParser);
}

impl<F> Callback for F
where
    F: FnMut(CallbackEvent<'_>, &HtmlParser),
{
    fn handle_event(&mut self, event: CallbackEvent<'_>, parser: &HtmlParser) {
        self(event, parser)
    }
}

/// Consume the parsed HTML as a series of events through a callback.
///
/// Implementing [`Emitter`] yourself means writing one method per event. This is a middle ground:
/// every event arrives at a single callback as a [`CallbackEvent`].
///
/// ```
/// // Extract all text inside of span tags, in a naive way.
/// use htmlsax::{CallbackEmitter, CallbackEvent, HtmlParser};
///
/// let mut is_in_span = false;
/// let mut text_fragments = Vec::new();
/// let mut emitter = CallbackEmitter::new(|event: CallbackEvent<'_>, _: &HtmlParser| {
///     match event {
///         CallbackEvent::StartElement { name, .. } => {
///             is_in_span = name == "SPAN";
///         }
///         CallbackEvent::Characters { value } if is_in_span => {
///             text_fragments.push(value.to_owned());
///         }
///         CallbackEvent::EndElement { .. } => {
///             is_in_span = false;
///         }
///         _ => {}
///     }
/// });
///
/// let input = r#"<h1><span class=hello>Hello</span> world!</h1>"#;
/// HtmlParser::new(input).parse(&mut emitter).unwrap();
/// drop(emitter);
///
/// assert_eq!(text_fragments, vec!["Hello".to_owned()]);
/// ```
#[derive(Debug)]
pub struct CallbackEmitter<F> {
    callback: F,
}

impl<F: Callback> CallbackEmitter<F> {
    /// Create a new emitter. See type-level docs to understand basic usage.
    pub fn new(callback: F) -> Self {
        CallbackEmitter { callback }
    }

    /// Get access to the inner callback.
    pub fn callback(&self) -> &F {
        &self.callback
    }

    /// Get mutable access to the inner callback.
    pub fn callback_mut(&mut self) -> &mut F {
        &mut self.callback
    }

    /// Take the inner callback back out.
    pub fn into_callback(self) -> F {
        self.callback
    }
}

impl<F: Callback> Emitter for CallbackEmitter<F> {
    fn start_document(&mut self, parser: &HtmlParser) {
        self.callback
            .handle_event(CallbackEvent::StartDocument, parser);
    }

    fn end_document(&mut self, parser: &HtmlParser) {
        self.callback.handle_event(CallbackEvent::EndDocument, parser);
    }

    fn start_element(&mut self, parser: &HtmlParser, name: &str, attributes: &Attributes) {
        self.callback
            .handle_event(CallbackEvent::StartElement { name, attributes }, parser);
    }

    fn end_element(&mut self, parser: &HtmlParser, name: &str) {
        self.callback
            .handle_event(CallbackEvent::EndElement { name }, parser);
    }

    fn characters(&mut self, parser: &HtmlParser, text: &str) {
        self.callback
            .handle_event(CallbackEvent::Characters { value: text }, parser);
    }

    fn ignorable_whitespace(&mut self, parser: &HtmlParser, whitespace: &str) {
        self.callback.handle_event(
            CallbackEvent::IgnorableWhitespace { value: whitespace },
            parser,
        );
    }

    fn comment(&mut self, parser: &HtmlParser, text: &str) {
        self.callback
            .handle_event(CallbackEvent::Comment { value: text }, parser);
    }

    fn doctype(
        &mut self,
        parser: &HtmlParser,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) {
        self.callback.handle_event(
            CallbackEvent::Doctype {
                name,
                public_identifier: public_id,
                system_identifier: system_id,
            },
            parser,
        );
    }

    fn parse_error(&mut self, parser: &HtmlParser, error: &ParseError) {
        self.callback.handle_event(CallbackEvent::Error(error), parser);
    }
}

#[cfg(test)]
mod tests {
    use super::{CallbackEmitter, CallbackEvent};
    use crate::HtmlParser;

    #[test]
    fn abort_from_callback() {
        let mut seen = Vec::new();
        let mut emitter = CallbackEmitter::new(|event: CallbackEvent<'_>, parser: &HtmlParser| {
            if let CallbackEvent::StartElement { name, .. } = event {
                seen.push(name.to_owned());
                if name == "B" {
                    parser.abort_parsing();
                }
            }
        });

        let parser = HtmlParser::new("<a><b><c>");
        assert!(parser.parse(&mut emitter).is_err());
        assert!(!parser.is_parsing());
        drop(emitter);
        assert_eq!(seen, vec!["A", "B"]);
    }

    #[test]
    fn callback_mut() {
        let mut emitter = CallbackEmitter::new(CountingCallback::default());
        HtmlParser::new("<p>one</p><p>two</p>")
            .parse(&mut emitter)
            .unwrap();
        assert_eq!(emitter.callback_mut().elements, 2);
        assert_eq!(emitter.into_callback().events, 8);
    }

    #[derive(Default)]
    struct CountingCallback {
        events: usize,
        elements: usize,
    }

    impl super::Callback for CountingCallback {
        fn handle_event(&mut self, event: CallbackEvent<'_>, _parser: &HtmlParser) {
            self.events += 1;
            if matches!(event, CallbackEvent::StartElement { .. }) {
                self.elements += 1;
            }
        }
    }
}
