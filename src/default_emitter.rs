use crate::callback_emitter::{Callback, CallbackEmitter, CallbackEvent};
use crate::{Attributes, Emitter, ErrorCode, HtmlParser, ParseError};

/// An owned parsing event, as recorded by [`DefaultEmitter`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Event {
    /// See [`Emitter::start_document`].
    StartDocument,
    /// See [`Emitter::end_document`].
    EndDocument,
    /// See [`Emitter::start_element`].
    StartElement {
        /// The upper-cased element name.
        name: String,
        /// The attributes, keyed by lower-cased name.
        attributes: Attributes,
    },
    /// See [`Emitter::end_element`].
    EndElement {
        /// The upper-cased element name.
        name: String,
    },
    /// See [`Emitter::characters`].
    Characters(String),
    /// See [`Emitter::ignorable_whitespace`].
    IgnorableWhitespace(String),
    /// See [`Emitter::comment`].
    Comment(String),
    /// See [`Emitter::doctype`].
    Doctype {
        /// Name of the document type.
        name: String,
        /// Public identifier.
        public_id: Option<String>,
        /// System identifier.
        system_id: Option<String>,
    },
    /// See [`Emitter::parse_error`].
    Error(ErrorCode),
}

#[derive(Debug, Default)]
struct EventRecorder {
    events: Vec<Event>,
}

impl Callback for EventRecorder {
    fn handle_event(&mut self, event: CallbackEvent<'_>, _parser: &HtmlParser) {
        let event = match event {
            CallbackEvent::StartDocument => Event::StartDocument,
            CallbackEvent::EndDocument => Event::EndDocument,
            CallbackEvent::StartElement { name, attributes } => Event::StartElement {
                name: name.to_owned(),
                attributes: attributes.clone(),
            },
            CallbackEvent::EndElement { name } => Event::EndElement {
                name: name.to_owned(),
            },
            CallbackEvent::Characters { value } => Event::Characters(value.to_owned()),
            CallbackEvent::IgnorableWhitespace { value } => {
                Event::IgnorableWhitespace(value.to_owned())
            }
            CallbackEvent::Comment { value } => Event::Comment(value.to_owned()),
            CallbackEvent::Doctype {
                name,
                public_identifier,
                system_identifier,
            } => Event::Doctype {
                name: name.to_owned(),
                public_id: public_identifier.map(str::to_owned),
                system_id: system_identifier.map(str::to_owned),
            },
            CallbackEvent::Error(error) => Event::Error(error.code()),
        };
        self.events.push(event);
    }
}

/// The default implementation of [`crate::Emitter`], which records every event as an owned
/// [`Event`].
///
/// Convenient for tests and small documents. Use [`CallbackEmitter`] or your own emitter to
/// avoid the allocations.
#[derive(Debug)]
pub struct DefaultEmitter {
    inner: CallbackEmitter<EventRecorder>,
}

impl Default for DefaultEmitter {
    fn default() -> Self {
        DefaultEmitter {
            inner: CallbackEmitter::new(EventRecorder::default()),
        }
    }
}

impl DefaultEmitter {
    /// The events recorded so far, in document order.
    pub fn events(&self) -> &[Event] {
        &self.inner.callback().events
    }

    /// Consume the emitter and return the recorded events.
    pub fn into_events(self) -> Vec<Event> {
        self.inner.into_callback().events
    }
}

// opaque type around inner emitter
impl Emitter for DefaultEmitter {
    fn start_document(&mut self, parser: &HtmlParser) {
        self.inner.start_document(parser);
    }

    fn end_document(&mut self, parser: &HtmlParser) {
        self.inner.end_document(parser);
    }

    fn start_element(&mut self, parser: &HtmlParser, name: &str, attributes: &Attributes) {
        self.inner.start_element(parser, name, attributes);
    }

    fn end_element(&mut self, parser: &HtmlParser, name: &str) {
        self.inner.end_element(parser, name);
    }

    fn characters(&mut self, parser: &HtmlParser, text: &str) {
        self.inner.characters(parser, text);
    }

    fn ignorable_whitespace(&mut self, parser: &HtmlParser, whitespace: &str) {
        self.inner.ignorable_whitespace(parser, whitespace);
    }

    fn comment(&mut self, parser: &HtmlParser, text: &str) {
        self.inner.comment(parser, text);
    }

    fn doctype(
        &mut self,
        parser: &HtmlParser,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) {
        self.inner.doctype(parser, name, public_id, system_id);
    }

    fn parse_error(&mut self, parser: &HtmlParser, error: &ParseError) {
        self.inner.parse_error(parser, error);
    }
}
