use std::cell::Cell;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::emitter::Dispatcher;
use crate::machine::Machine;
use crate::{Emitter, ErrorCode, ParseError, Readable};

/// A permissive, event-based HTML parser.
///
/// The parser owns one fully decoded document. [`HtmlParser::parse`] walks it from start to end
/// and reports what it finds to an [`Emitter`]: elements, text, comments and document type
/// declarations. No tree is built and nothing is validated. Malformed markup is reinterpreted
/// instead of rejected.
///
/// ```
/// use htmlsax::{DefaultEmitter, Event, HtmlParser};
///
/// let parser = HtmlParser::new("<p class=intro>Hello</p>");
/// let mut emitter = DefaultEmitter::default();
/// parser.parse(&mut emitter).unwrap();
///
/// assert_eq!(emitter.events()[1], Event::StartElement {
///     name: "P".to_owned(),
///     attributes: [("class".to_owned(), "intro".to_owned())].into_iter().collect(),
/// });
/// assert_eq!(emitter.events()[2], Event::Characters("Hello".to_owned()));
/// ```
///
/// The same document can be parsed more than once. Each parse starts over at the beginning.
#[derive(Debug)]
pub struct HtmlParser {
    document: Option<String>,
    active: Cell<bool>,
    error: Cell<Option<ErrorCode>>,
}

impl HtmlParser {
    /// Create a new parser from any input that can be turned into a document.
    ///
    /// Reading or decoding failures are not reported here: the parser is created without a
    /// document, and [`HtmlParser::parse`] fails with [`ParseError::EmptyDocument`].
    pub fn new<R: Readable>(input: R) -> Self {
        let document = match input.read_document() {
            Ok(document) => Some(document),
            Err(e) => {
                log::debug!("no document available: {}", e);
                None
            }
        };

        HtmlParser {
            document,
            active: Cell::new(false),
            error: Cell::new(None),
        }
    }

    /// Create a new parser from the file at `path`.
    ///
    /// Fails if the file cannot be opened. A file that cannot be read or decoded yields a parser
    /// without a document, as with [`HtmlParser::new`].
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(HtmlParser::new(File::open(path)?))
    }

    /// Parse the document, reporting every event to `emitter`.
    ///
    /// Returns `Ok(())` once the whole document was processed and
    /// [`Emitter::end_document`] was sent. Returns [`ParseError::Aborted`] if the emitter called
    /// [`HtmlParser::abort_parsing`], and [`ParseError::EmptyDocument`] if there is no document.
    pub fn parse<E: Emitter + ?Sized>(&self, emitter: &mut E) -> Result<(), ParseError> {
        let document = match self.document {
            Some(ref document) => document,
            None => {
                let error = ParseError::EmptyDocument;
                log::debug!("refusing to parse: {}", error);
                self.error.set(Some(error.code()));
                emitter.parse_error(self, &error);
                return Err(error);
            }
        };

        log::debug!("parsing document of {} bytes", document.len());
        self.error.set(None);
        self.active.set(true);
        let completed = self.tokenize(document, emitter);
        self.active.set(false);

        if completed {
            log::debug!("finished parsing");
            Ok(())
        } else {
            log::debug!("parsing was aborted");
            Err(ParseError::Aborted)
        }
    }

    fn tokenize<E: Emitter + ?Sized>(&self, document: &str, emitter: &mut E) -> bool {
        let mut dispatcher = Dispatcher::new(self, emitter);
        let mut machine = Machine::new(document);

        dispatcher.start_document();
        loop {
            if !dispatcher.is_active() {
                return false;
            }
            if !machine.step(&mut dispatcher) {
                break;
            }
        }

        if !dispatcher.is_active() {
            return false;
        }
        machine.finish(&mut dispatcher);
        if !dispatcher.is_active() {
            return false;
        }
        dispatcher.end_document();
        true
    }

    /// Stop the parse in progress.
    ///
    /// Meant to be called from inside an [`Emitter`] method. No further events are sent, and
    /// [`HtmlParser::parse`] returns [`ParseError::Aborted`]. Does nothing when no parse is in
    /// progress.
    pub fn abort_parsing(&self) {
        if self.active.get() {
            log::debug!("abort requested");
            self.active.set(false);
        }
    }

    /// Whether a parse is in progress and has not been aborted.
    pub fn is_parsing(&self) -> bool {
        self.active.get()
    }

    /// The error of the last parse that could not start, if any.
    ///
    /// Cleared whenever a parse starts. Aborting a parse does not set it.
    pub fn parser_error(&self) -> Option<ErrorCode> {
        self.error.get()
    }

    /// Line of the current parse position. Positions are not tracked, so this is always `0`.
    pub fn line_number(&self) -> usize {
        0
    }

    /// Column of the current parse position. Positions are not tracked, so this is always `0`.
    pub fn column_number(&self) -> usize {
        0
    }

    /// Public identifier of the document. Document type declarations are not inspected, so this
    /// is always `None`.
    pub fn public_id(&self) -> Option<&str> {
        None
    }

    /// System identifier of the document. Document type declarations are not inspected, so this
    /// is always `None`.
    pub fn system_id(&self) -> Option<&str> {
        None
    }

    /// Namespaces are never processed.
    pub fn should_process_namespaces(&self) -> bool {
        false
    }

    /// Namespace prefixes are never reported.
    pub fn should_report_namespace_prefixes(&self) -> bool {
        false
    }

    /// External entities are never resolved.
    pub fn should_resolve_external_entities(&self) -> bool {
        false
    }

    /// Run `f` against a dispatcher as if a parse was in progress.
    #[cfg(test)]
    pub(crate) fn run_with<E: Emitter + ?Sized>(
        &self,
        emitter: &mut E,
        f: impl FnOnce(&mut Dispatcher<'_, E>),
    ) {
        self.active.set(true);
        let mut dispatcher = Dispatcher::new(self, emitter);
        f(&mut dispatcher);
        self.active.set(false);
    }
}
