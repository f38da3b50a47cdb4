use std::fs::File;
use std::io::Read;

use crate::ReadError;

/// An object that can supply a complete document to [`crate::HtmlParser::new`].
///
/// The tokenizer works on a fully decoded, in-memory document. Implementations read all of their
/// input and decode it as UTF-8.
///
/// This trait is implemented for strings, byte buffers and [`File`]. Any other `std::io::Read`
/// can be wrapped in an [`IoReader`].
pub trait Readable {
    /// Read and decode the entire document.
    fn read_document(self) -> Result<String, ReadError>;
}

impl Readable for &str {
    fn read_document(self) -> Result<String, ReadError> {
        Ok(self.to_owned())
    }
}

impl Readable for String {
    fn read_document(self) -> Result<String, ReadError> {
        Ok(self)
    }
}

impl Readable for &String {
    fn read_document(self) -> Result<String, ReadError> {
        Ok(self.clone())
    }
}

impl Readable for Vec<u8> {
    fn read_document(self) -> Result<String, ReadError> {
        Ok(String::from_utf8(self)?)
    }
}

impl Readable for &Vec<u8> {
    fn read_document(self) -> Result<String, ReadError> {
        self.as_slice().read_document()
    }
}

impl Readable for &[u8] {
    fn read_document(self) -> Result<String, ReadError> {
        self.to_vec().read_document()
    }
}

/// A [`IoReader`] can be used to construct a parser from any type that implements
/// `std::io::Read`.
///
/// Because of trait impl conflicts, `IoReader` needs to be explicitly constructed. The exception
/// to that is `File`, which can be directly passed to `HtmlParser::new`.
///
/// Example:
///
/// ```rust
/// use htmlsax::{DefaultEmitter, Event, HtmlParser, IoReader};
///
/// let parser = HtmlParser::new(IoReader::new("<title>hello world</title>".as_bytes()));
/// // more realistically: HtmlParser::new(IoReader::new(std::io::stdin().lock()))
///
/// let mut emitter = DefaultEmitter::default();
/// parser.parse(&mut emitter).unwrap();
///
/// assert!(emitter.events().contains(&Event::Characters("hello world".to_owned())));
/// ```
#[derive(Debug)]
pub struct IoReader<R: Read> {
    reader: R,
}

impl<R: Read> IoReader<R> {
    /// Construct a new `IoReader` from any type that implements `Read`.
    pub fn new(reader: R) -> Self {
        IoReader { reader }
    }
}

impl<R: Read> Readable for IoReader<R> {
    fn read_document(mut self) -> Result<String, ReadError> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl Readable for File {
    fn read_document(self) -> Result<String, ReadError> {
        IoReader::new(self).read_document()
    }
}
