#![deny(missing_docs)]
// This is an HTML parser. HTML can be untrusted input from the internet.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod callback_emitter;
pub mod codes;
mod cursor;
mod default_emitter;
mod emitter;
mod error;
mod machine;
mod parser;
mod reader;
mod state;
mod tag;
mod void;

pub use callback_emitter::{Callback, CallbackEmitter, CallbackEvent};
pub use codes::{ErrorCode, ERROR_DOMAIN};
pub use default_emitter::{DefaultEmitter, Event};
pub use emitter::Emitter;
pub use error::{ParseError, ReadError};
pub use parser::HtmlParser;
pub use reader::{IoReader, Readable};
pub use tag::Attributes;
pub use void::is_void_element;
