use std::{fs::File, io::BufReader, path::Path};

use glob::glob;
use htmlsax::{Attributes, DefaultEmitter, Emitter, Event, HtmlParser, IoReader, ParseError};
use libtest_mimic::{self, Arguments, Trial};
use pretty_assertions::assert_eq;
use serde::Deserialize;


#[derive(Clone)]
struct ExpectedEvents(Vec<Event>);

impl<'de> Deserialize<'de> for ExpectedEvents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // this macro is a horrible way to define a type that deserializes only from a particular
        // string. Together with serde(untagged) this gives us really flexible enum tagging with really
        // terrible error messages.
        macro_rules! def_const {
            ($str:expr, $ty:ident) => {
                #[derive(Deserialize)]
                enum $ty {
                    #[serde(rename = $str)]
                    $ty,
                }
            };
        }

        def_const!("StartElement", StartElementConst);
        def_const!("EndElement", EndElementConst);
        def_const!("Characters", CharactersConst);
        def_const!("IgnorableWhitespace", IgnorableWhitespaceConst);
        def_const!("Comment", CommentConst);
        def_const!("DOCTYPE", DoctypeConst);

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OutputEvent {
            // "StartElement", name, attributes
            StartElement(StartElementConst, String, Attributes),
            // "EndElement", name
            EndElement(EndElementConst, String),
            // "Characters", data
            Characters(CharactersConst, String),
            // "IgnorableWhitespace", data
            IgnorableWhitespace(IgnorableWhitespaceConst, String),
            // "Comment", data
            Comment(CommentConst, String),
            // "DOCTYPE", name, public_id, system_id
            Doctype(DoctypeConst, String, Option<String>, Option<String>),
        }

        Ok(ExpectedEvents(
            Vec::deserialize(deserializer)?
                .into_iter()
                .map(|output_event| match output_event {
                    OutputEvent::StartElement(_, name, attributes) => {
                        Event::StartElement { name, attributes }
                    }
                    OutputEvent::EndElement(_, name) => Event::EndElement { name },
                    OutputEvent::Characters(_, data) => Event::Characters(data),
                    OutputEvent::IgnorableWhitespace(_, data) => Event::IgnorableWhitespace(data),
                    OutputEvent::Comment(_, data) => Event::Comment(data),
                    OutputEvent::Doctype(_, name, public_id, system_id) => Event::Doctype {
                        name,
                        public_id,
                        system_id,
                    },
                })
                .collect::<Vec<Event>>(),
        ))
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
struct Test {
    description: String,
    input: String,
    output: ExpectedEvents,
    /// Abort the parse once this many events have been received after `StartDocument`.
    #[serde(default)]
    abort_after: Option<usize>,
}

#[derive(Deserialize)]
struct Tests {
    tests: Vec<Test>,
}

/// Records events like [`DefaultEmitter`], and aborts after a fixed number of them.
struct AbortingEmitter {
    inner: DefaultEmitter,
    remaining: Option<usize>,
}

impl AbortingEmitter {
    fn new(abort_after: Option<usize>) -> Self {
        AbortingEmitter {
            inner: DefaultEmitter::default(),
            remaining: abort_after,
        }
    }

    fn count(&mut self, parser: &HtmlParser) {
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                parser.abort_parsing();
            }
        }
    }
}

impl Emitter for AbortingEmitter {
    fn start_document(&mut self, parser: &HtmlParser) {
        self.inner.start_document(parser);
        if self.remaining == Some(0) {
            parser.abort_parsing();
        }
    }

    fn end_document(&mut self, parser: &HtmlParser) {
        self.inner.end_document(parser);
    }

    fn start_element(&mut self, parser: &HtmlParser, name: &str, attributes: &Attributes) {
        self.inner.start_element(parser, name, attributes);
        self.count(parser);
    }

    fn end_element(&mut self, parser: &HtmlParser, name: &str) {
        self.inner.end_element(parser, name);
        self.count(parser);
    }

    fn characters(&mut self, parser: &HtmlParser, text: &str) {
        self.inner.characters(parser, text);
        self.count(parser);
    }

    fn ignorable_whitespace(&mut self, parser: &HtmlParser, whitespace: &str) {
        self.inner.ignorable_whitespace(parser, whitespace);
        self.count(parser);
    }

    fn comment(&mut self, parser: &HtmlParser, text: &str) {
        self.inner.comment(parser, text);
        self.count(parser);
    }

    fn doctype(
        &mut self,
        parser: &HtmlParser,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) {
        self.inner.doctype(parser, name, public_id, system_id);
        self.count(parser);
    }

    fn parse_error(&mut self, parser: &HtmlParser, error: &ParseError) {
        self.inner.parse_error(parser, error);
    }
}

fn produce_testcases_from_file(tests: &mut Vec<Trial>, path: &Path) {
    let fname = path.file_name().unwrap().to_str().unwrap();
    let f = File::open(path).unwrap();
    let parsed: Tests = serde_json::from_reader(BufReader::new(f)).unwrap();

    for (i, test) in parsed.tests.into_iter().enumerate() {
        tests.push(build_test(test.clone(), fname, i, false));
        tests.push(build_test(test, fname, i, true));
    }
}

fn build_test(test: Test, fname: &str, i: usize, from_reader: bool) -> Trial {
    let source = if from_reader { "reader" } else { "str" };
    Trial::test(
        format!("{}:{}:{}:{}", fname, i, source, test.description),
        move || {
            testutils::catch_unwind_and_report(move || {
                testutils::trace_log(&format!("input: {:?}", test.input));
                let parser = if from_reader {
                    HtmlParser::new(IoReader::new(test.input.as_bytes()))
                } else {
                    HtmlParser::new(test.input.as_str())
                };
                run_test(&parser, test);
            })
        },
    )
}

fn run_test(parser: &HtmlParser, test: Test) {
    let mut emitter = AbortingEmitter::new(test.abort_after);
    let result = parser.parse(&mut emitter);

    let mut expected = vec![Event::StartDocument];
    expected.extend(test.output.0);
    if test.abort_after.is_some() {
        assert_eq!(result, Err(ParseError::Aborted));
    } else {
        assert_eq!(result, Ok(()));
        expected.push(Event::EndDocument);
    }

    assert_eq!(emitter.inner.into_events(), expected);
    assert!(!parser.is_parsing());
    assert_eq!(parser.parser_error(), None);
}

fn main() {
    let args = Arguments::from_args();
    let mut tests = Vec::new();

    for entry in glob("tests/fixtures/*.test").unwrap() {
        produce_testcases_from_file(&mut tests, &entry.unwrap());
    }

    libtest_mimic::run(&args, tests).exit();
}
