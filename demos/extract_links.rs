//! Print the target of every link in a document, stopping at the first `<footer>`.
//!
//! ```text
//! printf '<h1>Hello world!</h1><a href="foo">bar</a><footer><a href=baz>' | cargo run --example=extract_links
//! ```
//!
//! Output:
//!
//! ```text
//! link: foo
//! ```
use htmlsax::{CallbackEmitter, CallbackEvent, HtmlParser, IoReader};

fn extract_links(parser: &HtmlParser) -> Vec<String> {
    let mut links = Vec::new();
    let mut emitter = CallbackEmitter::new(|event: CallbackEvent<'_>, parser: &HtmlParser| {
        if let CallbackEvent::StartElement { name, attributes } = event {
            match name {
                "A" => links.extend(attributes.get("href").cloned()),
                "FOOTER" => parser.abort_parsing(),
                _ => {}
            }
        }
    });

    // Stopping at the footer is not a failure here.
    let _ = parser.parse(&mut emitter);
    drop(emitter);
    links
}

fn main() {
    let parser = HtmlParser::new(IoReader::new(std::io::stdin().lock()));
    for link in extract_links(&parser) {
        println!("link: {}", link);
    }
}

#[test]
fn basic() {
    let parser = HtmlParser::new("<h1>Hello world</h1><a href=foo>bar</a><footer><a href=baz>");
    assert_eq!(extract_links(&parser), vec!["foo".to_owned()]);
}
