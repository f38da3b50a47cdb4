//! Let's you easily try out the tokenizer with e.g.
//! printf '<h1>Hello world!</h1>' | cargo run --example=tokenize
//!
//! Set `RUST_LOG=htmlsax=trace` to watch the state machine.
use std::process::ExitCode;

use htmlsax::{CallbackEmitter, CallbackEvent, HtmlParser, IoReader};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let parser = HtmlParser::new(IoReader::new(std::io::stdin().lock()));
    let mut emitter = CallbackEmitter::new(|event: CallbackEvent<'_>, _: &HtmlParser| {
        println!("{:?}", event);
    });

    match parser.parse(&mut emitter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {} ({})", e, e.code());
            ExitCode::FAILURE
        }
    }
}
