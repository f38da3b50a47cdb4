use std::mem::take;

use crate::cursor::Cursor;
use crate::emitter::Dispatcher;
use crate::state::{State, COMMENT_END, MARKUP_END};
use crate::tag::Tag;
use crate::Emitter;

const DOCTYPE: &str = "DOCTYPE";

/// Consume the next character, or park the machine in `$state` and report the end of input.
macro_rules! read_char {
    ($slf:expr, $state:expr) => {
        match $slf.cursor.next() {
            Some(c) => c,
            None => {
                $slf.state = $state;
                return false;
            }
        }
    };
}

/// The tokenizer state machine for one parse.
#[derive(Debug)]
pub(crate) struct Machine<'a> {
    cursor: Cursor<'a>,
    state: State,
    /// Text of the token being built: character data, a tag or attribute name, an attribute
    /// value, or the start of a comment.
    pending: String,
    /// Whitespace whose significance is not decided yet.
    ignorable_whitespace: String,
}

impl<'a> Machine<'a> {
    pub(crate) fn new(document: &'a str) -> Self {
        Machine {
            cursor: Cursor::new(document),
            state: State::default(),
            pending: String::new(),
            ignorable_whitespace: String::new(),
        }
    }

    /// Run one transition. Returns `false` once the document is exhausted and the current state
    /// needs another character.
    pub(crate) fn step<E: Emitter + ?Sized>(
        &mut self,
        dispatcher: &mut Dispatcher<'_, E>,
    ) -> bool {
        let state = take(&mut self.state);
        let from = state.debug_name();

        let next_state = match state {
            State::CommentBody { terminator } => self.comment_body(terminator, dispatcher),
            State::DoctypeBody => self.doctype_body(dispatcher),
            State::CharacterData => {
                let c = read_char!(self, State::CharacterData);
                self.character_data(c, dispatcher)
            }
            State::CommentOrDoctype => {
                let c = read_char!(self, State::CommentOrDoctype);
                self.comment_or_doctype(c, dispatcher)
            }
            State::TagName => {
                let c = read_char!(self, State::TagName);
                self.tag_name(c, dispatcher)
            }
            State::Attribute {
                quote: Some(quote),
                name,
                tag,
            } => {
                let c = read_char!(
                    self,
                    State::Attribute {
                        quote: Some(quote),
                        name,
                        tag
                    }
                );
                self.quoted_value(c, quote, name, tag)
            }
            State::Attribute {
                quote: None,
                name,
                tag,
            } => {
                let c = read_char!(
                    self,
                    State::Attribute {
                        quote: None,
                        name,
                        tag
                    }
                );
                self.attribute(c, name, tag, dispatcher)
            }
            State::EndTag { name_found } => {
                let c = read_char!(self, State::EndTag { name_found });
                self.end_tag(c, name_found, dispatcher)
            }
        };

        if from != next_state.debug_name() {
            log::trace!("switch_to: {} -> {}", from, next_state.debug_name());
        }
        self.state = next_state;
        true
    }

    /// Flush whatever the machine holds once the document is exhausted.
    pub(crate) fn finish<E: Emitter + ?Sized>(mut self, dispatcher: &mut Dispatcher<'_, E>) {
        match take(&mut self.state) {
            State::CharacterData => {
                self.flush_ignorable_whitespace(dispatcher);
                self.flush_characters(dispatcher);
            }
            State::CommentOrDoctype => {
                if self.pending.eq_ignore_ascii_case(DOCTYPE) {
                    dispatcher.doctype();
                } else if !self.pending.is_empty() {
                    dispatcher.comment(&self.pending);
                }
            }
            State::CommentBody { terminator } => {
                self.comment_body(terminator, dispatcher);
            }
            State::DoctypeBody => {
                self.doctype_body(dispatcher);
            }
            state @ (State::TagName | State::Attribute { .. } | State::EndTag { .. }) => {
                log::debug!(
                    "dropping unterminated tag {:?} in state {}",
                    self.pending,
                    state.debug_name()
                );
            }
        }
    }

    fn character_data<E: Emitter + ?Sized>(
        &mut self,
        c: char,
        dispatcher: &mut Dispatcher<'_, E>,
    ) -> State {
        if c.is_whitespace() {
            if self.pending.is_empty() || self.pending.ends_with(char::is_whitespace) {
                self.ignorable_whitespace.push(c);
            } else {
                self.pending.push(' ');
            }
            return State::CharacterData;
        }

        self.flush_ignorable_whitespace(dispatcher);

        if c != '<' {
            self.pending.push(c);
            return State::CharacterData;
        }

        let next_state = match self.cursor.peek() {
            Some(next) if next.is_alphabetic() => State::TagName,
            Some('!') => {
                self.cursor.next();
                State::CommentOrDoctype
            }
            Some('?') => {
                self.cursor.next();
                State::CommentBody {
                    terminator: MARKUP_END,
                }
            }
            Some('/') => {
                self.cursor.next();
                State::EndTag { name_found: false }
            }
            _ => {
                self.pending.push(c);
                return State::CharacterData;
            }
        };

        self.flush_characters(dispatcher);
        next_state
    }

    fn comment_or_doctype<E: Emitter + ?Sized>(
        &mut self,
        c: char,
        dispatcher: &mut Dispatcher<'_, E>,
    ) -> State {
        if self.pending == "-" && c == '-' {
            self.pending.clear();
            State::CommentBody {
                terminator: COMMENT_END,
            }
        } else if self.pending.eq_ignore_ascii_case(DOCTYPE) {
            self.pending.clear();
            if c == '>' {
                // `<!DOCTYPE>` is already closed.
                dispatcher.doctype();
                State::CharacterData
            } else {
                State::DoctypeBody
            }
        } else if self.pending.chars().count() >= DOCTYPE.len() {
            self.pending.push(c);
            State::CommentBody {
                terminator: MARKUP_END,
            }
        } else {
            self.pending.push(c);
            State::CommentOrDoctype
        }
    }

    /// Report everything up to `terminator` as a comment. Unterminated comments run until the end
    /// of the document.
    fn comment_body<E: Emitter + ?Sized>(
        &mut self,
        terminator: &'static str,
        dispatcher: &mut Dispatcher<'_, E>,
    ) -> State {
        let mut text = take(&mut self.pending);
        match self.cursor.find(terminator) {
            Some(end) => {
                text.push_str(self.cursor.slice_to(end));
                self.cursor.jump_to(end + terminator.len());
            }
            None => {
                log::debug!("comment is not terminated by {:?}", terminator);
                text.push_str(self.cursor.rest());
                self.cursor.exhaust();
            }
        }
        dispatcher.comment(&text);
        State::CharacterData
    }

    /// Skip a document type declaration. Only its presence is reported.
    fn doctype_body<E: Emitter + ?Sized>(&mut self, dispatcher: &mut Dispatcher<'_, E>) -> State {
        match self.cursor.find(MARKUP_END) {
            Some(end) => self.cursor.jump_to(end + MARKUP_END.len()),
            None => {
                log::debug!("document type declaration is not terminated");
                self.cursor.exhaust();
            }
        }
        dispatcher.doctype();
        self.pending.clear();
        State::CharacterData
    }

    fn tag_name<E: Emitter + ?Sized>(
        &mut self,
        c: char,
        dispatcher: &mut Dispatcher<'_, E>,
    ) -> State {
        if c == '>' || (c == '/' && self.cursor.peek() == Some('>')) {
            if c == '/' {
                self.cursor.next();
            }
            self.take_tag().dispatch_start(dispatcher);
            State::CharacterData
        } else if c.is_whitespace() {
            State::Attribute {
                quote: None,
                name: None,
                tag: self.take_tag(),
            }
        } else {
            self.pending.push(c);
            State::TagName
        }
    }

    fn attribute<E: Emitter + ?Sized>(
        &mut self,
        c: char,
        name: Option<String>,
        tag: Tag,
        dispatcher: &mut Dispatcher<'_, E>,
    ) -> State {
        match c {
            '>' => {
                let tag = if self.pending.is_empty() {
                    tag
                } else {
                    self.commit(name, tag)
                };
                tag.dispatch_start(dispatcher);
                State::CharacterData
            }
            '/' => {
                // There are no self-closing tags in HTML. A slash is either part of the value
                // being read or ignored.
                if name.is_some() {
                    self.pending.push(c);
                }
                State::Attribute {
                    quote: None,
                    name,
                    tag,
                }
            }
            c if c.is_whitespace() => {
                if self.pending.is_empty() {
                    return State::Attribute {
                        quote: None,
                        name,
                        tag,
                    };
                }

                if name.is_none() {
                    self.cursor.skip_whitespace();
                    if self.cursor.peek() == Some('=') {
                        // `name = value`, the `=` is handled next.
                        return State::Attribute {
                            quote: None,
                            name,
                            tag,
                        };
                    }
                }

                State::Attribute {
                    quote: None,
                    name: None,
                    tag: self.commit(name, tag),
                }
            }
            '\'' | '"' => {
                let (name, tag) = if self.pending.is_empty() {
                    (name, tag)
                } else {
                    (None, self.commit(name, tag))
                };
                State::Attribute {
                    quote: Some(c),
                    name,
                    tag,
                }
            }
            '=' if name.is_none() => State::Attribute {
                quote: None,
                name: Some(take(&mut self.pending)),
                tag,
            },
            _ => {
                self.pending.push(c);
                State::Attribute {
                    quote: None,
                    name,
                    tag,
                }
            }
        }
    }

    fn quoted_value(&mut self, c: char, quote: char, name: Option<String>, tag: Tag) -> State {
        if c == quote {
            // The value is committed by the next boundary, as for unquoted values.
            State::Attribute {
                quote: None,
                name,
                tag,
            }
        } else {
            self.pending.push(c);
            State::Attribute {
                quote: Some(quote),
                name,
                tag,
            }
        }
    }

    fn end_tag<E: Emitter + ?Sized>(
        &mut self,
        c: char,
        name_found: bool,
        dispatcher: &mut Dispatcher<'_, E>,
    ) -> State {
        if name_found {
            if c == '>' {
                self.take_tag().dispatch_end(dispatcher);
                State::CharacterData
            } else {
                State::EndTag { name_found }
            }
        } else if self.pending.is_empty() {
            if c.is_alphabetic() {
                self.pending.push(c);
                State::EndTag { name_found }
            } else if c == '>' {
                // `</>` produces no event.
                State::CharacterData
            } else {
                // Not an end tag after all, e.g. `</ 1>` or `</3>`.
                self.pending.push(if c.is_whitespace() { ' ' } else { c });
                State::CommentBody {
                    terminator: MARKUP_END,
                }
            }
        } else if c.is_whitespace() {
            State::EndTag { name_found: true }
        } else if c == '>' {
            self.take_tag().dispatch_end(dispatcher);
            State::CharacterData
        } else {
            self.pending.push(c);
            State::EndTag { name_found }
        }
    }

    /// Add the attribute in `pending` to `tag`: as the value of `name`, or as a valueless
    /// attribute if no name was read.
    fn commit(&mut self, name: Option<String>, tag: Tag) -> Tag {
        let value = take(&mut self.pending);
        match name {
            Some(name) => tag.appending([(name, value)]),
            None if value.is_empty() => tag,
            None => tag.appending([(value, String::new())]),
        }
    }

    fn take_tag(&mut self) -> Tag {
        let tag = Tag::new(&self.pending);
        self.pending.clear();
        tag
    }

    fn flush_ignorable_whitespace<E: Emitter + ?Sized>(
        &mut self,
        dispatcher: &mut Dispatcher<'_, E>,
    ) {
        if !self.ignorable_whitespace.is_empty() {
            dispatcher.ignorable_whitespace(&self.ignorable_whitespace);
            self.ignorable_whitespace.clear();
        }
    }

    /// Report `pending` as text, minus a trailing space that would only separate it from the
    /// next tag.
    fn flush_characters<E: Emitter + ?Sized>(&mut self, dispatcher: &mut Dispatcher<'_, E>) {
        if self.pending.ends_with(' ') {
            self.pending.pop();
        }
        if !self.pending.is_empty() {
            dispatcher.characters(&self.pending);
        }
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Machine;
    use crate::{DefaultEmitter, Event, HtmlParser};

    fn tokenize(input: &str) -> Vec<Event> {
        let parser = HtmlParser::new("");
        let mut emitter = DefaultEmitter::default();
        parser.run_with(&mut emitter, |dispatcher| {
            let mut machine = Machine::new(input);
            while machine.step(dispatcher) {}
            machine.finish(dispatcher);
        });
        emitter.into_events()
    }

    #[test]
    fn step_reports_end_of_input() {
        let parser = HtmlParser::new("");
        let mut emitter = DefaultEmitter::default();
        parser.run_with(&mut emitter, |dispatcher| {
            let mut machine = Machine::new("ab");
            assert!(machine.step(dispatcher));
            assert!(machine.step(dispatcher));
            assert!(!machine.step(dispatcher));
            assert!(!machine.step(dispatcher));
            machine.finish(dispatcher);
        });
        assert_eq!(emitter.into_events(), vec![Event::Characters("ab".into())]);
    }

    #[test]
    fn comment_body_runs_without_input() {
        assert_eq!(tokenize("<!--"), vec![Event::Comment(String::new())]);
        assert_eq!(tokenize("<?"), vec![Event::Comment(String::new())]);
    }

    #[test]
    fn unterminated_tags_are_dropped() {
        assert!(tokenize("<a href=\"x").is_empty());
        assert!(tokenize("<a").is_empty());
        assert!(tokenize("</a").is_empty());
    }

    fn start(name: &str, attributes: &[(&str, &str)]) -> Vec<Event> {
        vec![Event::StartElement {
            name: name.into(),
            attributes: attributes
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }]
    }

    #[test]
    fn quoted_values_commit_at_the_next_boundary() {
        assert_eq!(tokenize("<a title=\"x\"/>"), start("A", &[("title", "x/")]));
        assert_eq!(tokenize("<a b=\"x\"c>"), start("A", &[("b", "xc")]));
        assert_eq!(
            tokenize("<a b=\"x\" c>"),
            start("A", &[("b", "x"), ("c", "")])
        );
        assert_eq!(tokenize("<a title=\"\">"), start("A", &[]));
    }

    #[test]
    fn equals_sign_without_a_name() {
        assert_eq!(tokenize("<a =x>"), start("A", &[("", "x")]));
    }

    #[test]
    fn whitespace_before_a_value_is_ignored() {
        assert_eq!(
            tokenize("<a  href = \"x\" >"),
            start("A", &[("href", "x")])
        );
        assert_eq!(tokenize("<a href= y>"), start("A", &[("href", "y")]));
    }

    #[test]
    fn doctype_sniffing_is_case_insensitive() {
        let doctype = Event::Doctype {
            name: "html".into(),
            public_id: None,
            system_id: None,
        };
        assert_eq!(tokenize("<!DocType html>"), vec![doctype.clone()]);
        assert_eq!(tokenize("<!doctype>"), vec![doctype]);
    }

    #[test]
    fn long_declarations_become_comments() {
        assert_eq!(
            tokenize("<!ATTLIST x>"),
            vec![Event::Comment("ATTLIST x".into())]
        );
        assert_eq!(
            tokenize("<!ENTITY x>"),
            vec![Event::Comment("ENTITY x".into())]
        );
    }
}
