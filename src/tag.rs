use std::collections::BTreeMap;

use crate::emitter::Dispatcher;
use crate::{is_void_element, Emitter};

/// Attributes of a start tag, keyed by lower-cased attribute name.
pub type Attributes = BTreeMap<String, String>;

/// One element's normalized name and attributes.
///
/// A `Tag` is never modified in place. Attributes are merged in with [`Tag::appending`], which
/// consumes the tag and produces the next value.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct Tag {
    name: String,
    attributes: Attributes,
}

impl Tag {
    /// Tag names are case-insensitive and are upper-cased.
    pub(crate) fn new(name: &str) -> Self {
        Tag {
            name: name.to_uppercase(),
            attributes: Attributes::new(),
        }
    }

    /// Merge in `attributes`. Names are case-insensitive and lower-cased. A later value replaces
    /// an earlier one with the same name.
    #[must_use]
    pub(crate) fn appending<K, V, I>(mut self, attributes: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in attributes {
            self.attributes
                .insert(name.as_ref().to_lowercase(), value.into());
        }
        self
    }

    #[cfg(test)]
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub(crate) fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub(crate) fn is_void(&self) -> bool {
        is_void_element(&self.name)
    }

    /// Report the start of this element. Void elements are closed right away.
    pub(crate) fn dispatch_start<E: Emitter + ?Sized>(&self, dispatcher: &mut Dispatcher<'_, E>) {
        dispatcher.start_element(&self.name, &self.attributes);
        if self.is_void() {
            dispatcher.end_element(&self.name);
        }
    }

    /// Report the end of this element. Void elements were already closed by
    /// [`Tag::dispatch_start`], so an explicit end tag for them is dropped.
    pub(crate) fn dispatch_end<E: Emitter + ?Sized>(&self, dispatcher: &mut Dispatcher<'_, E>) {
        if !self.is_void() {
            dispatcher.end_element(&self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;
    use crate::emitter::Dispatcher;
    use crate::{DefaultEmitter, Event, HtmlParser};

    fn attrs(pairs: &[(&str, &str)]) -> super::Attributes {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn name_is_uppercased() {
        assert_eq!(Tag::new("div").name(), "DIV");
        assert_eq!(Tag::new("DiV").name(), "DIV");
        assert_eq!(Tag::new("straße").name(), "STRASSE");
    }

    #[test]
    fn attribute_names_are_lowercased() {
        let tag = Tag::new("a").appending([("HREF", "X"), ("Data-Id", "7")]);
        assert_eq!(tag.attributes(), &attrs(&[("href", "X"), ("data-id", "7")]));
    }

    #[test]
    fn last_write_wins() {
        let tag = Tag::new("a")
            .appending([("href", "x")])
            .appending([("HREF", "y")]);
        assert_eq!(tag.attributes(), &attrs(&[("href", "y")]));
    }

    #[test]
    fn appending_produces_a_new_value() {
        let base = Tag::new("input").appending([("type", "text")]);
        let extended = base.clone().appending([("disabled", "")]);
        assert_eq!(base.attributes().len(), 1);
        assert_eq!(
            extended.attributes(),
            &attrs(&[("type", "text"), ("disabled", "")])
        );
    }

    fn dispatch(f: impl FnOnce(&mut Dispatcher<'_, DefaultEmitter>)) -> Vec<Event> {
        let parser = HtmlParser::new("");
        let mut emitter = DefaultEmitter::default();
        parser.run_with(&mut emitter, |dispatcher| f(dispatcher));
        emitter.into_events()
    }

    #[test]
    fn void_start_is_closed_immediately() {
        let events = dispatch(|d| Tag::new("br").dispatch_start(d));
        assert_eq!(
            events,
            vec![
                Event::StartElement {
                    name: "BR".into(),
                    attributes: Default::default()
                },
                Event::EndElement { name: "BR".into() },
            ]
        );
    }

    #[test]
    fn void_end_is_dropped() {
        let events = dispatch(|d| Tag::new("img").dispatch_end(d));
        assert!(events.is_empty());
    }

    #[test]
    fn regular_end() {
        let events = dispatch(|d| Tag::new("p").dispatch_end(d));
        assert_eq!(events, vec![Event::EndElement { name: "P".into() }]);
    }
}
