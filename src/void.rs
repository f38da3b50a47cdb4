/// Whether an upper-cased element name denotes a [void
/// element](https://developer.mozilla.org/en-US/docs/Glossary/Void_element).
///
/// Void elements cannot have any child nodes and only have a start tag. The tokenizer closes them
/// as soon as they are opened and ignores explicit end tags for them.
///
/// The comparison is case-sensitive, as element names are already upper-cased by the time the
/// tokenizer looks at them.
///
/// ```
/// assert!(htmlsax::is_void_element("BR"));
/// assert!(!htmlsax::is_void_element("DIV"));
/// assert!(!htmlsax::is_void_element("br"));
/// ```
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "AREA"
            | "BASE"
            | "BR"
            | "COL"
            | "EMBED"
            | "HR"
            | "IMG"
            | "INPUT"
            | "KEYGEN"
            | "LINK"
            | "META"
            | "PARAM"
            | "SOURCE"
            | "TRACK"
            | "WBR"
    )
}
