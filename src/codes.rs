//! Compatibility catalog of parser error codes.
//!
//! The numbering follows the error codes of the widely used event-driven XML parser API family
//! (`NSXMLParser` and friends), so that code written against that interface can match on familiar
//! values. This tokenizer only ever produces [`ErrorCode::EmptyDocument`]. Every other code is
//! reserved and listed for completeness only.

/// Error domain reported alongside [`ErrorCode`] values.
pub const ERROR_DOMAIN: &str = "HtmlParserErrorDomain";

macro_rules! impl_error_code {
    ($(
        $code:literal <=> $variant:ident => $description:literal,
    )*) => {
        /// All error codes of the mirrored parser API. Only `EmptyDocument` and
        /// `DelegateAbortedParse` correspond to a [`crate::ParseError`].
        #[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
        pub enum ErrorCode {
            $(
                #[doc = $description]
                $variant
            ),*
        }

        impl ErrorCode {
            /// The numeric value of this code.
            #[must_use]
            pub fn code(self) -> u32 {
                match self {
                    $( Self::$variant => $code, )*
                }
            }

            /// Look up a code by its numeric value.
            #[must_use]
            pub fn from_code(code: u32) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// A short, human-readable description of the code.
            #[must_use]
            pub fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $description, )*
                }
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.description(), self.code())
    }
}

impl_error_code! {
    1 <=> Internal => "The parser object encountered an internal error.",
    2 <=> OutOfMemory => "The parser object ran out of memory.",
    3 <=> DocumentStart => "The parser object is unable to start parsing.",
    4 <=> EmptyDocument => "The document is empty.",
    5 <=> PrematureDocumentEnd => "The document ended unexpectedly.",
    6 <=> InvalidHexCharacterRef => "Invalid hexadecimal character reference encountered.",
    7 <=> InvalidDecimalCharacterRef => "Invalid decimal character reference encountered.",
    8 <=> InvalidCharacterRef => "Invalid character reference encountered.",
    9 <=> InvalidCharacter => "Invalid character encountered.",
    10 <=> CharacterRefAtEof => "Target of character reference cannot be found.",
    11 <=> CharacterRefInProlog => "Invalid character found in the prolog.",
    12 <=> CharacterRefInEpilog => "Invalid character found in the epilog.",
    13 <=> CharacterRefInDtd => "Invalid character encountered in the DTD.",
    14 <=> EntityRefAtEof => "Target of entity reference is not found.",
    15 <=> EntityRefInProlog => "Invalid entity reference found in the prolog.",
    16 <=> EntityRefInEpilog => "Invalid entity reference found in the epilog.",
    17 <=> EntityRefInDtd => "Invalid entity reference found in the DTD.",
    18 <=> ParsedEntityRefAtEof => "Target of parsed entity reference is not found.",
    19 <=> ParsedEntityRefInProlog => "Target of parsed entity reference is not found in prolog.",
    20 <=> ParsedEntityRefInEpilog => "Target of parsed entity reference is not found in epilog.",
    21 <=> ParsedEntityRefInInternalSubset => "Target of parsed entity reference is not found in internal subset.",
    22 <=> EntityReferenceWithoutName => "Entity reference is without name.",
    23 <=> EntityReferenceMissingSemi => "Entity reference is missing semicolon.",
    24 <=> ParsedEntityRefNoName => "Parsed entity reference is without an entity name.",
    25 <=> ParsedEntityRefMissingSemi => "Parsed entity reference is missing semicolon.",
    26 <=> UndeclaredEntity => "Entity is not declared.",
    27 <=> UnparsedEntity => "Cannot parse entity.",
    28 <=> EntityIsExternal => "Cannot parse external entity.",
    29 <=> EntityIsParameter => "Entity is a parameter.",
    30 <=> UnknownEncoding => "Document encoding is unknown.",
    31 <=> EncodingNotSupported => "Document encoding is not supported.",
    32 <=> StringNotStarted => "String is not started.",
    33 <=> StringNotClosed => "String is not closed.",
    34 <=> NamespaceDeclaration => "Invalid namespace declaration encountered.",
    35 <=> EntityNotStarted => "Entity is not started.",
    36 <=> EntityNotFinished => "Entity is not finished.",
    37 <=> LessThanSymbolInAttribute => "Angle bracket is used in attribute.",
    38 <=> AttributeNotStarted => "Attribute is not started.",
    39 <=> AttributeNotFinished => "Attribute is not finished.",
    40 <=> AttributeHasNoValue => "Attribute doesn't contain a value.",
    41 <=> AttributeRedefined => "Attribute is redefined.",
    42 <=> LiteralNotStarted => "Literal is not started.",
    43 <=> LiteralNotFinished => "Literal is not finished.",
    44 <=> CommentNotFinished => "Comment is not finished.",
    45 <=> ProcessingInstructionNotStarted => "Processing instruction is not started.",
    46 <=> ProcessingInstructionNotFinished => "Processing instruction is not finished.",
    47 <=> NotationNotStarted => "Notation is not started.",
    48 <=> NotationNotFinished => "Notation is not finished.",
    49 <=> AttributeListNotStarted => "Attribute list is not started.",
    50 <=> AttributeListNotFinished => "Attribute list is not finished.",
    51 <=> MixedContentDeclNotStarted => "Mixed content declaration is not started.",
    52 <=> MixedContentDeclNotFinished => "Mixed content declaration is not finished.",
    53 <=> ElementContentDeclNotStarted => "Element content declaration is not started.",
    54 <=> ElementContentDeclNotFinished => "Element content declaration is not finished.",
    55 <=> XmlDeclNotStarted => "XML declaration is not started.",
    56 <=> XmlDeclNotFinished => "XML declaration is not finished.",
    57 <=> ConditionalSectionNotStarted => "Conditional section is not started.",
    58 <=> ConditionalSectionNotFinished => "Conditional section is not finished.",
    59 <=> ExternalSubsetNotFinished => "External subset is not finished.",
    60 <=> DoctypeDeclNotFinished => "Document type declaration is not finished.",
    61 <=> MisplacedCdataEndString => "Misplaced CDATA end string.",
    62 <=> CdataNotFinished => "CDATA block is not finished.",
    63 <=> MisplacedXmlDeclaration => "Misplaced XML declaration.",
    64 <=> SpaceRequired => "Space is required.",
    65 <=> SeparatorRequired => "Separator is required.",
    66 <=> NmtokenRequired => "Name token is required.",
    67 <=> NameRequired => "Name is required.",
    68 <=> PcdataRequired => "CDATA is required.",
    69 <=> UriRequired => "URI is required.",
    70 <=> PublicIdentifierRequired => "Public identifier is required.",
    71 <=> LtRequired => "Left angle bracket is required.",
    72 <=> GtRequired => "Right angle bracket is required.",
    73 <=> LtSlashRequired => "Left angle bracket slash is required.",
    74 <=> EqualExpected => "Equal sign expected.",
    75 <=> TagNameMismatch => "Tag name mismatch.",
    76 <=> UnfinishedTag => "Unfinished tag found.",
    77 <=> StandaloneValue => "Standalone value found.",
    78 <=> InvalidEncodingName => "Invalid encoding name found.",
    79 <=> CommentContainsDoubleHyphen => "Comment contains double hyphen.",
    80 <=> InvalidEncoding => "Invalid encoding.",
    81 <=> ExternalStandaloneEntity => "External standalone entity.",
    82 <=> InvalidConditionalSection => "Invalid conditional section.",
    83 <=> EntityValueRequired => "Entity value is required.",
    84 <=> NotWellBalanced => "Document is not well balanced.",
    85 <=> ExtraContent => "Error in content found.",
    86 <=> InvalidCharacterInEntity => "Invalid character in entity found.",
    87 <=> ParsedEntityRefInInternal => "Internal error in parsed entity reference found.",
    88 <=> EntityRefLoop => "Entity reference loop encountered.",
    89 <=> EntityBoundary => "Entity boundary error.",
    91 <=> InvalidUri => "Invalid URI specified.",
    92 <=> UriFragment => "URI fragment.",
    94 <=> NoDtd => "Missing DTD.",
    512 <=> DelegateAbortedParse => "Delegate aborted parse.",
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn numeric_values() {
        assert_eq!(ErrorCode::Internal.code(), 1);
        assert_eq!(ErrorCode::EmptyDocument.code(), 4);
        assert_eq!(ErrorCode::EntityBoundary.code(), 89);
        assert_eq!(ErrorCode::InvalidUri.code(), 91);
        assert_eq!(ErrorCode::NoDtd.code(), 94);
        assert_eq!(ErrorCode::DelegateAbortedParse.code(), 512);
    }

    #[test]
    fn lookup_by_value() {
        assert_eq!(ErrorCode::from_code(4), Some(ErrorCode::EmptyDocument));
        assert_eq!(ErrorCode::from_code(92), Some(ErrorCode::UriFragment));
        assert_eq!(ErrorCode::from_code(0), None);
        assert_eq!(ErrorCode::from_code(90), None);
        assert_eq!(ErrorCode::from_code(93), None);
    }

    #[test]
    fn lookup_agrees_with_code() {
        for value in 0..600 {
            if let Some(code) = ErrorCode::from_code(value) {
                assert_eq!(code.code(), value);
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            ErrorCode::EmptyDocument.to_string(),
            "The document is empty. (code 4)"
        );
    }
}
