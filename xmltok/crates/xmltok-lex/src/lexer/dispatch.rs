//! Construct classification.
//!
//! Decides, from the character just consumed and the text that follows it,
//! which extraction rule the tokenizer runs next.

/// The extraction rule selected for the next construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construct {
    /// Insignificant whitespace between constructs; produces no token.
    Whitespace,
    /// `<?` prolog / processing instruction.
    Prolog,
    /// `<!--` comment.
    Comment,
    /// `<![CDATA[` section.
    Cdata,
    /// Any other `<!` declaration.
    Doctype,
    /// `</` end tag.
    CloseTag,
    /// `<name` start or empty-element tag.
    Tag,
    /// Character data.
    Text,
}

/// Classifies the construct starting at `current`.
///
/// `current` is the character already consumed by the tokenizer and
/// `lookahead` is the unconsumed text right after it. Only the first few
/// characters of `lookahead` are inspected.
///
/// # Example
///
/// ```
/// use xmltok_lex::lexer::{classify, Construct};
///
/// assert_eq!(classify('<', "!-- note -->"), Construct::Comment);
/// assert_eq!(classify('<', "/book>"), Construct::CloseTag);
/// assert_eq!(classify('\n', "<a>"), Construct::Whitespace);
/// assert_eq!(classify('x', "yz"), Construct::Text);
/// ```
pub fn classify(current: char, lookahead: &str) -> Construct {
    match current {
        ' ' | '\t' | '\n' | '\r' => Construct::Whitespace,
        '<' => match lookahead.as_bytes().first() {
            Some(b'?') => Construct::Prolog,
            Some(b'!') => {
                let declaration = &lookahead[1..];
                if declaration.starts_with("--") {
                    Construct::Comment
                } else if declaration.starts_with("[CDATA[") {
                    Construct::Cdata
                } else {
                    Construct::Doctype
                }
            }
            Some(b'/') => Construct::CloseTag,
            _ => Construct::Tag,
        },
        _ => Construct::Text,
    }
}
