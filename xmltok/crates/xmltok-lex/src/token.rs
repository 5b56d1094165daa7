//! Token definitions for the XML tokenizer.
//!
//! A [`Token`] pairs a [`TokenKind`] with its textual content. What the
//! content holds depends on the kind:
//!
//! | kind | content |
//! |---|---|
//! | `Prolog`, `Doctype`, `Comment`, `Cdata` | the whole construct, delimiters included |
//! | `OpenTag`, `CloseTag`, `SelfClosingTag` | the tag name only |
//! | `Text` | the raw character run, entities undecoded |

use std::fmt;

/// The lexical category of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// `<?xml ...?>` declaration.
    Prolog,
    /// `<!DOCTYPE ...>` declaration.
    Doctype,
    /// `<name ...>` element start tag.
    OpenTag,
    /// `</name>` element end tag.
    CloseTag,
    /// `<name .../>` empty element tag.
    SelfClosingTag,
    /// Character data between markup.
    Text,
    /// `<!-- ... -->` comment.
    Comment,
    /// `<![CDATA[ ... ]]>` section.
    Cdata,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Prolog,
        TokenKind::Doctype,
        TokenKind::OpenTag,
        TokenKind::CloseTag,
        TokenKind::SelfClosingTag,
        TokenKind::Text,
        TokenKind::Comment,
        TokenKind::Cdata,
    ];

    /// Returns the upper-case label used when rendering tokens.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Prolog => "PROLOG",
            TokenKind::Doctype => "DOCTYPE",
            TokenKind::OpenTag => "OPEN_TAG",
            TokenKind::CloseTag => "CLOSE_TAG",
            TokenKind::SelfClosingTag => "SELF_CLOSING_TAG",
            TokenKind::Text => "TEXT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Cdata => "CDATA",
        }
    }

    /// Returns a human-readable description for diagnostics.
    pub fn description(self) -> &'static str {
        match self {
            TokenKind::Prolog => "prolog",
            TokenKind::Doctype => "doctype declaration",
            TokenKind::OpenTag => "open tag",
            TokenKind::CloseTag => "close tag",
            TokenKind::SelfClosingTag => "self-closing tag",
            TokenKind::Text => "text",
            TokenKind::Comment => "comment",
            TokenKind::Cdata => "CDATA section",
        }
    }

    /// Returns true for the three element tag kinds, whose content is a
    /// tag name rather than a verbatim span.
    pub fn is_tag(self) -> bool {
        matches!(
            self,
            TokenKind::OpenTag | TokenKind::CloseTag | TokenKind::SelfClosingTag
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit produced by the tokenizer.
///
/// Tokens own their content and stay valid after the tokenizer that
/// produced them is reset or dropped. Two tokens are equal when both their
/// kind and content are equal.
///
/// # Example
///
/// ```
/// use xmltok_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::OpenTag, "library");
/// assert_eq!(token.kind(), TokenKind::OpenTag);
/// assert_eq!(token.content(), "library");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    content: String,
}

impl Token {
    /// Creates a token of `kind` with the given content.
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Returns the token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the token's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the token, returning its content.
    pub fn into_content(self) -> String {
        self.content
    }
}

/// Debug rendering: the kind label right-aligned, followed by the content.
///
/// Meant for diagnostics only; the format is not parseable.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenKind: {:>16}, data: {}", self.kind.name(), self.content)
    }
}
