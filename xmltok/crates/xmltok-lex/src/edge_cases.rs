//! Edge case tests for xmltok-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Token, TokenKind, Tokenizer};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    // ==================== WHITESPACE ====================

    #[test]
    fn test_edge_whitespace_between_tags_dropped() {
        let t = lex_all("<a>\n\t<b/>\r\n</a>");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|tok| tok.kind().is_tag()));
    }

    #[test]
    fn test_edge_form_feed_is_text() {
        let t = lex_all("\u{000C}");
        assert_eq!(t, vec![Token::new(TokenKind::Text, "\u{000C}")]);
    }

    #[test]
    fn test_edge_text_keeps_interior_newlines() {
        let t = lex_all("<p>line one\nline two</p>");
        assert_eq!(t[1].content(), "line one\nline two");
    }

    // ==================== DECLARATIONS ====================

    #[test]
    fn test_edge_minimal_prolog() {
        // "?>" is searched right after '<', so "<?>" is complete.
        assert_eq!(lex_all("<?>"), vec![Token::new(TokenKind::Prolog, "<?>")]);
    }

    #[test]
    fn test_edge_minimal_comment() {
        assert_eq!(
            lex_all("<!---->"),
            vec![Token::new(TokenKind::Comment, "<!---->")]
        );
    }

    #[test]
    fn test_edge_empty_cdata() {
        assert_eq!(
            lex_all("<![CDATA[]]>"),
            vec![Token::new(TokenKind::Cdata, "<![CDATA[]]>")]
        );
    }

    #[test]
    fn test_edge_cdata_with_gt_inside() {
        assert_eq!(
            lex_all("<![CDATA[a > b]]>"),
            vec![Token::new(TokenKind::Cdata, "<![CDATA[a > b]]>")]
        );
    }

    #[test]
    fn test_edge_comment_with_double_dash_inside() {
        assert_eq!(
            lex_all("<!-- a -- b -->"),
            vec![Token::new(TokenKind::Comment, "<!-- a -- b -->")]
        );
    }

    #[test]
    fn test_edge_doctype_stops_at_first_gt() {
        // Internal subsets are not understood; the declaration ends at the first '>'.
        let t = lex_all("<!DOCTYPE a [<!ELEMENT a (#PCDATA)>]><a/>");
        assert_eq!(t[0], Token::new(TokenKind::Doctype, "<!DOCTYPE a [<!ELEMENT a (#PCDATA)>"));
        assert_eq!(t[1], Token::new(TokenKind::Text, "]>"));
        assert_eq!(t[2], Token::new(TokenKind::SelfClosingTag, "a"));
    }

    #[test]
    fn test_edge_lowercase_doctype() {
        assert_eq!(
            lex_all("<!doctype html>"),
            vec![Token::new(TokenKind::Doctype, "<!doctype html>")]
        );
    }

    // ==================== FAILURES ====================

    #[test]
    fn test_edge_unterminated_after_valid_tokens() {
        let err = tokenize("<a>text</a>\n<?xml").unwrap_err();
        match err {
            LexError::UnterminatedConstruct { kind, at, .. } => {
                assert_eq!(kind, TokenKind::Prolog);
                assert_eq!(at.offset, 12);
                assert_eq!(at.line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_edge_bare_bang_is_unterminated_doctype() {
        let err = tokenize("<!").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnterminatedConstruct {
                kind: TokenKind::Doctype,
                terminator: ">",
                ..
            }
        ));
    }

    #[test]
    fn test_edge_unclosed_tags_are_not_errors() {
        assert_eq!(
            lex_all("<a"),
            vec![Token::new(TokenKind::OpenTag, "a")]
        );
    }

    // ==================== VOLUME ====================

    #[test]
    fn test_edge_long_text() {
        let body = "x".repeat(100_000);
        let t = lex_all(&format!("<p>{body}</p>"));
        assert_eq!(t[1].content(), body);
    }

    #[test]
    fn test_edge_many_tags() {
        let source = "<a></a>".repeat(20_000);
        assert_eq!(lex_all(&source).len(), 40_000);
    }

    #[test]
    fn test_edge_many_comments() {
        let source = "<!--x-->".repeat(5_000);
        let t = lex_all(&source);
        assert_eq!(t.len(), 5_000);
        assert!(t.iter().all(|tok| tok.kind() == TokenKind::Comment));
    }

    #[test]
    fn test_edge_reuse_session_many_times() {
        let mut tokenizer = Tokenizer::new();
        for i in 0..100 {
            tokenizer.reset(format!("<item{i}/>"));
            let t = tokenizer.tokenize().unwrap();
            assert_eq!(t, vec![Token::new(TokenKind::SelfClosingTag, format!("item{i}"))]);
        }
    }
}
