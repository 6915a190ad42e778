use std::{fmt, iter::Peekable, str::CharIndices};

use super::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TokenKind<'a> {
    Name(&'a str),
    /// Content between the quotes. Escapes are kept as written.
    String(&'a str),
    /// A string missing its closing quote on the same line.
    UnterminatedString(&'a str),
    Number(&'a str),
    Colon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Unknown(char),
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name(name) => write!(f, "name `{name}`"),
            TokenKind::String(value) => write!(f, "string \"{value}\""),
            TokenKind::UnterminatedString(value) => write!(f, "unterminated string \"{value}"),
            TokenKind::Number(value) => write!(f, "number `{value}`"),
            TokenKind::Colon => f.write_str("`:`"),
            TokenKind::LeftParen => f.write_str("`(`"),
            TokenKind::RightParen => f.write_str("`)`"),
            TokenKind::LeftBrace => f.write_str("`{`"),
            TokenKind::RightBrace => f.write_str("`}`"),
            TokenKind::Unknown(c) => write!(f, "character `{c}`"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub location: Location,
}

/// Splits a request into tokens. Whitespace, commas and `#` comments are
/// skipped. Never fails: anything unexpected becomes [`TokenKind::Unknown`].
pub(super) struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map(|(offset, _)| *offset).unwrap_or(self.source.len())
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.offset();

        while self.chars.peek().is_some_and(|(_, c)| predicate(*c)) {
            self.bump();
        }

        let (source, end) = (self.source, self.offset());
        &source[start..end]
    }

    fn string(&mut self) -> TokenKind<'a> {
        // opening quote
        self.bump();
        let start = self.offset();

        loop {
            match self.chars.peek().map(|(_, c)| *c) {
                None | Some('\n') => {
                    let (source, end) = (self.source, self.offset());
                    return TokenKind::UnterminatedString(&source[start..end]);
                }
                Some('"') => {
                    let (source, end) = (self.source, self.offset());
                    self.bump();
                    return TokenKind::String(&source[start..end]);
                }
                Some('\\') => {
                    self.bump();
                    if self.chars.peek().is_some_and(|(_, c)| *c != '\n') {
                        self.bump();
                    }
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.chars.peek().map(|(_, c)| *c)?;
            let location = self.location();

            let kind = match c {
                c if c.is_whitespace() || c == ',' || c == '\u{feff}' => {
                    self.bump();
                    continue;
                }
                '#' => {
                    self.eat_while(|c| c != '\n');
                    continue;
                }
                ':' => {
                    self.bump();
                    TokenKind::Colon
                }
                '(' => {
                    self.bump();
                    TokenKind::LeftParen
                }
                ')' => {
                    self.bump();
                    TokenKind::RightParen
                }
                '{' => {
                    self.bump();
                    TokenKind::LeftBrace
                }
                '}' => {
                    self.bump();
                    TokenKind::RightBrace
                }
                '"' => self.string(),
                c if c == '-' || c.is_ascii_digit() => {
                    TokenKind::Number(self.eat_while(|c| c == '-' || c == '.' || c.is_ascii_alphanumeric()))
                }
                c if c == '_' || c.is_ascii_alphabetic() => {
                    TokenKind::Name(self.eat_while(|c| c == '_' || c.is_ascii_alphanumeric()))
                }
                c => {
                    self.bump();
                    TokenKind::Unknown(c)
                }
            };

            return Some(Token { kind, location });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind<'_>> {
        Lexer::new(source).map(|token| token.kind).collect()
    }

    #[test]
    fn invocation() {
        assert_eq!(
            kinds(r#"latte: coffee(id: "coffee1") { name }"#),
            vec![
                TokenKind::Name("latte"),
                TokenKind::Colon,
                TokenKind::Name("coffee"),
                TokenKind::LeftParen,
                TokenKind::Name("id"),
                TokenKind::Colon,
                TokenKind::String("coffee1"),
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Name("name"),
                TokenKind::RightBrace,
            ]
        );
    }

    #[test]
    fn comments_and_commas_are_skipped() {
        let source = "{\n  name, # price\n  # origin }\n}";

        assert_eq!(
            kinds(source),
            vec![TokenKind::LeftBrace, TokenKind::Name("name"), TokenKind::RightBrace]
        );
    }

    #[test]
    fn braces_inside_strings_are_not_tokens() {
        assert_eq!(
            kinds(r#"item(id: "{}")"#),
            vec![
                TokenKind::Name("item"),
                TokenKind::LeftParen,
                TokenKind::Name("id"),
                TokenKind::Colon,
                TokenKind::String("{}"),
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn unterminated_string_stops_at_end_of_line() {
        assert_eq!(
            kinds("\"abc\n}"),
            vec![TokenKind::UnterminatedString("abc"), TokenKind::RightBrace]
        );
    }

    #[test]
    fn escaped_quote_does_not_terminate() {
        assert_eq!(kinds(r#""a\"b""#), vec![TokenKind::String(r#"a\"b"#)]);
    }

    #[test]
    fn numbers_and_unknown_characters() {
        assert_eq!(
            kinds("42 -1.5 @"),
            vec![
                TokenKind::Number("42"),
                TokenKind::Number("-1.5"),
                TokenKind::Unknown('@'),
            ]
        );
    }

    #[test]
    fn locations_are_one_based() {
        let tokens: Vec<_> = Lexer::new("{\n  name\n}").collect();

        assert_eq!(Location::new(1, 1), tokens[0].location);
        assert_eq!(Location::new(2, 3), tokens[1].location);
        assert_eq!(Location::new(3, 1), tokens[2].location);
    }
}
