use super::{
    lexer::{Lexer, Token, TokenKind},
    Argument, ArgumentValue, Invocation, Location, ParsedRequest, Selection, SelectionSet, SyntaxError,
};

pub(super) fn parse(source: &str) -> ParsedRequest {
    let tokens: Vec<Token<'_>> = Lexer::new(source).collect();

    // The operation body sits between the first `{` and the last `}`, anything
    // outside of it (an operation keyword or name) is ignored.
    let Some(open) = tokens.iter().position(|token| token.kind == TokenKind::LeftBrace) else {
        return ParsedRequest {
            invocations: Vec::new(),
            diagnostics: vec![SyntaxError {
                message: "request has no operation body".into(),
                location: tokens.first().map(|token| token.location).unwrap_or(Location::new(1, 1)),
            }],
        };
    };

    let close = tokens
        .iter()
        .rposition(|token| token.kind == TokenKind::RightBrace)
        .filter(|close| *close > open);

    let Some(close) = close else {
        return ParsedRequest {
            invocations: Vec::new(),
            diagnostics: vec![SyntaxError {
                message: "operation body is never closed".into(),
                location: tokens[open].location,
            }],
        };
    };

    let mut parser = Parser {
        tokens: &tokens[open + 1..close],
        position: 0,
        depth: 0,
        diagnostics: Vec::new(),
    };

    let invocations = parser.selection_set(false).into_iter().map(Invocation::from).collect();

    ParsedRequest {
        invocations,
        diagnostics: parser.diagnostics,
    }
}

/// Deepest selection set kept. The deepest meaningful one is owner > grouping > item,
/// anything past this limit is dropped so parsing never exhausts the stack.
const MAX_DEPTH: usize = 64;

struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    position: usize,
    /// Number of selection sets currently open.
    depth: usize,
    diagnostics: Vec<SyntaxError>,
}

impl<'a> Parser<'_, 'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind<'a>> {
        self.peek().map(|token| token.kind)
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind<'a>) -> bool {
        if self.peek_kind() == Some(kind) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn error(&mut self, message: impl Into<String>, location: Location) {
        self.diagnostics.push(SyntaxError {
            message: message.into(),
            location,
        });
    }

    /// Location of the next token, or of the last one at the end of input.
    fn current_location(&self) -> Location {
        self.peek()
            .or_else(|| self.tokens.last().copied())
            .map(|token| token.location)
            .unwrap_or(Location::new(1, 1))
    }

    /// Sibling fields up to the closing brace of the enclosing block, which is
    /// left for the caller. At the top level, runs until the end of the body.
    fn selection_set(&mut self, nested: bool) -> Vec<Selection> {
        let mut selections = Vec::new();

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::RightBrace if nested => break,
                TokenKind::Name(_) => selections.extend(self.selection()),
                kind => {
                    self.error(format!("expected a field name, found {kind}"), token.location);
                    self.skip();
                }
            }
        }

        selections
    }

    fn selection(&mut self) -> Option<Selection> {
        let Some(Token {
            kind: TokenKind::Name(first),
            location,
        }) = self.bump()
        else {
            return None;
        };

        let (alias, name) = if self.eat(TokenKind::Colon) {
            match self.peek_kind() {
                Some(TokenKind::Name(name)) => {
                    self.bump();
                    (Some(first), name)
                }
                Some(kind) => {
                    let location = self.current_location();
                    self.error(format!("expected a field name after alias `{first}`, found {kind}"), location);
                    return None;
                }
                None => {
                    let location = self.current_location();
                    self.error(format!("expected a field name after alias `{first}`"), location);
                    return None;
                }
            }
        } else {
            (None, first)
        };

        let arguments = if self.peek_kind() == Some(TokenKind::LeftParen) {
            self.arguments()
        } else {
            Vec::new()
        };

        let selection_set = match self.peek() {
            Some(
                open @ Token {
                    kind: TokenKind::LeftBrace,
                    ..
                },
            ) => {
                self.bump();

                if self.depth >= MAX_DEPTH {
                    self.error("selection set nested too deeply", open.location);
                    self.skip_block(TokenKind::LeftBrace, TokenKind::RightBrace);
                    return None;
                }

                self.depth += 1;
                let selections = self.selection_set(true);
                self.depth -= 1;

                if !self.eat(TokenKind::RightBrace) {
                    self.error(format!("selection set of `{name}` is never closed"), open.location);
                }

                Some(SelectionSet(selections))
            }
            _ => None,
        };

        Some(Selection {
            alias: alias.map(str::to_string),
            name: name.to_string(),
            arguments,
            selection_set,
            location,
        })
    }

    fn arguments(&mut self) -> Vec<Argument> {
        let Some(open) = self.bump() else {
            return Vec::new();
        };

        let mut arguments = Vec::new();

        loop {
            let Some(token) = self.peek() else {
                self.error("argument list is never closed", open.location);
                break;
            };

            match token.kind {
                TokenKind::RightParen => {
                    self.bump();
                    break;
                }
                TokenKind::Name(name) => {
                    self.bump();
                    let value = self.argument_value(name);

                    arguments.push(Argument {
                        name: name.to_string(),
                        value,
                        location: token.location,
                    });
                }
                // A brace can't be part of the arguments, most likely a `)` is missing.
                // Stop here so the selection set still gets parsed.
                TokenKind::LeftBrace | TokenKind::RightBrace => {
                    self.error("argument list is never closed", open.location);
                    break;
                }
                kind => {
                    self.bump();
                    self.error(format!("unexpected {kind} in argument list"), token.location);
                }
            }
        }

        arguments
    }

    fn argument_value(&mut self, name: &str) -> ArgumentValue {
        if !self.eat(TokenKind::Colon) {
            let location = self.current_location();
            self.error(format!("expected `:` after argument `{name}`"), location);
            return ArgumentValue::Malformed;
        }

        let location = self.current_location();

        match self.peek_kind() {
            Some(TokenKind::String(value) | TokenKind::Name(value) | TokenKind::Number(value)) => {
                self.bump();
                ArgumentValue::Value(value.to_string())
            }
            Some(TokenKind::UnterminatedString(_)) => {
                self.bump();
                self.error(format!("unterminated string in argument `{name}`"), location);
                ArgumentValue::Malformed
            }
            Some(kind) => {
                self.error(format!("expected a value for argument `{name}`, found {kind}"), location);
                ArgumentValue::Malformed
            }
            None => {
                self.error(format!("expected a value for argument `{name}`"), location);
                ArgumentValue::Malformed
            }
        }
    }

    /// Drops the next token, or the whole block if it opens one.
    fn skip(&mut self) {
        match self.bump().map(|token| token.kind) {
            Some(TokenKind::LeftBrace) => self.skip_block(TokenKind::LeftBrace, TokenKind::RightBrace),
            Some(TokenKind::LeftParen) => self.skip_block(TokenKind::LeftParen, TokenKind::RightParen),
            _ => {}
        }
    }

    fn skip_block(&mut self, open: TokenKind<'a>, close: TokenKind<'a>) {
        let mut depth = 1usize;

        while let Some(token) = self.bump() {
            if token.kind == open {
                depth += 1;
            } else if token.kind == close {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
        }
    }
}
