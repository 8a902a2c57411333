use super::*;

use crate::Error;

pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,

    /// Grammar rules currently being parsed, innermost last
    rules: Vec<&'static str>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(lexer: Lexer<'a>) -> Parser<'a> {
        Parser {
            lexer,
            rules: vec![],
        }
    }

    pub(crate) fn parse<T: Parse>(&mut self) -> Result<T> {
        T::parse(self)
    }

    /// Parse within a named grammar rule. Syntax errors raised inside name
    /// the innermost rule.
    pub(crate) fn rule<T>(
        &mut self,
        name: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.rules.push(name);
        let ret = f(self);
        self.rules.pop();
        ret
    }

    pub(crate) fn is_next<T: Peek>(&mut self) -> bool {
        self.is_nth::<T>(0)
    }

    pub(crate) fn is_nth<T: Peek>(&mut self, n: usize) -> bool {
        T::is_next(self.lexer.peek_nth(n).map(|lexeme| &lexeme.token))
    }

    pub(crate) fn peek_token(&mut self) -> Option<&Token> {
        self.lexer.peek_nth(0).map(|lexeme| &lexeme.token)
    }

    pub(crate) fn next_token(&mut self) -> Option<Token> {
        self.lexer.next().map(|lexeme| lexeme.token)
    }

    pub(crate) fn is_eof(&mut self) -> bool {
        self.peek_token().is_none()
    }

    /// Count and consume consecutive tokens of kind `T`.
    pub(crate) fn count_repeated<T: Peek>(&mut self) -> usize {
        let mut count = 0;

        while self.is_next::<T>() {
            self.next_token();
            count += 1;
        }

        count
    }

    pub(crate) fn skip_newlines(&mut self) {
        self.count_repeated::<Newline>();
    }

    /// Raw source text up to the end of the current line.
    pub(crate) fn rest_of_line(&mut self) -> (String, Span) {
        let span = self.lexer.rest_of_line();
        (span.text(self.lexer.source()).to_string(), span)
    }

    /// Build a syntax error at the next token.
    pub(crate) fn error(&mut self, expected: impl Into<String>) -> Error {
        let rule = self.rules.last().copied().unwrap_or("Stmts");

        let (found, offset) = match self.lexer.peek_nth(0) {
            Some(lexeme) => (Some(lexeme.token.describe()), lexeme.span.start),
            None => (None, self.lexer.source().len()),
        };

        let position = Position::from_offset(self.lexer.source(), offset);
        Error::syntax(rule, expected, found.as_deref(), position)
    }

    /// A lexical error hit while reading ahead takes precedence over the
    /// parse result: it is at or before the point where parsing stopped.
    pub(crate) fn finish<T>(mut self, result: Result<T>) -> Result<T> {
        match self.lexer.take_error() {
            Some(err) => Err(err),
            None => result,
        }
    }
}
