use crate::ast::*;
use crate::Error;

use std::collections::VecDeque;

pub(crate) struct Lexer<'a> {
    source: &'a str,

    /// Byte offset of the next unread character
    pos: usize,

    /// Lexemes read ahead of the parser
    next: VecDeque<Lexeme>,

    /// First unmatched character, with its offset. Once set, no more lexemes
    /// are produced.
    error: Option<(usize, Error)>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            next: VecDeque::new(),
            error: None,
        }
    }

    pub(crate) fn source(&self) -> &'a str {
        self.source
    }

    pub(crate) fn next(&mut self) -> Option<Lexeme> {
        self.lex_n(1);
        self.next.pop_front()
    }

    pub(crate) fn peek_nth(&mut self, n: usize) -> Option<&Lexeme> {
        self.lex_n(n + 1);
        self.next.get(n)
    }

    pub(crate) fn take_error(&mut self) -> Option<Error> {
        self.error.take().map(|(_, err)| err)
    }

    /// Read the raw text from the next unconsumed lexeme to the end of the
    /// line, stopping before a newline or a `#` comment. Read-ahead lexemes
    /// are discarded and the text is returned trimmed.
    pub(crate) fn rest_of_line(&mut self) -> Span {
        let start = self
            .next
            .front()
            .map(|lexeme| lexeme.span.start)
            .unwrap_or(self.pos);

        self.next.clear();

        if matches!(self.error, Some((offset, _)) if offset >= start) {
            self.error = None;
        }

        self.pos = start;

        while self.take_if(|ch| ch != '\n' && ch.is_whitespace()).is_some() {}

        let start = self.pos;

        while self.take_if(|ch| ch != '\n' && ch != '#').is_some() {}

        let text = &self.source[start..self.pos];
        Span::new(start, start + text.trim_end().len())
    }

    fn lex_n(&mut self, n: usize) {
        while self.next.len() < n && self.error.is_none() {
            match self.lex_one() {
                Some(lexeme) => self.next.push_back(lexeme),
                None => return,
            }
        }
    }

    fn lex_one(&mut self) -> Option<Lexeme> {
        // First, skip whitespace and comments
        self.skip_whitespace();

        let start = self.pos;
        let ch = self.peek_char()?;

        let token = match ch {
            ch if ch.is_ascii_alphabetic() => {
                self.consume(ch.len_utf8());
                while self.take_if(ident_ch).is_some() {}

                Token::Ident(Ident::new(&self.source[start..self.pos]))
            }
            ch if ch.is_ascii_digit() => {
                while self.take_if(|ch| ch.is_ascii_digit()).is_some() {}

                Token::Int(LitInt::new(&self.source[start..self.pos]))
            }
            ch => match Punct::from_char(ch) {
                Some(punct) => {
                    self.consume(ch.len_utf8());
                    Token::Punct(punct)
                }
                None => {
                    let position = Position::from_offset(self.source, start);
                    self.error = Some((start, Error::lexical(ch, position)));
                    return None;
                }
            },
        };

        Some(Lexeme {
            token,
            span: Span::new(start, self.pos),
        })
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn take_if<P>(&mut self, predicate: P) -> Option<char>
    where
        P: FnOnce(char) -> bool,
    {
        match self.peek_char() {
            Some(ch) if predicate(ch) => {
                self.consume(ch.len_utf8());
                Some(ch)
            }
            _ => None,
        }
    }

    /// Newlines are significant and are not skipped.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                '#' => self.skip_line_comment(),
                '\n' => return,
                ch if ch.is_whitespace() => self.consume(ch.len_utf8()),
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.take_if(|ch| ch != '\n').is_some() {}
    }

    fn consume(&mut self, amount: usize) {
        self.pos += amount;
    }
}

fn ident_ch(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}
