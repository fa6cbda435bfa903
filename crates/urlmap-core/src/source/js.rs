//! gi-docgen `urlmap.js` reader and writer.
//!
//! Accepts the shape those files have in the wild:
//!
//! ```text
//! // A map between namespaces and base URLs for their online documentation
//! baseURLs = [
//!     [ 'GLib', 'https://docs.gtk.org/glib/' ],
//!     [ 'Gio', 'https://docs.gtk.org/gio/' ],
//! ]
//! ```
//!
//! Only this single assignment is understood; it is not a JavaScript parser.

use std::fmt::Write as _;
use std::iter::Peekable;
use std::str::Chars;

use super::SourceError;
use crate::registry::UrlMap;

const VARIABLE: &str = "baseURLs";

/// Parse the `baseURLs = [...]` assignment into ordered pairs.
pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>, SourceError> {
    Parser::new(text).document()
}

/// Render a map as a `urlmap.js` file.
pub fn render(map: &UrlMap) -> String {
    let mut out = String::new();
    out.push_str("// A map between namespaces and base URLs for their online documentation\n");
    out.push_str(VARIABLE);
    out.push_str(" = [\n");
    for entry in map {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "    [ {}, {} ],",
            quote(entry.namespace()),
            quote(entry.base_url())
        );
    }
    out.push_str("];\n");
    out
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn error(&self, message: impl Into<String>) -> SourceError {
        SourceError::Js {
            line: self.line,
            column: self.column,
            message: message.into(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Skip whitespace, `//` and `/* */` comments.
    fn skip_trivia(&mut self) -> Result<(), SourceError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    match ahead.next() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            self.bump();
                            self.bump();
                            let mut prev = None;
                            loop {
                                match self.bump() {
                                    None => return Err(self.error("unterminated block comment")),
                                    Some('/') if prev == Some('*') => break,
                                    c => prev = c,
                                }
                            }
                        }
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn eat(&mut self, want: char) -> Result<bool, SourceError> {
        self.skip_trivia()?;
        if self.peek() == Some(want) {
            self.bump();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, want: char) -> Result<(), SourceError> {
        self.skip_trivia()?;
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected `{want}`, found `{c}`"))),
            None => Err(self.error(format!("expected `{want}`, found end of input"))),
        }
    }

    fn ident(&mut self) -> Result<String, SourceError> {
        self.skip_trivia()?;
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                out.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if out.is_empty() {
            return Err(self.error("expected identifier"));
        }
        Ok(out)
    }

    fn string(&mut self) -> Result<String, SourceError> {
        self.skip_trivia()?;
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            Some(c) => return Err(self.error(format!("expected string, found `{c}`"))),
            None => return Err(self.error("expected string, found end of input")),
        };
        self.bump();

        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some(c) => out.push(c),
                    None => return Err(self.error("unterminated string")),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn pair(&mut self) -> Result<(String, String), SourceError> {
        self.expect('[')?;
        let namespace = self.string()?;
        self.expect(',')?;
        let base_url = self.string()?;
        self.eat(',')?;
        self.expect(']')?;
        Ok((namespace, base_url))
    }

    fn document(mut self) -> Result<Vec<(String, String)>, SourceError> {
        let mut name = self.ident()?;
        if matches!(name.as_str(), "var" | "let" | "const") {
            name = self.ident()?;
        }
        if name != VARIABLE {
            return Err(self.error(format!("expected `{VARIABLE}`, found `{name}`")));
        }
        self.expect('=')?;
        self.expect('[')?;

        let mut pairs = Vec::new();
        loop {
            if self.eat(']')? {
                break;
            }
            pairs.push(self.pair()?);
            if !self.eat(',')? {
                self.expect(']')?;
                break;
            }
        }

        self.eat(';')?;
        self.skip_trivia()?;
        if let Some(c) = self.peek() {
            return Err(self.error(format!("unexpected `{c}` after {VARIABLE}")));
        }
        Ok(pairs)
    }
}
