use crate::meta::error::MetaSyntaxError;
use crate::meta::tokenizer::{MetaToken, MetaTokenKind};

/// Recursive-descent reader for the meta-syntax:
///
/// ```text
/// grammar     := rule+
/// rule        := IDENTIFIER ':' option_list ';'
/// option_list := option ('|' option)*
/// option      := IDENTIFIER*
/// ```
///
/// An `option` with zero identifiers is a valid ε-alternative.
struct MetaParser<'a> {
    tokens: &'a [MetaToken],
    pos: usize,
}

pub fn parse(tokens: &[MetaToken]) -> Result<Vec<(String, Vec<Vec<String>>)>, MetaSyntaxError> {
    let mut parser = MetaParser { tokens, pos: 0 };
    let mut rules = Vec::new();
    while parser.pos < parser.tokens.len() {
        rules.push(parser.parse_rule()?);
    }
    Ok(rules)
}

impl<'a> MetaParser<'a> {
    fn peek(&self) -> Option<&MetaToken> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&MetaToken> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn end_position(&self) -> (usize, usize) {
        match self.tokens.last() {
            Some(tok) => (tok.line, tok.col),
            None => (1, 1),
        }
    }

    fn parse_rule(&mut self) -> Result<(String, Vec<Vec<String>>), MetaSyntaxError> {
        let (start_line, start_col) = self
            .peek()
            .map(|t| (t.line, t.col))
            .unwrap_or_else(|| self.end_position());

        let lhs = self.expect_identifier()?;
        self.expect(MetaTokenKind::Colon, "':'")?;
        let alternatives = self.parse_option_list()?;
        if self.peek().map(|t| &t.kind) != Some(&MetaTokenKind::Semicolon) {
            return Err(MetaSyntaxError::UnterminatedRule {
                line: start_line,
                col: start_col,
            });
        }
        self.advance();
        Ok((lhs, alternatives))
    }

    fn parse_option_list(&mut self) -> Result<Vec<Vec<String>>, MetaSyntaxError> {
        let mut options = vec![self.parse_option()];
        while self.peek().map(|t| &t.kind) == Some(&MetaTokenKind::Bar) {
            self.advance();
            options.push(self.parse_option());
        }
        Ok(options)
    }

    fn parse_option(&mut self) -> Vec<String> {
        let mut symbols = Vec::new();
        while let Some(MetaToken {
            kind: MetaTokenKind::Identifier(name),
            ..
        }) = self.peek()
        {
            symbols.push(name.clone());
            self.advance();
        }
        symbols
    }

    fn expect_identifier(&mut self) -> Result<String, MetaSyntaxError> {
        match self.peek() {
            Some(MetaToken {
                kind: MetaTokenKind::Identifier(name),
                ..
            }) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            Some(tok) => Err(MetaSyntaxError::UnexpectedToken {
                expected: "an identifier",
                line: tok.line,
                col: tok.col,
            }),
            None => {
                let (line, col) = self.end_position();
                Err(MetaSyntaxError::UnexpectedToken {
                    expected: "an identifier",
                    line,
                    col,
                })
            }
        }
    }

    fn expect(&mut self, kind: MetaTokenKind, expected: &'static str) -> Result<(), MetaSyntaxError> {
        match self.peek() {
            Some(tok) if tok.kind == kind => {
                self.advance();
                Ok(())
            }
            Some(tok) => Err(MetaSyntaxError::UnexpectedToken {
                expected,
                line: tok.line,
                col: tok.col,
            }),
            None => {
                let (line, col) = self.end_position();
                Err(MetaSyntaxError::UnexpectedToken {
                    expected,
                    line,
                    col,
                })
            }
        }
    }
}
