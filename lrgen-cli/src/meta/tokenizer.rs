use crate::meta::error::MetaSyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTokenKind {
    Identifier(String),
    Colon,
    Semicolon,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaToken {
    pub kind: MetaTokenKind,
    pub line: usize,
    pub col: usize,
}

/// Tokenizes the meta-syntax: identifiers (`[A-Za-z_][A-Za-z0-9_]*`) and the
/// punctuation `:`, `|`, `;`. Whitespace outside identifiers is
/// insignificant.
pub fn tokenize(input: &str) -> Result<Vec<MetaToken>, MetaSyntaxError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;
    let mut line = 1;
    let mut col = 1;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\r' => {
                i += 1;
                col += 1;
            }
            '\n' => {
                i += 1;
                line += 1;
                col = 1;
            }
            ':' => {
                tokens.push(MetaToken {
                    kind: MetaTokenKind::Colon,
                    line,
                    col,
                });
                i += 1;
                col += 1;
            }
            ';' => {
                tokens.push(MetaToken {
                    kind: MetaTokenKind::Semicolon,
                    line,
                    col,
                });
                i += 1;
                col += 1;
            }
            '|' => {
                tokens.push(MetaToken {
                    kind: MetaTokenKind::Bar,
                    line,
                    col,
                });
                i += 1;
                col += 1;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start_col = col;
                let mut ident = String::new();
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    ident.push(chars[i]);
                    i += 1;
                    col += 1;
                }
                tokens.push(MetaToken {
                    kind: MetaTokenKind::Identifier(ident),
                    line,
                    col: start_col,
                });
            }
            other => {
                return Err(MetaSyntaxError::UnexpectedChar {
                    ch: other,
                    line,
                    col,
                })
            }
        }
    }

    Ok(tokens)
}
