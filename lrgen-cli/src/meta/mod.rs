mod error;
mod parser;
mod tokenizer;

pub use error::MetaSyntaxError;

/// Tokenizes and parses a meta-syntax grammar source into raw rule tuples
/// ready for [`lrgen::generate`].
pub fn read_grammar(source: &str) -> Result<Vec<(String, Vec<Vec<String>>)>, MetaSyntaxError> {
    let tokens = tokenizer::tokenize(source)?;
    parser::parse(&tokens)
}
