//! Duration grammar: tokenizing and normalizing `P[nY][nM][nD][T[nH][nM][nS]]`.

pub mod parser;
pub mod tokenizer;

pub use parser::{parse, DurationValue};
pub use tokenizer::{tokenize, Component, Designator, Tokens};
