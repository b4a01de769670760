//! Comment dialects supported by the merge engine.
//!
//! The dialect determines the single comment character used both for
//! synthesizing marker lines and for recognizing comment lines during
//! deduplication.

use clap::ValueEnum;

/// Comment-syntax variant of the target configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dialect {
    /// Hash-style comments (`#`), e.g. `.zshrc`.
    Zsh,
    /// Quote-style comments (`"`), e.g. `.vimrc`.
    Vim,
}

impl Dialect {
    /// The comment character used by this dialect.
    pub fn comment_char(self) -> char {
        match self {
            Dialect::Zsh => '#',
            Dialect::Vim => '"',
        }
    }
}
