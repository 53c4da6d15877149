//! Parse error taxonomy.

use thiserror::Error;

/// Everything that can go wrong while turning JSON text into a [`crate::Value`].
///
/// Every variant corresponds to a syntactic or lexical condition the parser
/// can observe directly; there is no variant for caller misuse of the
/// accessor API, since those are precondition violations and panic instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("expected a value")]
    ExpectValue,
    #[error("invalid value")]
    InvalidValue,
    #[error("root value is not singular")]
    RootNotSingular,
    #[error("number too big")]
    NumberTooBig,
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    #[error("invalid string escape sequence")]
    InvalidStringEscape,
    #[error("invalid character in string")]
    InvalidStringChar,
    #[error("invalid unicode hex digits")]
    InvalidUnicodeHex,
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    #[error("missing comma or square bracket")]
    MissCommaOrSquareBracket,
    #[error("missing key")]
    MissKey,
    #[error("missing colon")]
    MissColon,
    #[error("missing comma or curly bracket")]
    MissCommaOrCurlyBracket,
}

pub type Result<T> = std::result::Result<T, Error>;
