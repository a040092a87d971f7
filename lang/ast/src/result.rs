use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum TypeParseError {
    #[error("Empty type")]
    Empty,
    #[error("`void` cannot be the element type of an array")]
    VoidArray,
    #[error("`void` cannot be the type of a parameter")]
    VoidParam,
    #[error("`{0}` is not a valid type name")]
    InvalidName(String),
    #[error("Unbalanced type arguments in `{0}`")]
    UnbalancedGenerics(String),
}

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum ParseError {
    #[error("Malformed declaration file {source_name}: {message}")]
    #[diagnostic(code("P-001"))]
    Syntax { source_name: String, message: String },
    #[error("Invalid type `{typ}` in {decl}")]
    #[diagnostic(code("P-002"))]
    InvalidType {
        source_name: String,
        decl: String,
        typ: String,
        #[source]
        reason: TypeParseError,
    },
}
