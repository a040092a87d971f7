use std::path::PathBuf;
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;

use jnigen_lang_ast::ParseError;
use jnigen_lang_backend::{BackendError, ConfigError, GenerateError};

/// Everything that is reported to the user at the end of a session.
#[derive(Error, Diagnostic, Debug, Clone)]
#[error(transparent)]
#[diagnostic(transparent)]
pub enum Error {
    Parser(#[from] ParseError),
    Generate(#[from] GenerateError),
    Driver(#[from] DriverError),
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DriverError {
    #[error("IO error on {path}: {source}")]
    #[diagnostic(code("D-001"))]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
    #[error("File not found: {0}")]
    #[diagnostic(code("D-002"))]
    FileNotFound(PathBuf),
    #[error("Invalid configuration file {path}: {message}")]
    #[diagnostic(code("D-003"))]
    ConfigSyntax { path: PathBuf, message: String },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Backend(#[from] BackendError),
}

impl DriverError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        DriverError::Io { path: path.into(), source: Arc::new(err) }
    }
}
