use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::state::{Event, State};

#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cannot handle {event:?} while {state:?}")]
#[diagnostic(code("S-001"))]
pub struct TransitionError {
    pub state: State,
    pub event: Event,
}

/// A failure reported by the tracing backend.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct BackendFailure(pub String);

#[derive(Error, Diagnostic, Debug)]
pub enum SessionError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Transition(#[from] TransitionError),
    #[error("The tracing controller has not been initialized yet")]
    #[diagnostic(code("S-002"))]
    NotInitialized,
    #[error("Couldn't create trace file {path}")]
    #[diagnostic(code("S-003"))]
    TempFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Tracing backend error: {0}")]
    #[diagnostic(code("S-004"))]
    Backend(#[from] BackendFailure),
}
