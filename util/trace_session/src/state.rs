use std::fmt;

use crate::result::TransitionError;

/// State of a tracing controller. There is at most one recording at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Initializing,
    Idle,
    Starting,
    Recording,
    Stopping,
    Stopped,
}

/// Everything that can happen to a tracing controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The known categories were received from the backend.
    Initialized,
    StartRequested,
    TraceStarted,
    /// Creating the trace file or starting the backend failed.
    StartFailed,
    StopRequested,
    TraceStopped,
    /// The recorded trace was thrown away.
    Discarded,
}

impl State {
    pub fn transition(self, event: Event) -> Result<State, TransitionError> {
        use Event::*;
        use State::*;

        match (self, event) {
            (Initializing, Initialized) => Ok(Idle),
            (Idle, StartRequested) => Ok(Starting),
            (Starting, TraceStarted) => Ok(Recording),
            (Starting, StartFailed) => Ok(Idle),
            (Recording, StopRequested) => Ok(Stopping),
            (Stopping, TraceStopped) => Ok(Stopped),
            (Stopped, Discarded) => Ok(Idle),
            (state, event) => Err(TransitionError { state, event }),
        }
    }

    /// Whether a trace file may exist in this state.
    pub fn has_trace_file(self) -> bool {
        matches!(self, State::Starting | State::Recording | State::Stopping | State::Stopped)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Initializing => "initializing",
            State::Idle => "idle",
            State::Starting => "starting",
            State::Recording => "recording",
            State::Stopping => "stopping",
            State::Stopped => "stopped",
        };
        write!(f, "{name}")
    }
}
