use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::result::{BackendFailure, SessionError};
use crate::state::{Event, State};

const TEMP_FILE_DIR: &str = "traces";
const TEMP_FILE_PREFIX: &str = "chrome-trace-";
const TEMP_FILE_EXT: &str = ".json.gz";
const TEMP_FILE_TIMESTAMP: &str = "%Y-%m-%d-%H%M%S";

/// Name of the trace file of a recording started at `now`.
pub fn temp_file_name(now: DateTime<Utc>) -> String {
    format!("{TEMP_FILE_PREFIX}{}{TEMP_FILE_EXT}", now.format(TEMP_FILE_TIMESTAMP))
}

/// What to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub categories: String,
    pub options: String,
    pub compress: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            categories: "*".to_owned(),
            options: "record-until-full".to_owned(),
            compress: true,
        }
    }
}

/// The service that actually records traces.
pub trait TraceBackend {
    fn known_categories(&mut self) -> Result<Vec<String>, BackendFailure>;
    /// Start writing a trace to `path`.
    fn start_tracing(&mut self, path: &Path, config: &TraceConfig) -> Result<(), BackendFailure>;
    /// Stop the running trace and flush it to its file.
    fn stop_tracing(&mut self);
    /// Release the resources held for a recording. Called whenever the controller becomes idle.
    fn release(&mut self) {}
}

pub trait Observer {
    fn on_tracing_state_changed(&mut self, state: State);
}

impl<F: FnMut(State)> Observer for F {
    fn on_tracing_state_changed(&mut self, state: State) {
        self(state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(usize);

/// Records one trace at a time into a temporary file under `<cache dir>/traces`.
pub struct TracingController<B: TraceBackend> {
    backend: B,
    cache_dir: PathBuf,
    config: TraceConfig,
    state: State,
    known_categories: Option<BTreeSet<String>>,
    temp_file: Option<PathBuf>,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_observer: usize,
}

impl<B: TraceBackend> TracingController<B> {
    pub fn new(backend: B, cache_dir: impl Into<PathBuf>) -> Self {
        TracingController {
            backend,
            cache_dir: cache_dir.into(),
            config: TraceConfig::default(),
            state: State::Initializing,
            known_categories: None,
            temp_file: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn with_config(mut self, config: TraceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The file the current trace is written to.
    pub fn tracing_temp_file(&self) -> Option<&Path> {
        self.temp_file.as_deref()
    }

    pub fn add_observer(&mut self, observer: impl Observer + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if no such observer was registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != before
    }

    /// Query the known categories from the backend and become idle.
    pub fn initialize(&mut self) -> Result<(), SessionError> {
        self.state.transition(Event::Initialized)?;
        let categories = self.backend.known_categories()?;
        self.known_categories = Some(categories.into_iter().collect());
        self.handle(Event::Initialized)
    }

    pub fn known_categories(&self) -> Result<&BTreeSet<String>, SessionError> {
        self.known_categories.as_ref().ok_or(SessionError::NotInitialized)
    }

    /// Create a trace file and start recording into it.
    ///
    /// On failure the controller returns to idle.
    pub fn start_recording(&mut self) -> Result<(), SessionError> {
        self.handle(Event::StartRequested)?;

        let path = match self.create_temp_file(Utc::now()) {
            Ok(path) => path,
            Err(err) => {
                log::error!("{err}");
                self.handle(Event::StartFailed)?;
                return Err(err);
            }
        };
        self.temp_file = Some(path.clone());

        if let Err(err) = self.backend.start_tracing(&path, &self.config) {
            log::error!("Native error while trying to start tracing: {err}");
            self.handle(Event::StartFailed)?;
            return Err(err.into());
        }

        self.handle(Event::TraceStarted)
    }

    pub fn stop_recording(&mut self) -> Result<(), SessionError> {
        self.handle(Event::StopRequested)?;
        self.backend.stop_tracing();
        self.handle(Event::TraceStopped)
    }

    /// Throw away the recorded trace, deleting its file.
    pub fn discard_trace(&mut self) -> Result<(), SessionError> {
        self.handle(Event::Discarded)
    }

    fn create_temp_file(&self, now: DateTime<Utc>) -> Result<PathBuf, SessionError> {
        let dir = self.cache_dir.join(TEMP_FILE_DIR);
        let path = dir.join(temp_file_name(now));
        fs::create_dir_all(&dir)
            .and_then(|_| fs::File::create(&path))
            .map_err(|source| SessionError::TempFile { path: path.clone(), source })?;
        Ok(path)
    }

    fn handle(&mut self, event: Event) -> Result<(), SessionError> {
        let next = self.state.transition(event)?;
        log::debug!("Tracing state changing from {} to {next}", self.state);
        self.state = next;

        if next == State::Idle {
            if let Some(path) = self.temp_file.take() {
                if let Err(err) = fs::remove_file(&path) {
                    log::warn!("Couldn't delete trace file {}: {err}", path.display());
                }
            }
            self.backend.release();
        }

        for (_, observer) in &mut self.observers {
            observer.on_tracing_state_changed(next);
        }
        Ok(())
    }
}
