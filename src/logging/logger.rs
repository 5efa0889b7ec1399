use std::error::Error;
use std::fmt::{self, Write};

use crate::config::LogSettings;
use crate::debug::DebugState;
use crate::logging::level::Level;
use crate::logging::sink::{LogSink, TracingSink};

/// Log wrapper that only emits lines enabled for their tag.
///
/// Debug lines also go through whenever the build is debuggable. Every call
/// returns the bytes written, 0 when the line was suppressed.
pub struct TagLogger<S = TracingSink> {
    state: DebugState,
    settings: LogSettings,
    sink: S,
}

impl TagLogger<TracingSink> {
    pub fn new(state: DebugState, settings: LogSettings) -> Self {
        Self::with_sink(state, settings, TracingSink)
    }
}

impl<S: LogSink> TagLogger<S> {
    pub fn with_sink(state: DebugState, settings: LogSettings, sink: S) -> Self {
        Self { state, settings, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn state(&self) -> DebugState {
        self.state
    }

    pub fn is_loggable(&self, tag: &str, level: Level) -> bool {
        level >= self.settings.threshold(tag)
    }

    fn debug_enabled(&self, tag: &str) -> bool {
        self.state.is_debuggable() || self.is_loggable(tag, Level::Debug)
    }

    pub fn d(&self, tag: &str, args: fmt::Arguments<'_>) -> usize {
        if self.debug_enabled(tag) {
            self.sink.write(Level::Debug, tag, &args.to_string())
        } else {
            0
        }
    }

    pub fn d_err(&self, tag: &str, message: &str, error: &dyn Error) -> usize {
        if self.debug_enabled(tag) {
            self.sink.write(Level::Debug, tag, &with_error(message, error))
        } else {
            0
        }
    }

    pub fn i(&self, tag: &str, args: fmt::Arguments<'_>) -> usize {
        self.log(Level::Info, tag, args)
    }

    pub fn i_err(&self, tag: &str, message: &str, error: &dyn Error) -> usize {
        self.log_err(Level::Info, tag, message, error)
    }

    pub fn e(&self, tag: &str, args: fmt::Arguments<'_>) -> usize {
        self.log(Level::Error, tag, args)
    }

    pub fn e_err(&self, tag: &str, message: &str, error: &dyn Error) -> usize {
        self.log_err(Level::Error, tag, message, error)
    }

    /// Emit at any level, gated only by the tag threshold
    pub fn log(&self, level: Level, tag: &str, args: fmt::Arguments<'_>) -> usize {
        if self.is_loggable(tag, level) {
            self.sink.write(level, tag, &args.to_string())
        } else {
            0
        }
    }

    fn log_err(&self, level: Level, tag: &str, message: &str, error: &dyn Error) -> usize {
        if self.is_loggable(tag, level) {
            self.sink.write(level, tag, &with_error(message, error))
        } else {
            0
        }
    }
}

/// `message: error: cause: ...`
fn with_error(message: &str, error: &dyn Error) -> String {
    let mut line = format!("{}: {}", message, error);
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(line, ": {}", cause);
        source = cause.source();
    }
    line
}
