//! Drives a [`TouchGestureEngine`] from a trace and writes each notification
//! as one JSON line.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::io::{BufRead, Write};

use serde::Serialize;
use touch_gesture::{
    ContactId, GestureConfig, Notification, NotificationLog, Point, TouchError, TouchGestureEngine, TouchSurface,
};
use tracing::{debug, info};

use crate::trace::{ContactEvent, DEFAULT_SURFACE, TraceEvent, parse_line};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to open {path}: {source}")]
    Open { path: String, source: std::io::Error },
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid trace event: {source}")]
    Parse { line: usize, source: serde_json::Error },
    #[error("line {line}: {source}")]
    Contract { line: usize, source: TouchError },
    #[error("invalid configuration: {0}")]
    Config(#[from] TouchError),
    #[error("failed to encode notification: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A named surface. Capture is only logged; there is no real device here.
#[derive(Debug)]
pub struct ReplaySurface {
    name: String,
}

impl ReplaySurface {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TouchSurface for ReplaySurface {
    fn capture_touch(&self, id: ContactId) {
        debug!(surface = %self.name, %id, "capture");
    }

    fn release_touch(&self, id: ContactId) {
        debug!(surface = %self.name, %id, "release");
    }
}

/// Counters reported at the end of a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub events: usize,
    pub notifications: usize,
    pub skipped: usize,
}

#[derive(Serialize)]
struct OutputLine<'a> {
    line: usize,
    surface: &'a str,
    #[serde(flatten)]
    notification: &'a Notification,
}

pub struct Replayer {
    engine: TouchGestureEngine<ReplaySurface>,
    log: NotificationLog,
    pretty: bool,
}

impl Replayer {
    /// An enabled engine with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Config`] if `config` does not validate.
    pub fn new(config: GestureConfig, pretty: bool) -> Result<Self, ReplayError> {
        let log = NotificationLog::new();
        let mut engine = TouchGestureEngine::with_config(config)?;
        engine.subscribe(log.clone());
        engine.set_enabled(&ReplaySurface::new(DEFAULT_SURFACE), true);
        Ok(Self { engine, log, pretty })
    }

    /// Replay every line of `reader`, writing notifications to `out`.
    ///
    /// # Errors
    ///
    /// Stops at the first unreadable, unparsable, or contract-violating line.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut out: W) -> Result<Summary, ReplayError> {
        let mut summary = Summary::default();
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            let Some(event) = parse_line(&line).map_err(|source| ReplayError::Parse { line: line_no, source })? else {
                summary.skipped += 1;
                continue;
            };
            summary.events += 1;

            let surface = self.apply(line_no, event)?;
            for notification in self.log.drain() {
                self.write(&mut out, line_no, &surface, &notification)?;
                summary.notifications += 1;
            }
        }
        out.flush()?;
        info!(events = summary.events, notifications = summary.notifications, "replay finished");
        Ok(summary)
    }

    fn apply(&mut self, line: usize, event: TraceEvent) -> Result<String, ReplayError> {
        match event {
            TraceEvent::Begin(e) => self.contact(line, e, TouchGestureEngine::on_contact_begin),
            TraceEvent::Move(e) => self.contact(line, e, TouchGestureEngine::on_contact_move),
            TraceEvent::End(e) => self.contact(line, e, TouchGestureEngine::on_contact_end),
            TraceEvent::Reset => {
                self.engine.reset();
                Ok(DEFAULT_SURFACE.to_owned())
            }
            TraceEvent::Enable { surface } => {
                let surface = ReplaySurface::new(surface);
                self.engine.set_enabled(&surface, true);
                Ok(surface.name)
            }
            TraceEvent::Disable { surface } => {
                let surface = ReplaySurface::new(surface);
                self.engine.set_enabled(&surface, false);
                Ok(surface.name)
            }
        }
    }

    fn contact<F>(&mut self, line: usize, event: ContactEvent, handler: F) -> Result<String, ReplayError>
    where
        F: FnOnce(&mut TouchGestureEngine<ReplaySurface>, &ReplaySurface, ContactId, Point) -> Result<(), TouchError>,
    {
        let position = event.position();
        let surface = ReplaySurface::new(event.surface);
        handler(&mut self.engine, &surface, event.id, position).map_err(|source| ReplayError::Contract { line, source })?;
        Ok(surface.name)
    }

    fn write<W: Write>(&self, out: &mut W, line: usize, surface: &str, notification: &Notification) -> Result<(), ReplayError> {
        let record = OutputLine { line, surface, notification };
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &record)?;
        } else {
            serde_json::to_writer(&mut *out, &record)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
