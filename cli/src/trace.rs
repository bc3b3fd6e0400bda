//! JSON-lines touch traces.
//!
//! One event per line:
//!
//! ```text
//! {"phase":"begin","id":1,"x":10.0,"y":20.0,"surface":"board"}
//! {"phase":"move","id":1,"x":14.0,"y":20.0}
//! {"phase":"end","id":1,"x":14.0,"y":20.0}
//! {"phase":"reset"}
//! {"phase":"disable","surface":"board"}
//! ```
//!
//! `surface` defaults to `"main"`. Blank lines and `#` comments are skipped.

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;

use serde::Deserialize;
use touch_gesture::{ContactId, Point};

pub const DEFAULT_SURFACE: &str = "main";

fn default_surface() -> String {
    DEFAULT_SURFACE.to_owned()
}

/// A contact event addressed to a named surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactEvent {
    #[serde(default = "default_surface")]
    pub surface: String,
    pub id: ContactId,
    pub x: f64,
    pub y: f64,
}

impl ContactEvent {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One line of a trace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TraceEvent {
    Begin(ContactEvent),
    Move(ContactEvent),
    End(ContactEvent),
    Reset,
    Enable {
        #[serde(default = "default_surface")]
        surface: String,
    },
    Disable {
        #[serde(default = "default_surface")]
        surface: String,
    },
}

/// Parse one trace line. `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns the `serde_json` error for anything that is not a known event.
pub fn parse_line(line: &str) -> Result<Option<TraceEvent>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}
