//! Event construction and emission

use chrono::{DateTime, Utc};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write};

use super::clock::{Clock, SystemClock};
use super::render::render;
use crate::cli::OutputFormat;

/// Name carried by every emitted event
pub const EVENT_NAME: &str = "demo.highlight";

/// Fixed metadata attached to the event
pub const EVENT_META: [(&str, &str); 2] = [("lang", "rust"), ("env", "demo")];

/// An emitted event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// Capture time, always UTC
    pub timestamp: DateTime<Utc>,
    pub meta: BTreeMap<String, String>,
}

impl Event {
    /// Build the demo event, stamped with the clock's current instant
    pub fn demo(clock: &dyn Clock) -> Self {
        let meta = EVENT_META
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            name: EVENT_NAME.to_string(),
            timestamp: clock.now(),
            meta,
        }
    }
}

/// Renders events and writes them as `event=<text>` lines
pub struct EventEmitter<C: Clock> {
    clock: C,
    format: OutputFormat,
}

impl<C: Clock> EventEmitter<C> {
    pub fn new(clock: C, format: OutputFormat) -> Self {
        Self { clock, format }
    }

    /// Build the demo event and write it to `out`
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        let event = Event::demo(&self.clock);
        log::debug!("Built event {} at {}", event.name, event.timestamp);
        write_event_line(&event, self.format, out)
    }
}

/// Write `event=<rendered value>` plus a newline.
///
/// The value is rendered in full before anything is written, so a
/// serialization failure leaves `out` untouched.
pub fn write_event_line<T, W>(value: &T, format: OutputFormat, out: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let text = render(value, format).context("Failed to render event")?;
    writeln!(out, "event={}", text).context("Failed to write event")?;
    out.flush().context("Failed to flush output")?;
    log::info!("Emitted event ({} bytes, {:?})", text.len(), format);
    Ok(())
}

/// Emit the demo event to stdout using the system clock
pub fn run(format: OutputFormat) -> Result<()> {
    let emitter = EventEmitter::new(SystemClock, format);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emitter.emit(&mut handle)
}
