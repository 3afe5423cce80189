//! Status and progress reporting towards the host (machine-control queue, UI, logs)
use std::borrow::Cow;

/// Receiver of tracer status messages and progress updates
pub trait StatusSink {
    /// Human readable status, `coalesce` allows the host to replace the previous message
    fn status(&mut self, message: &str, coalesce: bool);

    /// Progress update, `max` is only given when the total changes
    fn progress(&mut self, current: usize, max: Option<usize>);
}

/// Recorded status sink event
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum StatusEvent {
    Status { message: String, coalesce: bool },
    Progress { current: usize, max: Option<usize> },
}

/// Collects events in order, useful for command queues and tests
impl StatusSink for Vec<StatusEvent> {
    fn status(&mut self, message: &str, coalesce: bool) {
        self.push(StatusEvent::Status {
            message: message.to_string(),
            coalesce,
        });
    }

    fn progress(&mut self, current: usize, max: Option<usize>) {
        self.push(StatusEvent::Progress { current, max });
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn status(&mut self, _message: &str, _coalesce: bool) {}
    fn progress(&mut self, _current: usize, _max: Option<usize>) {}
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn status(&mut self, message: &str, _coalesce: bool) {
        tracing::info!("[status] {}", message);
    }

    fn progress(&mut self, current: usize, max: Option<usize>) {
        match max {
            Some(max) => tracing::debug!("[progress] {}/{}", current, max),
            None => tracing::debug!("[progress] {}", current),
        }
    }
}

/// Localized status template, `{id}` is replaced with `<done>/<total>`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusTemplate(Cow<'static, str>);

impl Default for StatusTemplate {
    fn default() -> Self {
        Self(Cow::Borrowed("Spooling stroke: {id}"))
    }
}

impl StatusTemplate {
    pub const PLACEHOLDER: &'static str = "{id}";

    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self(template.into())
    }

    pub fn render(&self, done: usize, total: usize) -> String {
        self.0
            .replace(Self::PLACEHOLDER, &format!("{}/{}", done, total))
    }
}
