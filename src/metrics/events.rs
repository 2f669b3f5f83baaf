use crate::constants::NO_VALID_DESIGNS_WARNING;
use crate::errors::ScaleError;
use log::warn;
use std::fmt;
use std::sync::Mutex;

/// Recoverable conditions reported while aggregating batch descriptors.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricEvent {
    /// The batch had no rows, the valid proportion defaults to zero.
    NoValidDesigns,
    /// A feature could not be compared, its distance is infinite.
    DegenerateFeature { column: String, reason: ScaleError },
}

impl fmt::Display for MetricEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricEvent::NoValidDesigns => f.write_str(NO_VALID_DESIGNS_WARNING),
            MetricEvent::DegenerateFeature { column, reason } => {
                write!(f, "Feature {} is degenerate: {}", column, reason)
            }
        }
    }
}

/// Receiver of metric events, supplied by the caller.
pub trait MetricEventSink {
    fn emit(&self, event: MetricEvent);
}

/// Sink that writes every event to the `log` facade as a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl MetricEventSink for LogEventSink {
    fn emit(&self, event: MetricEvent) {
        warn!("{}", event);
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: Mutex<Vec<MetricEvent>>,
}

impl CollectingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in emission order.
    pub fn events(&self) -> Vec<MetricEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl MetricEventSink for CollectingEventSink {
    fn emit(&self, event: MetricEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
