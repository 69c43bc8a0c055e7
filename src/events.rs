//! Named notification events for the page layer

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::RightsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Error,
    Warning,
    Success,
}

impl Event {
    pub fn as_str(self) -> &'static str {
        match self {
            Event::Error => "error",
            Event::Warning => "warning",
            Event::Success => "success",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Event {
    type Err = RightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Event::Error),
            "warning" => Ok(Event::Warning),
            "success" => Ok(Event::Success),
            _ => Err(RightsError(format!("Unknown event: {}", s))),
        }
    }
}

type Handler = Box<dyn FnMut(&str)>;

/// Single threaded pub/sub: handlers run synchronously, in registration order
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<Event, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F: FnMut(&str) + 'static>(&mut self, event: Event, f: F) {
        self.handlers.entry(event).or_default().push(Box::new(f));
    }

    /// Drop every handler for `event`
    pub fn off(&mut self, event: Event) -> usize {
        self.handlers.remove(&event).map_or(0, |h| h.len())
    }

    /// Run the handlers for `event`; returns how many ran
    pub fn trigger(&mut self, event: Event, message: &str) -> usize {
        tracing::debug!(event = %event, msg = message, "trigger");
        match self.handlers.get_mut(&event) {
            Some(hs) => {
                for h in hs.iter_mut() {
                    h(message);
                }
                hs.len()
            }
            None => 0,
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("events", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
