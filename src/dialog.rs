//! The permissions dialog a page opens for one actor
//!
//! Loads the actor's mapping, hands it to a [`RightsEditor`], and submits
//! the edited value on request. Envelope errors and warnings, transport
//! failures and the final confirmation are reported on the [`EventBus`].
//! Nothing is retried.

use serde_json::Value;

use crate::bridge::{self, error_message, is_truthy, Envelope};
use crate::catalog::Domain;
use crate::editor::RightsEditor;
use crate::events::{Event, EventBus};
use crate::transport::Transport;

pub const UPDATED: &str = "Permissions updated";

pub struct PermissionsDialog<T> {
    transport: T,
    domain: Domain,
    open: Option<(String, RightsEditor)>,
}

// Surface the error and warning of an envelope, returning its data
fn report(bus: &mut EventBus, env: Envelope<Value>) -> Option<Value> {
    if let Some(e) = &env.error {
        bus.trigger(Event::Error, &error_message(e));
    }
    if let Some(w) = &env.warning {
        bus.trigger(Event::Warning, &w.to_string());
    }
    env.data
}

impl<T: Transport> PermissionsDialog<T> {
    pub fn new(transport: T, domain: Domain) -> Self {
        PermissionsDialog { transport, domain, open: None }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn actor(&self) -> Option<&str> {
        self.open.as_ref().map(|(a, _)| a.as_str())
    }

    pub fn editor(&self) -> Option<&RightsEditor> {
        self.open.as_ref().map(|(_, e)| e)
    }

    pub fn editor_mut(&mut self) -> Option<&mut RightsEditor> {
        self.open.as_mut().map(|(_, e)| e)
    }

    /// Fetch `actor`'s mapping and open the editor on it.
    /// Returns whether the dialog is now open.
    pub fn open(&mut self, actor: &str, bus: &mut EventBus) -> bool {
        let d = self.domain;
        let env = match self.transport.read(d.service(), d.noun(), bridge::read_request(d, actor)) {
            Ok(env) => env,
            Err(e) => {
                bus.trigger(Event::Error, &e.0);
                return false;
            }
        };
        let Some(data) = report(bus, env) else {
            return false;
        };
        match bridge::load(data) {
            Ok(mapping) => {
                tracing::debug!(domain = %d, actor, entries = mapping.len(), "dialog opened");
                self.open = Some((actor.to_string(), RightsEditor::new(d, mapping)));
                true
            }
            Err(e) => {
                bus.trigger(Event::Error, &e.0);
                false
            }
        }
    }

    /// Send the edited mapping. On success the dialog closes.
    pub fn submit(&mut self, bus: &mut EventBus) -> bool {
        let Some((actor, editor)) = &self.open else {
            return false;
        };
        let d = self.domain;
        let env = match bridge::update_request(d, actor, &editor.current_value())
            .and_then(|body| self.transport.update(d.service(), d.noun(), body))
        {
            Ok(env) => env,
            Err(e) => {
                bus.trigger(Event::Error, &e.0);
                return false;
            }
        };
        match report(bus, env) {
            Some(data) if is_truthy(&data) => {
                tracing::debug!(domain = %d, actor = %actor, "dialog submitted");
                bus.trigger(Event::Success, UPDATED);
                self.open = None;
                true
            }
            _ => false,
        }
    }

    /// Close without submitting; edits are discarded
    pub fn cancel(&mut self) {
        self.open = None;
    }
}
