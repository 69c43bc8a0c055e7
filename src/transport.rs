//! Client side of the REST layer

use std::sync::Arc;

use serde_json::Value;

use crate::bridge::Envelope;
use crate::catalog::Domain;
use crate::error::{RightsError, Result};
use crate::service;
use crate::store::Store;

/// `read`/`update` against a service and noun.
///
/// `Err` means the request never produced an envelope; server side
/// failures arrive as the envelope's `error`.
pub trait Transport {
    fn read(&self, service: &str, noun: &str, body: Value) -> Result<Envelope<Value>>;
    fn update(&self, service: &str, noun: &str, body: Value) -> Result<Envelope<Value>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn read(&self, service: &str, noun: &str, body: Value) -> Result<Envelope<Value>> {
        (**self).read(service, noun, body)
    }

    fn update(&self, service: &str, noun: &str, body: Value) -> Result<Envelope<Value>> {
        (**self).update(service, noun, body)
    }
}

/// In-process transport answering from a [`Store`]
#[derive(Clone)]
pub struct LocalTransport {
    store: Arc<Store>,
}

impl LocalTransport {
    pub fn new(store: Arc<Store>) -> Self {
        LocalTransport { store }
    }

    fn route(service: &str, noun: &str) -> Result<Domain> {
        Domain::route(service, noun)
            .ok_or_else(|| RightsError(format!("No route for {}/{}", service, noun)))
    }
}

impl Transport for LocalTransport {
    fn read(&self, service: &str, noun: &str, body: Value) -> Result<Envelope<Value>> {
        Ok(service::read(&self.store, Self::route(service, noun)?, &body))
    }

    fn update(&self, service: &str, noun: &str, body: Value) -> Result<Envelope<Value>> {
        Ok(service::update(&self.store, Self::route(service, noun)?, &body))
    }
}
