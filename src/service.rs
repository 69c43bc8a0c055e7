//! Request handling for the permissions nouns
//!
//! Every outcome is an [`Envelope`]; storage failures and bad requests are
//! reported through its `error`, never returned as `Err`.

use serde_json::{json, Value};

use crate::bridge::{self, Envelope, DATA_FIELDS, DB_FAILURE};
use crate::catalog::Domain;
use crate::constants::ALL;
use crate::store::Store;

/// `read <service> <noun> {id}` -> the actor's mapping
pub fn read(store: &Store, domain: Domain, body: &Value) -> Envelope<Value> {
    let Some(actor) = bridge::actor_id(domain, body) else {
        tracing::warn!(%domain, "read without actor id");
        return Envelope::error(DATA_FIELDS, json!([[domain.id_field(), "missing"]]));
    };
    match store.read(domain, &actor).and_then(|m| bridge::save(&m)) {
        Ok(data) => Envelope::ok(data),
        Err(e) => {
            tracing::warn!(%domain, %actor, error = %e, "read failed");
            Envelope::error(DB_FAILURE, e.0)
        }
    }
}

/// `update <service> <noun> {id, permissions}` -> `true`
pub fn update(store: &Store, domain: Domain, body: &Value) -> Envelope<Value> {
    let mut invalid = Vec::new();
    let actor = bridge::actor_id(domain, body);
    if actor.is_none() {
        invalid.push(json!([domain.id_field(), "missing"]));
    }
    let mapping = match body.get("permissions").cloned().map(bridge::load) {
        Some(Ok(m)) => Some(m),
        Some(Err(_)) => {
            invalid.push(json!(["permissions", "invalid"]));
            None
        }
        None => {
            invalid.push(json!(["permissions", "missing"]));
            None
        }
    };
    if let Some(m) = &mapping {
        let catalog = domain.catalog();
        for (name, e) in m {
            if catalog.find(name).is_none() {
                invalid.push(json!([name, "unknown permission"]));
            } else if e.rights & !ALL != 0 {
                invalid.push(json!([name, "invalid rights"]));
            }
        }
    }
    let (Some(actor), Some(mapping)) = (actor, mapping) else {
        tracing::warn!(%domain, ?invalid, "update rejected");
        return Envelope::error(DATA_FIELDS, invalid);
    };
    if !invalid.is_empty() {
        tracing::warn!(%domain, %actor, ?invalid, "update rejected");
        return Envelope::error(DATA_FIELDS, invalid);
    }
    match store.update(domain, &actor, &mapping) {
        Ok(_) => Envelope::ok(Value::Bool(true)),
        Err(e) => {
            tracing::warn!(%domain, %actor, error = %e, "update failed");
            Envelope::error(DB_FAILURE, e.0)
        }
    }
}
