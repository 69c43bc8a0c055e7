//! Wire shapes for the permissions nouns
//!
//! A rights mapping travels as a JSON object keyed by permission name, each
//! value `{"rights": int, "idents": [string] | null}`. Loading and saving
//! are identity transforms over that shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::Domain;
use crate::entry::RightsMapping;
use crate::error::{err, Result};

// Remote error codes
pub const DATA_FIELDS: i64 = 1001;
pub const DB_FAILURE: i64 = 1100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteError {
    pub code: i64,
    pub msg: Value,
}

/// Response wrapper shared by every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RemoteError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope { error: None, warning: None, data: Some(data) }
    }

    pub fn error(code: i64, msg: impl Into<Value>) -> Self {
        Envelope {
            error: Some(RemoteError { code, msg: msg.into() }),
            warning: None,
            data: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<Value>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

/// Decode a mapping from the `data` of a read
pub fn load(data: Value) -> Result<RightsMapping> {
    serde_json::from_value(data).map_err(err)
}

/// Encode a mapping for the `permissions` field of an update
pub fn save(mapping: &RightsMapping) -> Result<Value> {
    serde_json::to_value(mapping).map_err(err)
}

/// Body of `read <service> <noun>`
pub fn read_request(domain: Domain, actor_id: &str) -> Value {
    let mut o = Map::new();
    o.insert(domain.id_field().into(), Value::from(actor_id));
    Value::Object(o)
}

/// Body of `update <service> <noun>`
pub fn update_request(domain: Domain, actor_id: &str, mapping: &RightsMapping) -> Result<Value> {
    let mut body = read_request(domain, actor_id);
    if let Value::Object(o) = &mut body {
        o.insert("permissions".into(), save(mapping)?);
    }
    Ok(body)
}

/// Pull the actor id out of a request body. Numbers are accepted as ids.
pub fn actor_id(domain: Domain, body: &Value) -> Option<String> {
    match body.get(domain.id_field())? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Anything but `null` and `false` counts as success
pub fn is_truthy(data: &Value) -> bool {
    !matches!(data, Value::Null | Value::Bool(false))
}

/// User facing text for a remote error
pub fn error_message(e: &RemoteError) -> String {
    let detail = match &e.msg {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    match (e.code, detail.is_empty()) {
        (DATA_FIELDS, _) => format!("{}: Invalid fields {}", e.code, detail),
        (DB_FAILURE, _) => format!("{}: Storage failure {}", e.code, detail),
        (_, true) => format!("{}", e.code),
        (_, false) => format!("{}: {}", e.code, detail),
    }
}
