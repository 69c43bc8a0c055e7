//! rightsmap - Bitmask permission rights for agents, providers and users
//!
//! - [`constants`]: the four bits and their names
//! - [`catalog`]: per-domain permission definitions and routes
//! - [`entry`]: one permission's rights and identifier scope
//! - [`editor`]: checkbox-style editing of a mapping against a catalog
//! - [`bridge`]: wire format, request bodies and the response envelope
//! - [`transport`], [`dialog`], [`events`]: loading and saving from a client
//! - [`store`], [`service`]: LMDB persistence and the request handlers
//! - [`gate`]: checks against the signed-in actor's rights
//! - `server` (feature `server`): axum routes over [`service`]
//!
//! ```
//! use rightsmap::{Domain, RightsEditor, RightsMapping, READ, UPDATE};
//!
//! let mut editor = RightsEditor::new(Domain::Agent, RightsMapping::new());
//! editor.toggle_bit("csr_agents", READ);
//! editor.toggle_bit("csr_agents", UPDATE);
//! assert_eq!(editor.rights("csr_agents"), READ | UPDATE);
//! ```

pub mod bridge;
pub mod catalog;
pub mod constants;
pub mod dialog;
pub mod editor;
pub mod entry;
pub mod error;
pub mod events;
pub mod gate;
pub mod service;
pub mod store;
pub mod transport;

#[cfg(feature = "server")]
pub mod server;

pub use bridge::{Envelope, RemoteError};
pub use catalog::{Catalog, Definition, Domain, Section};
pub use constants::*;
pub use dialog::PermissionsDialog;
pub use editor::{Enforcement, RightsEditor, Row, SectionRows, Toggle};
pub use entry::{Entry, RightsMapping};
pub use error::{RightsError, Result};
pub use events::{Event, EventBus};
pub use gate::Rights;
pub use store::Store;
pub use transport::{LocalTransport, Transport};
