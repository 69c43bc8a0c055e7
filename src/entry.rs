//! A single permission grant and its update rules

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One actor's grant for one permission name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub rights: u8,
    /// Scoping identifiers; `None` means unscoped
    #[serde(default)]
    pub idents: Option<Vec<String>>,
}

/// Permission name to grant. Names with no rights are absent.
pub type RightsMapping = BTreeMap<String, Entry>;

impl Entry {
    pub fn new(rights: u8) -> Self {
        Entry { rights, idents: None }
    }
}

/// Replace the rights of `entry`.
///
/// Returns `None` when `rights` is zero: the caller removes the key instead
/// of storing an empty grant. Idents are kept otherwise.
pub fn set_rights(entry: Option<&Entry>, rights: u8) -> Option<Entry> {
    if rights == 0 {
        return None;
    }
    Some(Entry {
        rights,
        idents: entry.and_then(|e| e.idents.clone()),
    })
}

/// Split comma separated identifiers, trimming each one.
/// Blank input means unscoped.
pub fn parse_idents(raw: &str) -> Option<Vec<String>> {
    let idents: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if idents.is_empty() {
        None
    } else {
        Some(idents)
    }
}

/// Replace the idents of `entry`, creating it with no rights if missing
pub fn set_idents(entry: Option<&Entry>, raw: &str) -> Entry {
    Entry {
        rights: entry.map_or(0, |e| e.rights),
        idents: parse_idents(raw),
    }
}

/// Render idents back to the text a user would edit
pub fn format_idents(idents: Option<&[String]>) -> String {
    idents.map(|i| i.join(", ")).unwrap_or_default()
}
