//! Rights editor
//!
//! Holds one actor's [`RightsMapping`] for the length of an edit session.
//! Every bit flip goes through [`RightsEditor::toggle_bit`], which treats a
//! missing entry as `rights = 0` and removes the entry again once its
//! rights fall back to zero. The editor never talks to a transport; the
//! owner reads [`RightsEditor::current_value`] when it is time to submit.

use crate::catalog::{Catalog, Domain};
use crate::constants::{has_bit, is_allowed, toggle, BITS};
use crate::entry::{self, Entry, RightsMapping};

/// Whether bit toggles are checked against the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Enforcement {
    /// Any bit on any name may be toggled
    #[default]
    Permissive,
    /// Toggles for names outside the catalog, or bits outside a
    /// definition's `allowed` mask, are dropped
    MaskToAllowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub bit: u8,
    pub checked: bool,
}

/// One rendered permission row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: &'static str,
    pub title: &'static str,
    /// Create, Read, Update, Delete; `None` where the bit is not allowed
    pub cells: [Option<Toggle>; 4],
    pub idents: Option<Vec<String>>,
    pub show_idents: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRows {
    pub title: &'static str,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone)]
pub struct RightsEditor {
    domain: Domain,
    value: RightsMapping,
    enforcement: Enforcement,
}

impl RightsEditor {
    pub fn new(domain: Domain, initial: RightsMapping) -> Self {
        RightsEditor {
            domain,
            value: initial,
            enforcement: Enforcement::default(),
        }
    }

    pub fn with_enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcement = enforcement;
        self
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.domain.catalog()
    }

    /// Flip `bit` on `name`. A result of zero removes the entry.
    pub fn toggle_bit(&mut self, name: &str, bit: u8) {
        if self.enforcement == Enforcement::MaskToAllowed {
            match self.catalog().find(name) {
                Some(d) if is_allowed(d.allowed, bit) => {}
                _ => return,
            }
        }
        let current = self.value.get(name);
        let rights = toggle(current.map_or(0, |e| e.rights), bit);
        match entry::set_rights(current, rights) {
            Some(e) => {
                self.value.insert(name.to_string(), e);
            }
            None => {
                self.value.remove(name);
            }
        }
    }

    /// Parse `raw` into the idents of `name`.
    ///
    /// Creates a zero-rights entry when `name` has no grant yet. Ignored
    /// for domains without idents.
    pub fn set_idents(&mut self, name: &str, raw: &str) {
        if !self.domain.supports_idents() {
            return;
        }
        let e = entry::set_idents(self.value.get(name), raw);
        self.value.insert(name.to_string(), e);
    }

    pub fn rights(&self, name: &str) -> u8 {
        self.value.get(name).map_or(0, |e| e.rights)
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.value.get(name)
    }

    /// Snapshot of the mapping for submission
    pub fn current_value(&self) -> RightsMapping {
        self.value.clone()
    }

    pub fn into_value(self) -> RightsMapping {
        self.value
    }

    /// Rows for every definition of the catalog, grouped by section
    pub fn rows(&self) -> Vec<SectionRows> {
        self.catalog()
            .sections
            .iter()
            .map(|s| SectionRows {
                title: s.title,
                rows: s
                    .rights
                    .iter()
                    .map(|d| {
                        let current = self.value.get(d.name);
                        let rights = current.map_or(0, |e| e.rights);
                        Row {
                            name: d.name,
                            title: d.title,
                            cells: BITS.map(|bit| {
                                is_allowed(d.allowed, bit).then(|| Toggle {
                                    bit,
                                    checked: has_bit(rights, bit),
                                })
                            }),
                            idents: current.and_then(|e| e.idents.clone()),
                            show_idents: self.domain.supports_idents() && rights != 0,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}
