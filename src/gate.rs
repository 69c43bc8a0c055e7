//! Rights of the signed-in actor
//!
//! Pages ask this before showing menu entries or actions, e.g.
//! `rights.has("csr_agents", "read")`.

use crate::constants::bit_from_name;
use crate::entry::RightsMapping;

#[derive(Debug, Clone, Default)]
pub struct Rights {
    mapping: RightsMapping,
}

impl Rights {
    pub fn new(mapping: RightsMapping) -> Self {
        Rights { mapping }
    }

    pub fn mapping(&self) -> &RightsMapping {
        &self.mapping
    }

    /// Whether `name` grants the bit called `bit` (`create`, `read`,
    /// `update`, `delete`). Unknown bit names never match.
    pub fn has(&self, name: &str, bit: &str) -> bool {
        bit_from_name(bit).is_some_and(|b| self.has_bits(name, b))
    }

    /// Whether every bit of `mask` is granted on `name`
    pub fn has_bits(&self, name: &str, mask: u8) -> bool {
        mask != 0 && self.mapping.get(name).is_some_and(|e| e.rights & mask == mask)
    }

    /// Like [`Rights::has`], narrowed to one identifier. Unscoped grants
    /// (`idents: null`) cover every identifier; an empty list covers none.
    pub fn has_for(&self, name: &str, bit: &str, ident: &str) -> bool {
        self.has(name, bit)
            && self.mapping.get(name).is_some_and(|e| match &e.idents {
                Some(ids) => ids.iter().any(|i| i == ident),
                None => true,
            })
    }

    /// Scoping identifiers of `name`, if any
    pub fn idents(&self, name: &str) -> Option<&[String]> {
        self.mapping.get(name)?.idents.as_deref()
    }
}
