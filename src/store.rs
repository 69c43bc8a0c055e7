//! LMDB persistence for rights mappings
//!
//! One JSON encoded mapping per `domain/actor` key, plus the epoch (ms) of
//! the last write for that key.

use std::path::Path;

use heed::types::{Str, U64};
use heed::{Database, Env, EnvOpenOptions};

use crate::catalog::Domain;
use crate::entry::RightsMapping;
use crate::error::{err, Result};

pub const DEFAULT_MAP_SIZE: usize = 1 << 30;

type DbStamp = Database<Str, U64<byteorder::BigEndian>>;

pub struct Store {
    env: Env,
    mappings: Database<Str, Str>,
    stamps: DbStamp,
}

#[inline]
fn key(domain: Domain, actor: &str) -> String {
    format!("{}/{}", domain, actor)
}

fn current_epoch() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Drop zero-rights entries, and idents where the domain has none
pub fn normalize(domain: Domain, mapping: &RightsMapping) -> RightsMapping {
    mapping
        .iter()
        .filter(|(_, e)| e.rights != 0)
        .map(|(n, e)| {
            let mut e = e.clone();
            if !domain.supports_idents() {
                e.idents = None;
            }
            (n.clone(), e)
        })
        .collect()
}

impl Store {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_map_size(path, DEFAULT_MAP_SIZE)
    }

    pub fn open_with_map_size(path: impl AsRef<Path>, map_size: usize) -> Result<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path).map_err(err)?;
        // SAFETY: LMDB requires no other processes access this path concurrently during open.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(2)
                .open(path)
                .map_err(err)?
        };
        let mut tx = env.write_txn().map_err(err)?;
        let mappings = env.create_database(&mut tx, Some("mappings")).map_err(err)?;
        let stamps = env.create_database(&mut tx, Some("stamps")).map_err(err)?;
        tx.commit().map_err(err)?;
        tracing::debug!(path = %path.display(), "store opened");
        Ok(Store { env, mappings, stamps })
    }

    /// Mapping for an actor; unknown actors have none
    pub fn read(&self, domain: Domain, actor: &str) -> Result<RightsMapping> {
        let tx = self.env.read_txn().map_err(err)?;
        match self.mappings.get(&tx, &key(domain, actor)).map_err(err)? {
            Some(json) => serde_json::from_str(json).map_err(err),
            None => Ok(RightsMapping::new()),
        }
    }

    /// Replace an actor's mapping; returns the write epoch
    pub fn update(&self, domain: Domain, actor: &str, mapping: &RightsMapping) -> Result<u64> {
        let k = key(domain, actor);
        let mapping = normalize(domain, mapping);
        let json = serde_json::to_string(&mapping).map_err(err)?;
        let epoch = current_epoch();
        let mut tx = self.env.write_txn().map_err(err)?;
        self.mappings.put(&mut tx, &k, &json).map_err(err)?;
        self.stamps.put(&mut tx, &k, &epoch).map_err(err)?;
        tx.commit().map_err(err)?;
        tracing::debug!(key = %k, entries = mapping.len(), "mapping updated");
        Ok(epoch)
    }

    pub fn remove(&self, domain: Domain, actor: &str) -> Result<bool> {
        let k = key(domain, actor);
        let mut tx = self.env.write_txn().map_err(err)?;
        let r = self.mappings.delete(&mut tx, &k).map_err(err)?;
        self.stamps.delete(&mut tx, &k).map_err(err)?;
        tx.commit().map_err(err)?;
        Ok(r)
    }

    /// Epoch of the last update for an actor
    pub fn updated_at(&self, domain: Domain, actor: &str) -> Result<Option<u64>> {
        let tx = self.env.read_txn().map_err(err)?;
        self.stamps.get(&tx, &key(domain, actor)).map_err(err)
    }

    /// Actors of a domain with a stored mapping, in key order
    pub fn actors(&self, domain: Domain) -> Result<Vec<String>> {
        let tx = self.env.read_txn().map_err(err)?;
        let pfx = format!("{}/", domain);
        let mut r = Vec::new();
        for item in self.mappings.prefix_iter(&tx, &pfx).map_err(err)? {
            let (k, _) = item.map_err(err)?;
            if let Some(actor) = k.strip_prefix(pfx.as_str()) {
                r.push(actor.to_string());
            }
        }
        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    #[test]
    fn test_normalize() {
        let mut m = RightsMapping::new();
        m.insert("a".into(), Entry { rights: 0, idents: Some(vec!["1".into()]) });
        m.insert("b".into(), Entry { rights: 2, idents: Some(vec!["1".into()]) });

        let agent = normalize(Domain::Agent, &m);
        assert_eq!(agent.len(), 1);
        assert_eq!(agent["b"], Entry::new(2));

        let user = normalize(Domain::User, &m);
        assert_eq!(user["b"].idents, Some(vec!["1".to_string()]));
    }
}
