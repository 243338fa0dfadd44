//! Read-only view of the cached version summary.
//!
//! The summary is a JSON array of version objects, newest first. Only `id`
//! and `data_version` are read; everything else is ignored. A version
//! without `data_version` maps to 0.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::app::{DepfetchError, Result};

#[derive(Debug, Deserialize)]
struct VersionEntry {
    id: String,
    #[serde(default)]
    data_version: i64,
}

/// Version id to data version, e.g. `"1.20.1" -> 3465`.
#[derive(Debug, Clone, Default)]
pub struct VersionManifest {
    versions: HashMap<String, i64>,
    latest: Option<String>,
}

impl VersionManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| DepfetchError::storage(path, e))?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let entries: Vec<VersionEntry> = serde_json::from_slice(bytes)?;

        let latest = entries.first().map(|entry| entry.id.clone());
        let versions = entries
            .into_iter()
            .map(|entry| (entry.id, entry.data_version))
            .collect();

        Ok(Self { versions, latest })
    }

    /// First entry of the summary with its data version.
    pub fn latest(&self) -> Option<(&str, i64)> {
        let id = self.latest.as_deref()?;
        self.versions.get(id).map(|v| (id, *v))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
