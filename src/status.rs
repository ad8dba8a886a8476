//! Table-driven status normalization.
//!
//! Each gateway speaks its own status vocabulary. The mapping lives in a
//! versioned JSON document (one table per gateway) rather than in code, so a
//! new raw status is a data change, not a release. Every raw status absent
//! from its gateway's table maps to [`CanonicalStatus::Unknown`], which the
//! pipeline rejects uniformly for all gateways.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{CanonicalStatus, Gateway};

const BUILTIN_MAP: &str = include_str!("status_map.json");

#[derive(Debug, Deserialize)]
struct StatusMapDocument {
    version: u32,
    gateways: HashMap<Gateway, HashMap<String, CanonicalStatus>>,
}

/// Immutable lookup table from (gateway, raw status) to canonical status.
#[derive(Debug, Clone)]
pub struct StatusMap {
    version: u32,
    tables: HashMap<Gateway, HashMap<String, CanonicalStatus>>,
}

impl StatusMap {
    /// The table compiled into the binary.
    pub fn builtin() -> Self {
        // The embedded document is validated by tests; a parse failure here
        // is a build defect, not a runtime condition.
        Self::from_json(BUILTIN_MAP).expect("embedded status map is valid")
    }

    /// Load a table from a JSON file, e.g. an operations override.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::Internal(format!("failed to read status map: {}", e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let doc: StatusMapDocument = serde_json::from_str(raw)?;
        let map = Self {
            version: doc.version,
            tables: doc.gateways,
        };
        for gateway in Gateway::ALL {
            if !map.tables.contains_key(&gateway) {
                // Not fatal: every status for that gateway normalizes to
                // Unknown and gets rejected, which is loud enough.
                tracing::warn!("status map v{} has no table for {}", map.version, gateway);
            }
        }
        Ok(map)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Map a gateway-specific raw status into the canonical vocabulary.
    pub fn normalize(&self, gateway: Gateway, raw_status: &str) -> CanonicalStatus {
        self.tables
            .get(&gateway)
            .and_then(|table| table.get(raw_status))
            .copied()
            .unwrap_or(CanonicalStatus::Unknown)
    }
}

impl Default for StatusMap {
    fn default() -> Self {
        Self::builtin()
    }
}
