//! Manifest data types.
//!
//! These are the typed form of a manifest that already passed validation.
//! Untrusted sources go through [`super::validator`] first.

use serde::{Deserialize, Serialize};

use crate::verb::VerbId;

/// One verb declared by a family manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbDefinition {
    /// Dotted identifier, prefixed by the owning family (e.g. `ui.theme.get`).
    pub id: VerbId,
    pub version: String,
    /// Human-readable description shown to agents.
    pub summary: String,
    /// JSON Schema for the input payload (`type: "object"`).
    pub input: serde_json::Value,
    /// JSON Schema for the result payload (`type: "object"`).
    pub output: serde_json::Value,
}

/// A verb family and the verbs it declares, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbManifest {
    pub family: String,
    pub version: String,
    pub verbs: Vec<VerbDefinition>,
}

impl VerbManifest {
    pub fn verb(&self, verb_id: &str) -> Option<&VerbDefinition> {
        self.verbs.iter().find(|verb| verb.id.as_str() == verb_id)
    }

    pub fn verb_ids(&self) -> impl Iterator<Item = &VerbId> {
        self.verbs.iter().map(|verb| &verb.id)
    }
}
