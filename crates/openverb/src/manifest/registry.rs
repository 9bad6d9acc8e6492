//! In-memory index over loaded manifests.

use std::collections::HashMap;

use crate::error::{OpenVerbError, Result};

use super::catalog::{parse_manifest, standard_manifests};
use super::model::{VerbDefinition, VerbManifest};

/// Read-only index of manifests keyed by family.
///
/// Manifests keep their load order; family names are unique.
#[derive(Debug, Clone, Default)]
pub struct ManifestRegistry {
    manifests: Vec<VerbManifest>,
    by_family: HashMap<String, usize>,
}

impl ManifestRegistry {
    /// Index `manifests`. Fails on a repeated family name.
    pub fn new(manifests: Vec<VerbManifest>) -> Result<Self> {
        let mut by_family = HashMap::with_capacity(manifests.len());
        for (index, manifest) in manifests.iter().enumerate() {
            if by_family.insert(manifest.family.clone(), index).is_some() {
                return Err(OpenVerbError::DuplicateFamily(manifest.family.clone()));
            }
        }
        tracing::debug!(families = manifests.len(), "manifest registry loaded");
        Ok(Self {
            manifests,
            by_family,
        })
    }

    /// Registry over the seven standard families.
    pub fn standard() -> Result<Self> {
        Self::new(standard_manifests()?)
    }

    /// Parse raw `(name, json)` sources and index them.
    ///
    /// This only checks that each source deserializes; run the validator
    /// beforehand to enforce the full manifest rules.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let manifests = sources
            .into_iter()
            .map(|(name, raw)| parse_manifest(name, raw))
            .collect::<Result<Vec<_>>>()?;
        Self::new(manifests)
    }

    pub fn get_manifest(&self, family: &str) -> Option<&VerbManifest> {
        self.by_family
            .get(family)
            .map(|&index| &self.manifests[index])
    }

    /// Manifests in load order.
    pub fn manifests(&self) -> &[VerbManifest] {
        &self.manifests
    }

    /// Every verb, manifests in load order and verbs in declaration order.
    pub fn all_verbs(&self) -> impl Iterator<Item = &VerbDefinition> {
        self.manifests.iter().flat_map(|manifest| manifest.verbs.iter())
    }

    /// First verb with the given id.
    pub fn find_verb(&self, verb_id: &str) -> Option<&VerbDefinition> {
        self.all_verbs().find(|verb| verb.id.as_str() == verb_id)
    }

    pub fn family_count(&self) -> usize {
        self.manifests.len()
    }

    pub fn verb_count(&self) -> usize {
        self.manifests.iter().map(|manifest| manifest.verbs.len()).sum()
    }
}
