//! The standard verb catalog shipped with the crate.

use crate::error::{OpenVerbError, Result};

use super::model::VerbManifest;

/// Raw sources of the seven standard families, as `(file name, json)` pairs in load order.
pub const STANDARD_MANIFEST_SOURCES: [(&str, &str); 7] = [
    ("ui.theme.json", include_str!("../../manifests/ui.theme.json")),
    ("ui.nav.json", include_str!("../../manifests/ui.nav.json")),
    ("ui.search.json", include_str!("../../manifests/ui.search.json")),
    ("ui.toast.json", include_str!("../../manifests/ui.toast.json")),
    ("ui.modal.json", include_str!("../../manifests/ui.modal.json")),
    ("ui.form.json", include_str!("../../manifests/ui.form.json")),
    ("user.session.json", include_str!("../../manifests/user.session.json")),
];

/// Parse the standard catalog.
pub fn standard_manifests() -> Result<Vec<VerbManifest>> {
    STANDARD_MANIFEST_SOURCES
        .iter()
        .map(|(name, raw)| parse_manifest(name, raw))
        .collect()
}

pub(crate) fn parse_manifest(name: &str, raw: &str) -> Result<VerbManifest> {
    serde_json::from_str(raw).map_err(|error| OpenVerbError::Parse {
        name: name.to_string(),
        message: error.to_string(),
    })
}
