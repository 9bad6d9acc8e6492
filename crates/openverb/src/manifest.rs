//! Verb manifests: the declared contract for each verb family.

pub mod catalog;
pub mod model;
pub mod registry;
pub mod validator;

pub use catalog::{standard_manifests, STANDARD_MANIFEST_SOURCES};
pub use model::{VerbDefinition, VerbManifest};
pub use registry::ManifestRegistry;
pub use validator::{
    validate_dir, validate_source, validate_sources, ReportLine, SourceReport, ValidationOutcome,
    ValidationReport, Violation,
};
