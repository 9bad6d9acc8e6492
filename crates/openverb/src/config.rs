//! Host configuration: route and modal catalogs, role access, dispatch options.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OpenVerbError, Result};
use crate::registries::{routes_for_role, ModalRegistry, Route, RouteRegistry};
use crate::types::ModalEntry;

pub const CONFIG_FILENAME: &str = "openverb.json";
pub const CONFIG_VERSION: &str = "1.0.0";

/// Opt-in runtime schema conformance for the [`crate::Dispatcher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DispatchConfig {
    /// Check inputs against the declared input schema before invoking.
    pub validate_input: bool,
    /// Check results against the declared output schema.
    pub validate_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenVerbConfig {
    pub version: String,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub modals: Vec<ModalEntry>,
    /// Role name → ids of the routes that role may open.
    #[serde(default)]
    pub role_access: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl OpenVerbConfig {
    pub fn default_new() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            routes: Vec::new(),
            modals: Vec::new(),
            role_access: HashMap::new(),
            dispatch: DispatchConfig::default(),
        }
    }

    pub fn route_registry(&self) -> RouteRegistry {
        RouteRegistry::new(self.routes.clone())
    }

    pub fn modal_registry(&self) -> ModalRegistry {
        ModalRegistry::new(self.modals.clone())
    }

    pub fn routes_for_role(&self, role: &str) -> Vec<&Route> {
        routes_for_role(&self.routes, role, &self.role_access)
    }
}

impl Default for OpenVerbConfig {
    fn default() -> Self {
        Self::default_new()
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Read and parse a config file.
pub fn load_config(path: &Path) -> Result<OpenVerbConfig> {
    let data = std::fs::read_to_string(path).map_err(|source| OpenVerbError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: OpenVerbConfig = serde_json::from_str(&data).map_err(|error| {
        OpenVerbError::Config(format!("failed to parse {}: {error}", path.display()))
    })?;

    if config.version != CONFIG_VERSION {
        return Err(OpenVerbError::Config(format!(
            "unsupported config version {} in {}",
            config.version,
            path.display()
        )));
    }

    Ok(config)
}

/// Load `openverb.json` from `dir`, or the default config when there is none.
pub fn load_or_default(dir: &Path) -> Result<OpenVerbConfig> {
    let path = config_path(dir);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(OpenVerbConfig::default_new());
    }
    load_config(&path)
}

pub fn write_config(path: &Path, config: &OpenVerbConfig) -> Result<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| {
        OpenVerbError::Config(format!("failed to serialize {}: {error}", path.display()))
    })?;
    std::fs::write(path, data).map_err(|source| OpenVerbError::Io {
        path: path.to_path_buf(),
        source,
    })
}
