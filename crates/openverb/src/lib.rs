pub mod config;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod manifest;
pub mod registries;
pub mod schema;
pub mod stdlib;
pub mod types;
pub mod verb;

pub use crate::config::{DispatchConfig, OpenVerbConfig};
pub use crate::dispatch::{
    create_verb_handlers, execute, handler_fn, sync_handler, DispatchRecord, DispatchStatus,
    Dispatcher, HandlerResult, VerbHandler, VerbHandlers,
};
pub use crate::error::{OpenVerbError, Result};
pub use crate::manifest::{ManifestRegistry, VerbDefinition, VerbManifest};
pub use crate::registries::{find_route_by_intent, routes_for_role, Route};
pub use crate::stdlib::StandardVerbs;
pub use crate::verb::{VerbId, VerbInput, VerbRequest, VerbResult};
