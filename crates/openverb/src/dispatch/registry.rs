//! Verb id → handler mapping.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::manifest::ManifestRegistry;
use crate::verb::{VerbId, VerbInput};

use super::handler::{handler_fn, HandlerResult, VerbHandler};

/// Handlers keyed by verb id.
///
/// Ids that were never registered are absent: [`VerbHandlers::lookup`] returns
/// `None` for them. The registry is immutable once built; share it behind an `Arc`.
#[derive(Clone, Default)]
pub struct VerbHandlers {
    handlers: HashMap<VerbId, Arc<dyn VerbHandler>>,
}

impl VerbHandlers {
    pub fn builder() -> VerbHandlersBuilder {
        VerbHandlersBuilder::default()
    }

    pub fn lookup(&self, verb_id: &str) -> Option<&Arc<dyn VerbHandler>> {
        self.handlers.get(verb_id)
    }

    pub fn contains(&self, verb_id: &str) -> bool {
        self.handlers.contains_key(verb_id)
    }

    /// Sorted list of registered verb ids.
    pub fn verb_ids(&self) -> Vec<&VerbId> {
        let mut ids: Vec<&VerbId> = self.handlers.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Declared verbs with no registered handler, in manifest order.
    pub fn unimplemented<'m>(&self, manifests: &'m ManifestRegistry) -> Vec<&'m VerbId> {
        manifests
            .all_verbs()
            .map(|verb| &verb.id)
            .filter(|id| !self.handlers.contains_key(id.as_str()))
            .collect()
    }

    /// Registered handlers whose verb is not declared by any manifest, sorted.
    pub fn undeclared(&self, manifests: &ManifestRegistry) -> Vec<&VerbId> {
        self.verb_ids()
            .into_iter()
            .filter(|id| manifests.find_verb(id.as_str()).is_none())
            .collect()
    }
}

impl fmt::Debug for VerbHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerbHandlers")
            .field("verbs", &self.verb_ids())
            .finish()
    }
}

/// Incremental construction of a [`VerbHandlers`] set.
#[derive(Default)]
pub struct VerbHandlersBuilder {
    handlers: HashMap<VerbId, Arc<dyn VerbHandler>>,
}

impl VerbHandlersBuilder {
    /// Register `handler` for `verb_id`. A later registration replaces an earlier one.
    pub fn register(mut self, verb_id: impl Into<VerbId>, handler: Arc<dyn VerbHandler>) -> Self {
        let verb_id = verb_id.into();
        if self.handlers.contains_key(&verb_id) {
            tracing::warn!(verb = %verb_id, "replacing previously registered handler");
        }
        self.handlers.insert(verb_id, handler);
        self
    }

    /// Register an async closure for `verb_id`.
    pub fn handle<F, Fut>(self, verb_id: impl Into<VerbId>, f: F) -> Self
    where
        F: Fn(VerbInput) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register(verb_id, handler_fn(f))
    }

    /// Register every handler of `other`, replacing handlers for the same ids.
    pub fn merge(mut self, other: VerbHandlers) -> Self {
        for (verb_id, handler) in other.handlers {
            self = self.register(verb_id, handler);
        }
        self
    }

    pub fn build(self) -> VerbHandlers {
        VerbHandlers {
            handlers: self.handlers,
        }
    }
}

/// Build a handler set from a partial mapping. Ids left out stay absent.
pub fn create_verb_handlers<I, K>(partial: I) -> VerbHandlers
where
    I: IntoIterator<Item = (K, Arc<dyn VerbHandler>)>,
    K: Into<VerbId>,
{
    partial
        .into_iter()
        .fold(VerbHandlers::builder(), |builder, (verb_id, handler)| {
            builder.register(verb_id, handler)
        })
        .build()
}
