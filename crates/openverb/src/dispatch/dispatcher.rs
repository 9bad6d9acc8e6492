//! Dispatch: resolve a verb id, run its handler, normalize the outcome.
//!
//! Every path ends in a [`VerbResult`]. Unknown verbs, handler errors and
//! handler panics all become `{ "error": message }`.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::SystemTime;

use futures_util::FutureExt;
use serde_json::Value;

use crate::config::DispatchConfig;
use crate::manifest::ManifestRegistry;
use crate::schema::validate_schema;
use crate::verb::{VerbId, VerbInput, VerbRequest, VerbResult};

use super::handler::VerbHandler;
use super::invocation::{DispatchRecord, DispatchStatus};
use super::registry::VerbHandlers;

/// Execute `verb_id` against `handlers`.
///
/// `None` input is treated as an empty mapping. The returned result is the
/// handler's own value, untouched, unless the verb is unknown or the handler faulted.
#[tracing::instrument(skip(handlers, input))]
pub async fn execute(handlers: &VerbHandlers, verb_id: &str, input: Option<VerbInput>) -> VerbResult {
    let Some(handler) = handlers.lookup(verb_id) else {
        tracing::warn!("unknown verb");
        return unknown_verb(verb_id);
    };
    match invoke_guarded(handler.as_ref(), input.unwrap_or_default()).await {
        Ok(result) => result,
        Err(message) => {
            tracing::warn!(error = %message, "verb handler faulted");
            VerbResult::error(message)
        }
    }
}

/// Shared dispatcher over an immutable handler set.
///
/// Optionally checks payloads against the manifests' declared schemas; see
/// [`DispatchConfig`]. Both checks are off by default.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    handlers: Arc<VerbHandlers>,
    manifests: Option<Arc<ManifestRegistry>>,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(handlers: VerbHandlers) -> Self {
        Self::from_shared(Arc::new(handlers))
    }

    pub fn from_shared(handlers: Arc<VerbHandlers>) -> Self {
        Self {
            handlers,
            manifests: None,
            config: DispatchConfig::default(),
        }
    }

    /// Enable schema checks against `manifests` as selected by `config`.
    pub fn with_manifests(mut self, manifests: Arc<ManifestRegistry>, config: DispatchConfig) -> Self {
        self.manifests = Some(manifests);
        self.config = config;
        self
    }

    pub fn handlers(&self) -> &VerbHandlers {
        &self.handlers
    }

    pub async fn execute(&self, verb_id: &str, input: Option<VerbInput>) -> VerbResult {
        self.execute_recorded(verb_id, input).await.0
    }

    /// Execute a wire-level request.
    pub async fn handle(&self, request: VerbRequest) -> VerbResult {
        self.execute(request.verb_id.as_str(), Some(request.input)).await
    }

    /// Execute and also return a [`DispatchRecord`] describing the call.
    pub async fn execute_recorded(
        &self,
        verb_id: &str,
        input: Option<VerbInput>,
    ) -> (VerbResult, DispatchRecord) {
        let started_at = SystemTime::now();
        let (result, status) = self.run(verb_id, input.unwrap_or_default()).await;
        let mut record = DispatchRecord::new(VerbId::from(verb_id), started_at, SystemTime::now(), status);
        record.error = result.error_message().map(str::to_string);
        tracing::debug!(
            verb = verb_id,
            status = ?record.status,
            duration_ms = record.duration_ms,
            "verb dispatched"
        );
        (result, record)
    }

    async fn run(&self, verb_id: &str, input: VerbInput) -> (VerbResult, DispatchStatus) {
        let Some(handler) = self.handlers.lookup(verb_id) else {
            tracing::warn!(verb = verb_id, "unknown verb");
            return (unknown_verb(verb_id), DispatchStatus::UnknownVerb);
        };

        let declared = self
            .manifests
            .as_ref()
            .and_then(|manifests| manifests.find_verb(verb_id));

        if let (true, Some(verb)) = (self.config.validate_input, declared) {
            let payload = Value::Object(input.clone());
            if let Err(error) = validate_schema(&payload, &verb.input) {
                tracing::warn!(verb = verb_id, %error, "input rejected");
                return (
                    VerbResult::error(format!("Invalid input for {verb_id}: {error}")),
                    DispatchStatus::Rejected,
                );
            }
        }

        let result = match invoke_guarded(handler.as_ref(), input).await {
            Ok(result) => result,
            Err(message) => {
                tracing::warn!(verb = verb_id, error = %message, "verb handler faulted");
                return (VerbResult::error(message), DispatchStatus::Faulted);
            }
        };

        if let (true, Some(verb)) = (self.config.validate_output, declared) {
            let payload = Value::Object(result.as_map().clone());
            if let Err(error) = validate_schema(&payload, &verb.output) {
                tracing::warn!(verb = verb_id, %error, "output rejected");
                return (
                    VerbResult::error(format!("Invalid output for {verb_id}: {error}")),
                    DispatchStatus::Rejected,
                );
            }
        }

        let status = if result.is_failure() {
            DispatchStatus::Declined
        } else {
            DispatchStatus::Completed
        };
        (result, status)
    }
}

fn unknown_verb(verb_id: &str) -> VerbResult {
    VerbResult::error(format!("Unknown verb: {verb_id}"))
}

/// Run a handler to completion, folding errors and panics into a message.
async fn invoke_guarded(handler: &dyn VerbHandler, input: VerbInput) -> Result<VerbResult, String> {
    let outcome = AssertUnwindSafe(async move { handler.invoke(input).await })
        .catch_unwind()
        .await;
    match outcome {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(fault)) => Err(fault.to_string()),
        Err(panic) => Err(panic_message(panic.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "verb handler panicked".to_string()
    }
}
