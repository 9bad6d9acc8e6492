use std::sync::Arc;

use serde_json::Value;

use crate::constants::TOAST_VERBS;
use crate::dispatch::{sync_handler, VerbHandlersBuilder};
use crate::types::{ToastOptions, ToastVariant};
use crate::verb::VerbResult;

use super::host::ToastHost;
use super::str_arg;

pub(super) fn register(
    builder: VerbHandlersBuilder,
    host: Option<Arc<dyn ToastHost>>,
) -> VerbHandlersBuilder {
    let dismiss_host = host.clone();
    builder
        .register(
            TOAST_VERBS.show,
            sync_handler(move |input| {
                let Some(host) = &host else {
                    return Ok(VerbResult::declined("show_toast not configured"));
                };
                let Some(message) = str_arg(&input, "message") else {
                    return Ok(VerbResult::declined("message is required"));
                };
                // An unrecognised variant is dropped rather than rejected.
                let variant = input
                    .get("variant")
                    .cloned()
                    .and_then(|value| serde_json::from_value::<ToastVariant>(value).ok());
                let options = ToastOptions {
                    message: message.to_string(),
                    variant,
                    duration: input.get("duration").and_then(Value::as_u64),
                };
                let toast_id = host.show(options);
                Ok(VerbResult::ok().with("toastId", toast_id))
            }),
        )
        .register(
            TOAST_VERBS.dismiss,
            sync_handler(move |input| {
                let Some(host) = &dismiss_host else {
                    return Ok(VerbResult::declined("dismiss_toast not configured"));
                };
                host.dismiss(str_arg(&input, "toastId"));
                Ok(VerbResult::ok())
            }),
        )
}
