use std::sync::Arc;

use serde_json::{Map, Value};

use crate::constants::FORM_VERBS;
use crate::dispatch::{sync_handler, VerbHandlersBuilder};
use crate::verb::{VerbInput, VerbResult};

use super::host::FormHost;
use super::{str_arg, to_json};

/// Without a form host every form verb answers with an empty, successful result.
pub(super) fn register(
    builder: VerbHandlersBuilder,
    host: Option<Arc<dyn FormHost>>,
) -> VerbHandlersBuilder {
    let list_host = host.clone();
    let fill_host = host.clone();
    let submit_host = host.clone();
    builder
        .register(
            FORM_VERBS.list,
            sync_handler(move |_input| {
                let forms = match &list_host {
                    Some(host) => to_json(host.forms())?,
                    None => Value::Array(Vec::new()),
                };
                Ok(VerbResult::new().with("forms", forms))
            }),
        )
        .register(
            FORM_VERBS.fill,
            sync_handler(move |input| {
                let Some(host) = &fill_host else {
                    return Ok(VerbResult::ok().with("filled", Value::Array(Vec::new())));
                };
                let Some(form_id) = form_id(&input) else {
                    return Ok(VerbResult::declined("formId is required"));
                };
                let empty = Map::new();
                let values = input
                    .get("values")
                    .and_then(Value::as_object)
                    .unwrap_or(&empty);
                let filled = host.fill(form_id, values);
                Ok(VerbResult::ok().with("filled", to_json(filled)?))
            }),
        )
        .register(
            FORM_VERBS.submit,
            sync_handler(move |input| {
                let Some(host) = &submit_host else {
                    return Ok(VerbResult::ok().with("errors", Value::Array(Vec::new())));
                };
                let Some(form_id) = form_id(&input) else {
                    return Ok(VerbResult::declined("formId is required"));
                };
                let errors = host.submit(form_id);
                Ok(VerbResult::new()
                    .with("success", errors.is_empty())
                    .with("errors", to_json(errors)?))
            }),
        )
        .register(
            FORM_VERBS.reset,
            sync_handler(move |input| {
                let Some(host) = &host else {
                    return Ok(VerbResult::ok());
                };
                let Some(form_id) = form_id(&input) else {
                    return Ok(VerbResult::declined("formId is required"));
                };
                host.reset(form_id);
                Ok(VerbResult::ok())
            }),
        )
}

fn form_id(input: &VerbInput) -> Option<&str> {
    str_arg(input, "formId").filter(|id| !id.is_empty())
}
