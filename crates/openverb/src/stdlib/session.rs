use std::sync::Arc;

use serde_json::Value;

use crate::constants::SESSION_VERBS;
use crate::dispatch::{sync_handler, HandlerResult, VerbHandlersBuilder};
use crate::verb::{VerbInput, VerbResult};

use super::host::SessionHost;
use super::to_json;

pub(super) fn register(
    builder: VerbHandlersBuilder,
    host: Option<Arc<dyn SessionHost>>,
) -> VerbHandlersBuilder {
    let get_host = host.clone();
    let logout_host = host.clone();
    builder
        .register(
            SESSION_VERBS.get,
            sync_handler(move |_input| {
                let state = get_host
                    .as_ref()
                    .map(|host| host.session())
                    .unwrap_or_default();
                Ok(VerbResult::try_from(to_json(state)?)?)
            }),
        )
        .handle(SESSION_VERBS.logout, move |input| {
            logout(logout_host.clone(), input)
        })
        .register(
            SESSION_VERBS.get_preferences,
            sync_handler(move |_input| {
                let preferences = host
                    .as_ref()
                    .and_then(|host| host.preferences())
                    .map(Value::Object)
                    .unwrap_or_else(default_preferences);
                Ok(VerbResult::new().with("preferences", preferences))
            }),
        )
}

async fn logout(host: Option<Arc<dyn SessionHost>>, input: VerbInput) -> HandlerResult {
    if input.get("confirmed").and_then(Value::as_bool) != Some(true) {
        return Ok(VerbResult::new().with("success", false));
    }
    let Some(host) = host else {
        return Ok(VerbResult::declined("logout not configured"));
    };
    host.logout().await?;
    tracing::info!("user session logged out");
    Ok(VerbResult::ok())
}

fn default_preferences() -> Value {
    serde_json::json!({
        "language": "en",
        "timezone": "UTC",
        "notifications": false,
    })
}

