use std::sync::Arc;

use crate::constants::THEME_VERBS;
use crate::dispatch::{sync_handler, VerbHandlersBuilder};
use crate::verb::VerbResult;

use super::host::ThemeHost;
use super::str_arg;

pub(super) fn register(
    builder: VerbHandlersBuilder,
    host: Option<Arc<dyn ThemeHost>>,
) -> VerbHandlersBuilder {
    let get_host = host.clone();
    builder
        .register(
            THEME_VERBS.get,
            sync_handler(move |_input| {
                let Some(host) = &get_host else {
                    return Ok(VerbResult::new()
                        .with("mode", "system")
                        .with("resolved", "light"));
                };
                let state = host.theme();
                Ok(VerbResult::new()
                    .with("mode", state.mode)
                    .with("resolved", state.resolved))
            }),
        )
        .register(
            THEME_VERBS.set,
            sync_handler(move |input| {
                let Some(host) = &host else {
                    return Ok(VerbResult::declined("set_theme not configured"));
                };
                let Some(mode) = str_arg(&input, "mode") else {
                    return Ok(VerbResult::declined("mode is required"));
                };
                let previous = host.set_theme(mode);
                Ok(VerbResult::ok()
                    .with("mode", mode)
                    .with("previousMode", previous))
            }),
        )
}
