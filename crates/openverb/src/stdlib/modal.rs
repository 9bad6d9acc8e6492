use std::sync::Arc;

use crate::constants::MODAL_VERBS;
use crate::dispatch::{sync_handler, VerbHandlersBuilder};
use crate::registries::ModalRegistry;
use crate::verb::VerbResult;

use super::host::ModalHost;
use super::{str_arg, to_json};

pub(super) fn register(
    builder: VerbHandlersBuilder,
    modals: Arc<ModalRegistry>,
    host: Option<Arc<dyn ModalHost>>,
) -> VerbHandlersBuilder {
    let close_host = host.clone();
    builder
        .register(
            MODAL_VERBS.list,
            sync_handler(move |_input| Ok(VerbResult::new().with("modals", to_json(modals.all())?))),
        )
        .register(
            MODAL_VERBS.open,
            sync_handler(move |input| {
                let Some(host) = &host else {
                    return Ok(VerbResult::declined("open_modal not configured"));
                };
                let Some(modal_id) = str_arg(&input, "modalId") else {
                    return Ok(VerbResult::declined("modalId is required"));
                };
                host.open(modal_id, input.get("data").cloned());
                Ok(VerbResult::ok().with("modalId", modal_id))
            }),
        )
        .register(
            MODAL_VERBS.close,
            sync_handler(move |input| {
                let Some(host) = &close_host else {
                    return Ok(VerbResult::declined("close_modal not configured"));
                };
                host.close(str_arg(&input, "modalId"));
                Ok(VerbResult::ok())
            }),
        )
}
