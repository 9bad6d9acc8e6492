use std::sync::Arc;

use crate::constants::NAV_VERBS;
use crate::dispatch::{sync_handler, VerbHandlersBuilder};
use crate::registries::RouteRegistry;
use crate::verb::VerbResult;

use super::host::Navigator;
use super::{str_arg, to_json};

pub(super) fn register(
    builder: VerbHandlersBuilder,
    routes: Arc<RouteRegistry>,
    navigator: Arc<dyn Navigator>,
) -> VerbHandlersBuilder {
    let list_routes = routes.clone();
    let back_navigator = navigator.clone();
    builder
        .register(
            NAV_VERBS.list_pages,
            sync_handler(move |_input| {
                Ok(VerbResult::new().with("routes", to_json(list_routes.all())?))
            }),
        )
        .register(
            NAV_VERBS.go,
            sync_handler(move |input| {
                // A known routeId wins; otherwise fall back to an explicit path.
                let path = str_arg(&input, "routeId")
                    .and_then(|id| routes.find(id))
                    .map(|route| route.path.as_str())
                    .or_else(|| str_arg(&input, "path"))
                    .filter(|path| !path.is_empty());
                let Some(path) = path else {
                    return Ok(VerbResult::new().with("success", false));
                };
                navigator.navigate(path);
                Ok(VerbResult::ok().with("path", path))
            }),
        )
        .register(
            NAV_VERBS.back,
            sync_handler(move |_input| {
                back_navigator.back();
                Ok(VerbResult::ok())
            }),
        )
}
