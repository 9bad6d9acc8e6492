//! The handler seam: one async `invoke` per verb.

use std::future::Future;
use std::sync::Arc;

use crate::verb::{VerbInput, VerbResult};

/// Outcome of a handler. `Err` is a fault; a handler that merely declines
/// returns `Ok` with `success: false` and an `error` reason.
pub type HandlerResult = anyhow::Result<VerbResult>;

/// Executable implementation backing one verb id.
#[async_trait::async_trait]
pub trait VerbHandler: Send + Sync {
    async fn invoke(&self, input: VerbInput) -> HandlerResult;
}

struct FnHandler<F>(F);

#[async_trait::async_trait]
impl<F, Fut> VerbHandler for FnHandler<F>
where
    F: Fn(VerbInput) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn invoke(&self, input: VerbInput) -> HandlerResult {
        (self.0)(input).await
    }
}

struct SyncHandler<F>(F);

#[async_trait::async_trait]
impl<F> VerbHandler for SyncHandler<F>
where
    F: Fn(VerbInput) -> HandlerResult + Send + Sync + 'static,
{
    async fn invoke(&self, input: VerbInput) -> HandlerResult {
        (self.0)(input)
    }
}

/// Wrap an async closure as a handler.
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn VerbHandler>
where
    F: Fn(VerbInput) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(FnHandler(f))
}

/// Wrap a closure that completes without suspending.
pub fn sync_handler<F>(f: F) -> Arc<dyn VerbHandler>
where
    F: Fn(VerbInput) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(SyncHandler(f))
}
