//! Verb handlers, the handler registry and the dispatcher.

pub mod dispatcher;
pub mod handler;
pub mod invocation;
pub mod registry;

pub use dispatcher::{execute, Dispatcher};
pub use handler::{handler_fn, sync_handler, HandlerResult, VerbHandler};
pub use invocation::{DispatchRecord, DispatchStatus};
pub use registry::{create_verb_handlers, VerbHandlers, VerbHandlersBuilder};
