//! The standard verb set: the 19 catalog verbs wired onto host capabilities.
//!
//! ```ignore
//! let handlers = StandardVerbs::new(routes, navigator)
//!     .theme(theme_host)
//!     .session(session_host)
//!     .build();
//! ```

mod form;
pub mod host;
mod modal;
mod nav;
mod search;
mod session;
mod theme;
mod toast;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::OpenVerbConfig;
use crate::dispatch::VerbHandlers;
use crate::registries::{ModalRegistry, Route, RouteRegistry};
use crate::types::ModalEntry;
use crate::verb::VerbInput;

pub use host::{FormHost, ModalHost, Navigator, SearchHost, SessionHost, ThemeHost, ToastHost};
pub use search::default_search;

/// Builder for the standard handler set.
pub struct StandardVerbs {
    routes: Arc<RouteRegistry>,
    modals: Arc<ModalRegistry>,
    navigator: Arc<dyn Navigator>,
    theme: Option<Arc<dyn ThemeHost>>,
    search: Option<Arc<dyn SearchHost>>,
    toasts: Option<Arc<dyn ToastHost>>,
    modal_host: Option<Arc<dyn ModalHost>>,
    forms: Option<Arc<dyn FormHost>>,
    session: Option<Arc<dyn SessionHost>>,
}

impl StandardVerbs {
    pub fn new(routes: Vec<Route>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            routes: Arc::new(RouteRegistry::new(routes)),
            modals: Arc::new(ModalRegistry::default()),
            navigator,
            theme: None,
            search: None,
            toasts: None,
            modal_host: None,
            forms: None,
            session: None,
        }
    }

    /// Seed routes and modals from a host config.
    pub fn from_config(config: &OpenVerbConfig, navigator: Arc<dyn Navigator>) -> Self {
        Self::new(config.routes.clone(), navigator).modals(config.modals.clone())
    }

    pub fn modals(mut self, modals: Vec<ModalEntry>) -> Self {
        self.modals = Arc::new(ModalRegistry::new(modals));
        self
    }

    pub fn theme(mut self, host: Arc<dyn ThemeHost>) -> Self {
        self.theme = Some(host);
        self
    }

    pub fn search(mut self, host: Arc<dyn SearchHost>) -> Self {
        self.search = Some(host);
        self
    }

    pub fn toasts(mut self, host: Arc<dyn ToastHost>) -> Self {
        self.toasts = Some(host);
        self
    }

    pub fn modal_host(mut self, host: Arc<dyn ModalHost>) -> Self {
        self.modal_host = Some(host);
        self
    }

    pub fn forms(mut self, host: Arc<dyn FormHost>) -> Self {
        self.forms = Some(host);
        self
    }

    pub fn session(mut self, host: Arc<dyn SessionHost>) -> Self {
        self.session = Some(host);
        self
    }

    pub fn build(self) -> VerbHandlers {
        let builder = VerbHandlers::builder();
        let builder = theme::register(builder, self.theme);
        let builder = nav::register(builder, self.routes.clone(), self.navigator.clone());
        let builder = search::register(builder, self.routes, self.navigator, self.search);
        let builder = toast::register(builder, self.toasts);
        let builder = modal::register(builder, self.modals, self.modal_host);
        let builder = form::register(builder, self.forms);
        let builder = session::register(builder, self.session);
        builder.build()
    }
}

fn str_arg<'a>(input: &'a VerbInput, key: &str) -> Option<&'a str> {
    input.get(key).and_then(Value::as_str)
}

fn to_json<T: Serialize>(value: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}
