//! Host capabilities the standard verbs call into.
//!
//! Each family has its own trait. Only [`Navigator`] is mandatory; a family
//! whose host is missing falls back to a default result or declines.

use serde_json::{Map, Value};

use crate::types::{FormEntry, SearchResponse, SessionState, ThemeState, ToastOptions};

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
    fn back(&self);
}

pub trait ThemeHost: Send + Sync {
    fn theme(&self) -> ThemeState;
    /// Apply `mode` and return the mode that was active before.
    fn set_theme(&self, mode: &str) -> String;
}

pub trait SearchHost: Send + Sync {
    fn search(&self, query: &str, scope: Option<&str>, limit: Option<usize>) -> SearchResponse;
}

pub trait ToastHost: Send + Sync {
    /// Show a toast and return its id.
    fn show(&self, options: ToastOptions) -> String;
    /// Dismiss one toast, or all of them for `None`.
    fn dismiss(&self, toast_id: Option<&str>);
}

pub trait ModalHost: Send + Sync {
    fn open(&self, modal_id: &str, data: Option<Value>);
    /// Close one modal, or the topmost for `None`.
    fn close(&self, modal_id: Option<&str>);
}

pub trait FormHost: Send + Sync {
    fn forms(&self) -> Vec<FormEntry>;
    /// Fill fields and return the names that were set.
    fn fill(&self, form_id: &str, values: &Map<String, Value>) -> Vec<String>;
    /// Submit and return validation errors; empty means accepted.
    fn submit(&self, form_id: &str) -> Vec<String>;
    fn reset(&self, form_id: &str);
}

#[async_trait::async_trait]
pub trait SessionHost: Send + Sync {
    fn session(&self) -> SessionState;

    async fn logout(&self) -> anyhow::Result<()>;

    fn preferences(&self) -> Option<Map<String, Value>> {
        None
    }
}
