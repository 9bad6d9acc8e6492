//! Payload types shared by the standard verb families.

use serde::{Deserialize, Serialize};

/// A modal dialog the host can open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalEntry {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Result page returned by `ui.search.query`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
}

/// Session snapshot returned by `user.session.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    pub id: String,
    pub title: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastOptions {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ToastVariant>,
    /// Display time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

/// Current theme and what it resolves to (`system` resolves to light or dark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub mode: String,
    pub resolved: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_result_serializes_kind_as_type() {
        let result = SearchResult {
            id: "help".to_string(),
            title: "Help Center".to_string(),
            snippet: "Navigate to Help Center".to_string(),
            url: "/help".to_string(),
            kind: "page".to_string(),
        };
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["type"], json!("page"));
    }

    #[test]
    fn toast_options_accept_partial_input() {
        let options: ToastOptions = serde_json::from_value(json!({
            "message": "Saved",
            "variant": "success"
        }))
        .expect("deserialize");
        assert_eq!(options.variant, Some(ToastVariant::Success));
        assert_eq!(options.duration, None);
        assert!(serde_json::from_value::<ToastOptions>(json!({"message": "x", "variant": "loud"})).is_err());
    }

    #[test]
    fn session_user_uses_camel_case() {
        let user: SessionUser = serde_json::from_value(json!({
            "id": "u1",
            "displayName": "Ada",
            "email": "ada@example.com",
            "role": "admin"
        }))
        .expect("deserialize");
        assert_eq!(user.display_name, "Ada");
    }
}
