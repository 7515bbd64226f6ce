use serde::{Deserialize, Serialize};

/// Outcome of downloading an article
///
/// Optional fields that were never set are left out of the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleInfo {
    /// Response body, or the transport error message when no response arrived
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub success: bool,
}

impl ArticleInfo {
    /// Record for a request that never produced a response
    pub fn transport_failure(message: String) -> Self {
        Self {
            text: Some(message),
            plain_text: None,
            status_code: None,
            success: false,
        }
    }

    /// Record for a response, before any extraction
    pub fn from_response(status_code: u16, text: String) -> Self {
        Self {
            text: Some(text),
            plain_text: None,
            status_code: Some(status_code),
            success: false,
        }
    }

    /// Plain text on success, `Error <status>` otherwise
    pub fn contents(&self) -> String {
        match (&self.plain_text, self.success) {
            (Some(plain_text), true) => plain_text.clone(),
            _ => match self.status_code {
                Some(status) => format!("Error {}", status),
                None => format!("Error {}", self.text.as_deref().unwrap_or("unknown")),
            },
        }
    }
}
