//! Linode error mapping

use crate::error::ZoneError;

use super::types::LinodeErrorBody;

/// Maps a non-2xx response to [`ZoneError::Transport`].
///
/// Linode error bodies look like
/// `{"errors": [{"reason": "Not found", "field": "name"}]}`; all reasons are kept.
pub(crate) fn api_error(operation: &str, status: u16, body: &str) -> ZoneError {
    let detail = serde_json::from_str::<LinodeErrorBody>(body)
        .ok()
        .map(|b| {
            b.errors
                .iter()
                .map(|e| match &e.field {
                    Some(field) => format!("{field}: {}", e.reason),
                    None => e.reason.clone(),
                })
                .collect::<Vec<_>>()
                .join("; ")
        })
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| match status {
            401 => "invalid or expired token".to_string(),
            403 => "token lacks the domains scope".to_string(),
            429 => "rate limited".to_string(),
            _ => "unexpected response".to_string(),
        });

    ZoneError::Transport {
        operation: operation.to_string(),
        status: Some(status),
        detail,
    }
}
