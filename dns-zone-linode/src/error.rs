//! Error taxonomy for zone operations.

use serde::Serialize;
use thiserror::Error;

use crate::types::Record;

/// Unified error type for translation, lookup and transport failures.
///
/// Translation variants carry the provider record ID when the failing record came
/// from the provider, so callers can tell which remote record is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ZoneError {
    /// A provider call failed (network, HTTP status, or an API-level error).
    ///
    /// Never retried by this crate.
    #[error("{operation} failed{}: {detail}", fmt_status(*.status))]
    Transport {
        /// The collaborator call that failed, e.g. `"list records for domain 42"`.
        operation: String,
        /// HTTP status code, if the failure came from a response.
        status: Option<u16>,
        /// Error details.
        detail: String,
    },

    /// The provider response could not be decoded.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The record kind exists in one model but has no counterpart in the other.
    #[error("Unsupported record kind {record_type}: {detail}")]
    UnsupportedKind {
        /// The record type tag.
        record_type: String,
        /// Description of why it can't be mapped.
        detail: String,
    },

    /// The provider returned a record type tag this crate does not recognize.
    #[error("Unknown record type: {record_type}")]
    UnknownType {
        /// The unrecognized tag.
        record_type: String,
    },

    /// An address record's target is not an IP literal.
    #[error("Record {} has invalid address '{value}': {detail}", fmt_id(*.record_id))]
    InvalidAddress {
        /// Provider record ID.
        record_id: Option<u64>,
        /// The offending target string.
        value: String,
        /// Parser message.
        detail: String,
    },

    /// A numeric field does not fit into the target model's width.
    #[error("Record {} field '{field}' out of range: {value}", fmt_id(*.record_id))]
    RangeError {
        /// Provider record ID.
        record_id: Option<u64>,
        /// Field name.
        field: &'static str,
        /// The value that didn't fit.
        value: i128,
    },

    /// A required kind-specific field is absent.
    #[error("Record {} is missing required field '{field}'", fmt_id(*.record_id))]
    MissingRequiredField {
        /// Provider record ID.
        record_id: Option<u64>,
        /// Field name.
        field: &'static str,
    },

    /// No domain matches the zone name.
    #[error("Zone '{zone}' not found")]
    ZoneNotFound {
        /// Normalized zone name.
        zone: String,
    },

    /// More than one domain matches the zone name.
    #[error("Zone '{zone}' is ambiguous: {matches} domains matched")]
    AmbiguousZone {
        /// Normalized zone name.
        zone: String,
        /// Number of matching domains.
        matches: usize,
    },

    /// A delete query has an empty name.
    #[error("Delete query #{index} has an empty record name")]
    EmptyRecordName {
        /// Position of the query in the input.
        index: usize,
    },

    /// The configuration is incomplete or malformed.
    #[error("Configuration error: {detail}")]
    Config {
        /// What is wrong.
        detail: String,
    },
}

fn fmt_id(record_id: Option<u64>) -> String {
    record_id.map_or_else(|| "<new>".to_string(), |id| id.to_string())
}

fn fmt_status(status: Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl ZoneError {
    /// Whether the error stems from caller input or known provider limits rather
    /// than a remote fault; used to pick the log level.
    ///
    /// `true` means `warn`, `false` means `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedKind { .. }
                | Self::ZoneNotFound { .. }
                | Self::AmbiguousZone { .. }
                | Self::EmptyRecordName { .. }
                | Self::Config { .. }
        )
    }

    #[cfg_attr(not(feature = "linode"), allow(dead_code))]
    pub(crate) fn transport(operation: impl Into<String>, detail: impl ToString) -> Self {
        Self::Transport {
            operation: operation.into(),
            status: None,
            detail: detail.to_string(),
        }
    }
}

/// Failure of a multi-step mutation (`set_records`, `delete_records`).
///
/// The provider offers no transactions, so a failed batch may leave the zone
/// partially changed. `completed` lists the records that were already acted on:
/// records created so far for a set, records deleted so far for a delete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source}")]
pub struct MutationError {
    /// Records already affected before the failure.
    pub completed: Vec<Record>,
    /// The first fatal error.
    #[source]
    pub source: ZoneError,
}

impl MutationError {
    pub(crate) fn new(completed: Vec<Record>, source: ZoneError) -> Self {
        Self { completed, source }
    }
}

impl From<ZoneError> for MutationError {
    fn from(source: ZoneError) -> Self {
        Self::new(Vec::new(), source)
    }
}

/// Convenience type alias for `Result<T, ZoneError>`.
pub type Result<T> = std::result::Result<T, ZoneError>;
