//! Delete-query matching.

use std::time::Duration;

use crate::types::ResourceRecord;

/// Whether `candidate` is selected by the delete `query`.
///
/// `name` must match exactly. `record_type`, `ttl` and `data` are wildcards when
/// the query leaves them at their zero value (`None`, zero duration, empty string)
/// and must match exactly otherwise.
///
/// Callers reject queries with an empty name before matching; an empty name here
/// only ever matches a candidate with an empty name.
pub fn matches(query: &ResourceRecord, candidate: &ResourceRecord) -> bool {
    if query.name != candidate.name {
        return false;
    }
    if query
        .record_type
        .is_some_and(|t| candidate.record_type != Some(t))
    {
        return false;
    }
    if query.ttl != Duration::ZERO && query.ttl != candidate.ttl {
        return false;
    }
    query.data.is_empty() || query.data == candidate.data
}
