//! Replace-by-(name, type) planning for `set_records`.

use std::collections::HashSet;

use crate::error::Result;
use crate::linode::types::LinodeDomainRecord;
use crate::translate::to_generic_listing;
use crate::types::{Record, RecordType};
use crate::utils::names::relative_name;

/// Grouping key of a set operation.
///
/// `name` is always zone-relative, so `"www.example.com."` and `"www"` share a
/// key in zone `example.com`, as do `"example.com."` and `"@"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub name: String,
    pub record_type: RecordType,
}

impl RecordKey {
    pub fn of(record: &Record, zone: &str) -> Self {
        Self {
            name: relative_name(&record.name, zone),
            record_type: record.record_type(),
        }
    }
}

/// Distinct `(name, type)` pairs present in the input.
pub fn group_keys(records: &[Record], zone: &str) -> HashSet<RecordKey> {
    records.iter().map(|r| RecordKey::of(r, zone)).collect()
}

/// Existing records whose `(name, type)` pair appears in `keys`.
///
/// Values are not compared: every record in a touched group is replaced. The
/// whole listing is translated before anything is returned, so a malformed
/// record aborts the set before the first deletion. `PTR` records can never
/// share a key with generic input and are skipped.
pub fn records_to_replace(
    existing: &[LinodeDomainRecord],
    keys: &HashSet<RecordKey>,
    zone: &str,
) -> Result<Vec<(u64, Record)>> {
    Ok(to_generic_listing(existing)?
        .into_iter()
        .filter(|(_, record)| keys.contains(&RecordKey::of(record, zone)))
        .collect())
}
