//! Conversion between the generic record model and Linode's record schema.
//!
//! Two provider behaviors are preserved rather than papered over:
//!
//! - **SRV names.** Linode encodes an SRV record's owner through the dedicated
//!   `service`/`protocol` fields and ignores `name` on creation, so the create
//!   request always carries an empty name. The generic name of an SRV record does
//!   not survive a create/read cycle.
//! - **CAA flags.** Linode has no flags field. Reads always report `flags = 0`
//!   and writes drop whatever flags the caller set.

use std::net::IpAddr;
use std::time::Duration;

use crate::error::{Result, ZoneError};
use crate::linode::types::{LinodeDomainRecord, LinodeRecordCreate, LinodeRecordType};
use crate::types::{Record, RecordData, RecordType};
use crate::utils::names::{from_provider_name, provider_create_name};

/// Converts a Linode record to the generic model.
///
/// `PTR` records have no generic counterpart and fail with
/// [`ZoneError::UnsupportedKind`]; unrecognized tags fail with
/// [`ZoneError::UnknownType`].
pub fn to_generic(record: &LinodeDomainRecord) -> Result<Record> {
    let id = Some(record.id);
    let data = match &record.record_type {
        LinodeRecordType::A | LinodeRecordType::Aaaa => {
            let ip = record
                .target
                .parse::<IpAddr>()
                .map_err(|e| ZoneError::InvalidAddress {
                    record_id: id,
                    value: record.target.clone(),
                    detail: e.to_string(),
                })?;
            RecordData::Address { ip }
        }
        LinodeRecordType::Ns => RecordData::Ns {
            target: record.target.clone(),
        },
        LinodeRecordType::Cname => RecordData::Cname {
            target: record.target.clone(),
        },
        LinodeRecordType::Txt => RecordData::Txt {
            text: record.target.clone(),
        },
        LinodeRecordType::Mx => RecordData::Mx {
            preference: narrow(id, "priority", record.priority)?,
            target: record.target.clone(),
        },
        LinodeRecordType::Srv => RecordData::Srv {
            service: strip_underscore(record.service.as_deref()),
            transport: strip_underscore(record.protocol.as_deref()),
            priority: narrow(id, "priority", record.priority)?,
            weight: narrow(id, "weight", record.weight)?,
            port: narrow(id, "port", record.port)?,
            target: record.target.clone(),
        },
        LinodeRecordType::Caa => {
            let tag = record
                .tag
                .clone()
                .ok_or(ZoneError::MissingRequiredField {
                    record_id: id,
                    field: "tag",
                })?;
            RecordData::Caa {
                flags: 0,
                tag,
                value: record.target.clone(),
            }
        }
        LinodeRecordType::Ptr => {
            return Err(ZoneError::UnsupportedKind {
                record_type: "PTR".to_string(),
                detail: format!("record {} has no generic representation", record.id),
            });
        }
        LinodeRecordType::Other(tag) => {
            return Err(ZoneError::UnknownType {
                record_type: tag.clone(),
            });
        }
    };

    let secs = u64::try_from(record.ttl_sec).map_err(|_| ZoneError::RangeError {
        record_id: id,
        field: "ttl_sec",
        value: i128::from(record.ttl_sec),
    })?;

    Ok(Record {
        name: from_provider_name(&record.name),
        ttl: Duration::from_secs(secs),
        data,
    })
}

/// Translates a whole listing, keeping each record's provider ID.
///
/// `PTR` records are skipped with a warning. Any other translation failure
/// fails the whole listing.
pub fn to_generic_listing(records: &[LinodeDomainRecord]) -> Result<Vec<(u64, Record)>> {
    let mut translated = Vec::with_capacity(records.len());
    for raw in records {
        match to_generic(raw) {
            Ok(record) => translated.push((raw.id, record)),
            Err(ZoneError::UnsupportedKind { .. }) if raw.record_type == LinodeRecordType::Ptr => {
                log::warn!("Skipping PTR record {}", raw.id);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(translated)
}

/// Builds the Linode create request for a generic record in `zone`.
///
/// Service bindings fail with [`ZoneError::UnsupportedKind`]; deciding whether
/// that is fatal is up to the caller.
pub fn to_create_spec(record: &Record, zone: &str) -> Result<LinodeRecordCreate> {
    let ttl_sec = i64::try_from(record.ttl.as_secs()).map_err(|_| ZoneError::RangeError {
        record_id: None,
        field: "ttl_sec",
        value: i128::from(record.ttl.as_secs()),
    })?;
    let name = provider_create_name(&record.name, zone);

    let spec = match &record.data {
        RecordData::Address { ip } => {
            let record_type = match ip {
                IpAddr::V4(_) => LinodeRecordType::A,
                IpAddr::V6(_) => LinodeRecordType::Aaaa,
            };
            LinodeRecordCreate::new(record_type, name, ip.to_string(), ttl_sec)
        }
        RecordData::Cname { target } => {
            LinodeRecordCreate::new(LinodeRecordType::Cname, name, target.as_str(), ttl_sec)
        }
        RecordData::Ns { target } => {
            LinodeRecordCreate::new(LinodeRecordType::Ns, name, target.as_str(), ttl_sec)
        }
        RecordData::Txt { text } => {
            LinodeRecordCreate::new(LinodeRecordType::Txt, name, text.as_str(), ttl_sec)
        }
        RecordData::Mx { preference, target } => {
            let mut spec =
                LinodeRecordCreate::new(LinodeRecordType::Mx, name, target.as_str(), ttl_sec);
            spec.priority = Some(i64::from(*preference));
            spec
        }
        RecordData::Srv {
            service,
            transport,
            priority,
            weight,
            port,
            target,
        } => {
            // Linode derives the owner name from service/protocol.
            let mut spec =
                LinodeRecordCreate::new(LinodeRecordType::Srv, "", target.as_str(), ttl_sec);
            spec.priority = Some(i64::from(*priority));
            spec.weight = Some(i64::from(*weight));
            spec.port = Some(i64::from(*port));
            spec.service = Some(service.clone());
            spec.protocol = Some(transport.clone());
            spec
        }
        RecordData::Caa { tag, value, .. } => {
            let mut spec =
                LinodeRecordCreate::new(LinodeRecordType::Caa, name, value.as_str(), ttl_sec);
            spec.tag = Some(tag.clone());
            spec
        }
        RecordData::ServiceBinding { .. } => {
            return Err(unsupported(record.record_type(), record));
        }
    };

    Ok(spec)
}

fn unsupported(record_type: RecordType, record: &Record) -> ZoneError {
    ZoneError::UnsupportedKind {
        record_type: record_type.to_string(),
        detail: format!(
            "Linode does not support service binding records ({} {})",
            record.name,
            record.data.flatten()
        ),
    }
}

/// Absent is an error, out-of-range is an error; nothing is truncated.
fn narrow(record_id: Option<u64>, field: &'static str, value: Option<i64>) -> Result<u16> {
    let value = value.ok_or(ZoneError::MissingRequiredField { record_id, field })?;
    u16::try_from(value).map_err(|_| ZoneError::RangeError {
        record_id,
        field,
        value: i128::from(value),
    })
}

fn strip_underscore(value: Option<&str>) -> String {
    value
        .map(|v| v.strip_prefix('_').unwrap_or(v))
        .unwrap_or_default()
        .to_string()
}
