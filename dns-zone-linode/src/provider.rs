//! `ZoneEditor` implementation on top of a [`RecordApi`].

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{MutationError, Result, ZoneError};
use crate::matcher::matches;
use crate::reconcile::{group_keys, records_to_replace};
use crate::traits::{RecordApi, ZoneEditor};
use crate::translate::{to_create_spec, to_generic, to_generic_listing};
use crate::types::{Record, ResourceRecord, Zone};
use crate::utils::names::relative_name;

/// Zone record manager for one provider client.
///
/// Linode has no multi-record transaction, so each operation is a sequence of
/// independent list/delete/create calls. The internal mutex keeps one operation
/// in flight per instance; callers sharing a zone across instances or processes
/// must coordinate themselves. Dropping an operation's future cancels the next
/// provider call but does not undo calls already made.
pub struct ZoneProvider<A> {
    api: A,
    lock: Mutex<()>,
}

impl<A: RecordApi> ZoneProvider<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            lock: Mutex::new(()),
        }
    }

    /// The underlying collaborator.
    pub fn api(&self) -> &A {
        &self.api
    }

    async fn create_one(&self, zone: &str, domain_id: u64, record: &Record) -> Result<Record> {
        let spec = to_create_spec(record, zone)?;
        log::debug!(
            "Creating {} record '{}' in domain {domain_id}",
            spec.record_type,
            spec.name
        );
        let created = self.api.create_record(domain_id, &spec).await?;
        to_generic(&created)
    }
}

#[cfg(feature = "linode")]
impl ZoneProvider<crate::linode::LinodeClient> {
    /// Provider backed by the Linode REST API.
    pub fn linode(config: crate::config::LinodeConfig) -> Result<Self> {
        Ok(Self::new(crate::linode::LinodeClient::new(config)?))
    }
}

fn log_failure(operation: &str, zone: &str, e: &ZoneError) {
    if e.is_expected() {
        log::warn!("{operation} on zone '{zone}' failed: {e}");
    } else {
        log::error!("{operation} on zone '{zone}' failed: {e}");
    }
}

#[async_trait]
impl<A: RecordApi> ZoneEditor for ZoneProvider<A> {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let _guard = self.lock.lock().await;
        let domains = self.api.list_domains().await?;
        Ok(domains
            .into_iter()
            .map(|d| Zone { name: d.domain })
            .collect())
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let _guard = self.lock.lock().await;
        let domain_id = self.api.resolve_zone_id(zone).await?;
        let raw = self.api.list_records(domain_id).await?;
        raw.iter().map(to_generic).collect()
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let _guard = self.lock.lock().await;
        let domain_id = self.api.resolve_zone_id(zone).await?;

        let mut added = Vec::with_capacity(records.len());
        for record in records {
            match self.create_one(zone, domain_id, record).await {
                Ok(created) => added.push(created),
                Err(e @ ZoneError::UnsupportedKind { .. }) => {
                    log::warn!("Skipping unsupported record '{}': {e}", record.name);
                }
                Err(e) => {
                    log::warn!("Skipping record '{}' due to error: {e}", record.name);
                }
            }
        }

        log::info!(
            "Appended {}/{} records to zone '{zone}'",
            added.len(),
            records.len()
        );
        Ok(added)
    }

    async fn set_records(
        &self,
        zone: &str,
        records: &[Record],
    ) -> std::result::Result<Vec<Record>, MutationError> {
        let _guard = self.lock.lock().await;
        let domain_id = self.api.resolve_zone_id(zone).await?;

        let keys = group_keys(records, zone);
        let existing = self.api.list_records(domain_id).await?;
        let doomed = records_to_replace(&existing, &keys, zone)?;

        for (record_id, _) in &doomed {
            if let Err(e) = self.api.delete_record(domain_id, *record_id).await {
                log_failure("set", zone, &e);
                return Err(MutationError::new(Vec::new(), e));
            }
        }

        let mut created = Vec::with_capacity(records.len());
        for record in records {
            match self.create_one(zone, domain_id, record).await {
                Ok(record) => created.push(record),
                Err(e) => {
                    log_failure("set", zone, &e);
                    return Err(MutationError::new(created, e));
                }
            }
        }

        log::info!(
            "Set {} groups in zone '{zone}': deleted {}, created {}",
            keys.len(),
            doomed.len(),
            created.len()
        );
        Ok(created)
    }

    async fn delete_records(
        &self,
        zone: &str,
        queries: &[ResourceRecord],
    ) -> std::result::Result<Vec<Record>, MutationError> {
        if let Some(index) = queries.iter().position(|q| q.name.is_empty()) {
            return Err(ZoneError::EmptyRecordName { index }.into());
        }

        let _guard = self.lock.lock().await;
        let domain_id = self.api.resolve_zone_id(zone).await?;
        let existing = self.api.list_records(domain_id).await?;

        // 已删除的记录置为 None，保证每条最多删除一次
        let mut candidates: Vec<Option<(u64, Record)>> = match to_generic_listing(&existing) {
            Ok(listing) => listing.into_iter().map(Some).collect(),
            Err(e) => {
                log_failure("delete", zone, &e);
                return Err(e.into());
            }
        };
        let mut deleted = Vec::new();

        for query in queries {
            let query = ResourceRecord {
                name: relative_name(&query.name, zone),
                ..query.clone()
            };
            for slot in &mut candidates {
                let Some((record_id, candidate)) = slot.as_ref() else {
                    continue;
                };
                if !matches(&query, &candidate.rr()) {
                    continue;
                }
                let record_id = *record_id;
                if let Err(e) = self.api.delete_record(domain_id, record_id).await {
                    log_failure("delete", zone, &e);
                    return Err(MutationError::new(deleted, e));
                }
                if let Some((_, record)) = slot.take() {
                    deleted.push(record);
                }
            }
        }

        log::info!("Deleted {} records from zone '{zone}'", deleted.len());
        Ok(deleted)
    }
}
