use async_trait::async_trait;

use crate::error::{MutationError, Result, ZoneError};
use crate::linode::types::{LinodeDomain, LinodeDomainRecord, LinodeRecordCreate};
use crate::types::{Record, ResourceRecord, Zone};
use crate::utils::names::normalize_domain_name;

/// Linode API 协作者 Trait
///
/// The calls [`ZoneProvider`](crate::ZoneProvider) makes against the provider.
/// Each call is one independent, non-transactional operation. Implementations
/// report every remote failure (including "record not found" on delete) as
/// [`ZoneError::Transport`] and do not retry.
#[async_trait]
pub trait RecordApi: Send + Sync {
    /// 获取全部域名
    async fn list_domains(&self) -> Result<Vec<LinodeDomain>>;

    /// 按名称精确筛选域名
    async fn find_domains(&self, domain: &str) -> Result<Vec<LinodeDomain>>;

    /// 获取域名下的全部记录
    async fn list_records(&self, domain_id: u64) -> Result<Vec<LinodeDomainRecord>>;

    /// 创建记录
    async fn create_record(
        &self,
        domain_id: u64,
        spec: &LinodeRecordCreate,
    ) -> Result<LinodeDomainRecord>;

    /// 删除记录
    async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<()>;

    /// Resolves a zone name to exactly one domain ID.
    ///
    /// The name is compared without its trailing dot.
    async fn resolve_zone_id(&self, zone: &str) -> Result<u64> {
        let zone = normalize_domain_name(zone);
        let domains = self.find_domains(zone).await?;
        match domains.as_slice() {
            [] => Err(ZoneError::ZoneNotFound {
                zone: zone.to_string(),
            }),
            [domain] => Ok(domain.id),
            many => Err(ZoneError::AmbiguousZone {
                zone: zone.to_string(),
                matches: many.len(),
            }),
        }
    }
}

/// Zone-editing interface.
///
/// Every call resolves the zone name first; `ZoneNotFound` and `AmbiguousZone`
/// are fatal for all of them.
#[async_trait]
pub trait ZoneEditor: Send + Sync {
    /// Lists every zone visible to the credentials.
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// Lists all records in the zone.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Creates each record independently; records that fail are skipped and
    /// logged, not reported as an error.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Replaces every `(name, type)` group named in `records` with exactly the
    /// given records and leaves all other groups untouched.
    ///
    /// Not atomic. Matching records are deleted before any record is created;
    /// a failure after the first deletion leaves those records deleted.
    async fn set_records(
        &self,
        zone: &str,
        records: &[Record],
    ) -> std::result::Result<Vec<Record>, MutationError>;

    /// Deletes every record matched by one of the queries and returns them.
    ///
    /// See [`matches`](crate::matcher::matches) for the wildcard rules. A record
    /// is deleted at most once even if several queries match it.
    async fn delete_records(
        &self,
        zone: &str,
        queries: &[ResourceRecord],
    ) -> std::result::Result<Vec<Record>, MutationError>;
}
