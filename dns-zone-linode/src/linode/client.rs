//! Linode RecordApi trait 实现

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::traits::RecordApi;

use super::types::{LinodeDomain, LinodeDomainRecord, LinodePage, LinodeRecordCreate};
use super::{LinodeClient, MAX_PAGE_SIZE};

impl LinodeClient {
    /// 逐页拉取直到 `page == pages`
    async fn get_all<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        filter: Option<&serde_json::Value>,
        operation: &str,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let url = format!("{path}?page={page}&page_size={MAX_PAGE_SIZE}");
            let resp: LinodePage<T> = self.get(&url, filter, operation).await?;
            items.extend(resp.data);
            if resp.page >= resp.pages {
                break;
            }
            page = resp.page + 1;
        }
        Ok(items)
    }
}

#[async_trait]
impl RecordApi for LinodeClient {
    async fn list_domains(&self) -> Result<Vec<LinodeDomain>> {
        self.get_all("/domains", None, "list domains").await
    }

    async fn find_domains(&self, domain: &str) -> Result<Vec<LinodeDomain>> {
        let filter = serde_json::json!({ "domain": domain });
        let operation = format!("look up domain '{domain}'");
        let domains: Vec<LinodeDomain> = self.get_all("/domains", Some(&filter), &operation).await?;
        // X-Filter 已经过滤，这里再按名称精确比对一次
        Ok(domains
            .into_iter()
            .filter(|d| d.domain.eq_ignore_ascii_case(domain))
            .collect())
    }

    async fn list_records(&self, domain_id: u64) -> Result<Vec<LinodeDomainRecord>> {
        let operation = format!("list records for domain {domain_id}");
        self.get_all(&format!("/domains/{domain_id}/records"), None, &operation)
            .await
    }

    async fn create_record(
        &self,
        domain_id: u64,
        spec: &LinodeRecordCreate,
    ) -> Result<LinodeDomainRecord> {
        let operation = format!(
            "create {} record '{}' in domain {domain_id}",
            spec.record_type, spec.name
        );
        self.post(&format!("/domains/{domain_id}/records"), spec, &operation)
            .await
    }

    async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        let operation = format!("delete record {record_id} in domain {domain_id}");
        self.delete(&format!("/domains/{domain_id}/records/{record_id}"), &operation)
            .await
    }
}
