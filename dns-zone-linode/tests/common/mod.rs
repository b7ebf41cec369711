//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashSet;
use std::env;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dns_zone_linode::{
    LinodeConfig, LinodeDomain, LinodeDomainRecord, LinodeRecordCreate, LinodeRecordType,
    Record, RecordApi, RecordData, Result, ZoneError, ZoneProvider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

// ============ Fake Linode ============

/// Collaborator call recorded by [`FakeLinode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListDomains,
    FindDomains(String),
    ListRecords(u64),
    Create(u64, LinodeRecordCreate),
    Delete(u64, u64),
}

/// Injected failures.
#[derive(Debug, Default)]
pub struct Faults {
    pub list_records: bool,
    /// Record IDs whose deletion fails.
    pub delete_ids: HashSet<u64>,
    /// 1-based index of the create call that fails.
    pub create_call: Option<usize>,
}

#[derive(Debug, Default)]
struct State {
    domains: Vec<LinodeDomain>,
    /// `(domain_id, record)`
    records: Vec<(u64, LinodeDomainRecord)>,
    next_id: u64,
    creates: usize,
    calls: Vec<Call>,
}

/// In-memory Linode account.
///
/// Records are kept in insertion order and get increasing IDs, like the real
/// API. Every collaborator call is logged.
#[derive(Debug, Default)]
pub struct FakeLinode {
    state: RwLock<State>,
    faults: RwLock<Faults>,
}

impl FakeLinode {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_domain(&self, domain: &str) -> u64 {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let id = state.next_id;
        state.domains.push(LinodeDomain {
            id,
            domain: domain.to_string(),
            domain_type: Some("master".to_string()),
            status: Some("active".to_string()),
        });
        id
    }

    /// Seeds a record without logging a call.
    pub async fn seed(&self, domain_id: u64, mut record: LinodeDomainRecord) -> u64 {
        let mut state = self.state.write().await;
        state.next_id += 1;
        record.id = state.next_id;
        let id = record.id;
        state.records.push((domain_id, record));
        id
    }

    pub async fn seed_simple(
        &self,
        domain_id: u64,
        record_type: LinodeRecordType,
        name: &str,
        target: &str,
        ttl_sec: i64,
    ) -> u64 {
        self.seed(domain_id, raw(record_type, name, target, ttl_sec))
            .await
    }

    pub async fn records(&self, domain_id: u64) -> Vec<LinodeDomainRecord> {
        self.state
            .read()
            .await
            .records
            .iter()
            .filter(|(d, _)| *d == domain_id)
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.state.read().await.calls.clone()
    }

    pub async fn mutation_count(&self) -> usize {
        self.calls()
            .await
            .iter()
            .filter(|c| matches!(c, Call::Create(..) | Call::Delete(..)))
            .count()
    }

    pub async fn fail_list_records(&self) {
        self.faults.write().await.list_records = true;
    }

    pub async fn fail_delete(&self, record_id: u64) {
        self.faults.write().await.delete_ids.insert(record_id);
    }

    pub async fn fail_create_call(&self, nth: usize) {
        self.faults.write().await.create_call = Some(nth);
    }

    fn injected(operation: &str) -> ZoneError {
        ZoneError::Transport {
            operation: operation.to_string(),
            status: Some(500),
            detail: "injected failure".to_string(),
        }
    }
}

#[async_trait]
impl RecordApi for FakeLinode {
    async fn list_domains(&self) -> Result<Vec<LinodeDomain>> {
        let mut state = self.state.write().await;
        state.calls.push(Call::ListDomains);
        Ok(state.domains.clone())
    }

    async fn find_domains(&self, domain: &str) -> Result<Vec<LinodeDomain>> {
        let mut state = self.state.write().await;
        state.calls.push(Call::FindDomains(domain.to_string()));
        Ok(state
            .domains
            .iter()
            .filter(|d| d.domain == domain)
            .cloned()
            .collect())
    }

    async fn list_records(&self, domain_id: u64) -> Result<Vec<LinodeDomainRecord>> {
        let mut state = self.state.write().await;
        state.calls.push(Call::ListRecords(domain_id));
        if self.faults.read().await.list_records {
            return Err(Self::injected("list records"));
        }
        Ok(state
            .records
            .iter()
            .filter(|(d, _)| *d == domain_id)
            .map(|(_, r)| r.clone())
            .collect())
    }

    async fn create_record(
        &self,
        domain_id: u64,
        spec: &LinodeRecordCreate,
    ) -> Result<LinodeDomainRecord> {
        let mut state = self.state.write().await;
        state.calls.push(Call::Create(domain_id, spec.clone()));
        state.creates += 1;
        if self.faults.read().await.create_call == Some(state.creates) {
            return Err(Self::injected("create record"));
        }

        state.next_id += 1;
        let name = if spec.record_type == LinodeRecordType::Srv {
            format!(
                "_{}._{}",
                spec.service.as_deref().unwrap_or_default(),
                spec.protocol.as_deref().unwrap_or_default()
            )
        } else {
            spec.name.clone()
        };
        let record = LinodeDomainRecord {
            id: state.next_id,
            record_type: spec.record_type.clone(),
            name,
            target: spec.target.clone(),
            ttl_sec: spec.ttl_sec,
            priority: spec.priority,
            weight: spec.weight,
            port: spec.port,
            service: spec.service.clone(),
            protocol: spec.protocol.clone(),
            tag: spec.tag.clone(),
        };
        state.records.push((domain_id, record.clone()));
        Ok(record)
    }

    async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        let mut state = self.state.write().await;
        state.calls.push(Call::Delete(domain_id, record_id));
        if self.faults.read().await.delete_ids.contains(&record_id) {
            return Err(Self::injected("delete record"));
        }
        let before = state.records.len();
        state
            .records
            .retain(|(d, r)| !(*d == domain_id && r.id == record_id));
        if state.records.len() == before {
            return Err(ZoneError::Transport {
                operation: "delete record".to_string(),
                status: Some(404),
                detail: "Not found".to_string(),
            });
        }
        Ok(())
    }
}

/// Provider over a fake account holding one empty zone, plus that zone's ID.
pub async fn fake_zone(zone: &str) -> (ZoneProvider<FakeLinode>, u64) {
    let fake = FakeLinode::new();
    let domain_id = fake.add_domain(zone).await;
    (ZoneProvider::new(fake), domain_id)
}

// ============ Record builders ============

/// Linode record with every kind-specific field absent; the ID is assigned on seeding.
pub fn raw(
    record_type: LinodeRecordType,
    name: &str,
    target: &str,
    ttl_sec: i64,
) -> LinodeDomainRecord {
    LinodeDomainRecord {
        id: 0,
        record_type,
        name: name.to_string(),
        target: target.to_string(),
        ttl_sec,
        priority: None,
        weight: None,
        port: None,
        service: None,
        protocol: None,
        tag: None,
    }
}

pub fn a(name: &str, ip: &str, ttl_secs: u64) -> Record {
    Record::new(
        name,
        Duration::from_secs(ttl_secs),
        RecordData::Address {
            ip: ip.parse().unwrap_or_else(|e| panic!("bad test address {ip}: {e}")),
        },
    )
}

pub fn txt(name: &str, text: &str, ttl_secs: u64) -> Record {
    Record::new(
        name,
        Duration::from_secs(ttl_secs),
        RecordData::Txt {
            text: text.to_string(),
        },
    )
}

// ============ Live tests ============

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: ZoneProvider<dns_zone_linode::LinodeClient>,
    pub domain: String,
}

impl TestContext {
    /// 创建 Linode 测试上下文
    pub fn linode() -> Option<Self> {
        let domain = env::var("TEST_DOMAIN").ok()?;
        let config = LinodeConfig::from_env().ok()?;
        let provider = ZoneProvider::linode(config).ok()?;
        Some(Self { provider, domain })
    }
}
