//! Linode API 类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// Linode 分页响应
#[cfg(feature = "linode")]
#[derive(Debug, Deserialize)]
pub struct LinodePage<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub pages: u32,
    #[allow(dead_code)]
    pub results: u32,
}

/// Linode 错误响应
#[cfg(feature = "linode")]
#[derive(Debug, Deserialize)]
pub struct LinodeErrorBody {
    #[serde(default)]
    pub errors: Vec<LinodeApiError>,
}

#[cfg(feature = "linode")]
#[derive(Debug, Deserialize)]
pub struct LinodeApiError {
    pub reason: String,
    #[serde(default)]
    pub field: Option<String>,
}

/// Linode Domain 结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinodeDomain {
    pub id: u64,
    pub domain: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub domain_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Record type tag as Linode reports it.
///
/// Tags outside the known set are kept verbatim in [`Other`](Self::Other) so the
/// translator can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinodeRecordType {
    A,
    Aaaa,
    Ns,
    Mx,
    Cname,
    Txt,
    Srv,
    Ptr,
    Caa,
    Other(String),
}

impl LinodeRecordType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ptr => "PTR",
            Self::Caa => "CAA",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for LinodeRecordType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "NS" => Self::Ns,
            "MX" => Self::Mx,
            "CNAME" => Self::Cname,
            "TXT" => Self::Txt,
            "SRV" => Self::Srv,
            "PTR" => Self::Ptr,
            "CAA" => Self::Caa,
            _ => Self::Other(tag),
        }
    }
}

impl From<LinodeRecordType> for String {
    fn from(record_type: LinodeRecordType) -> Self {
        match record_type {
            LinodeRecordType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LinodeRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Linode Domain Record 结构（响应）
///
/// Kind-specific fields are `None` when the API omits them or sends `null`;
/// `None` and `Some(0)` are different things to the translator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinodeDomainRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: LinodeRecordType,
    /// Relative name; the zone apex is `""`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub ttl_sec: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// 创建记录请求体
///
/// Never carries an ID; Linode assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinodeRecordCreate {
    #[serde(rename = "type")]
    pub record_type: LinodeRecordType,
    pub name: String,
    pub target: String,
    pub ttl_sec: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl LinodeRecordCreate {
    /// Request with the common fields set and every kind-specific field absent.
    pub fn new(
        record_type: LinodeRecordType,
        name: impl Into<String>,
        target: impl Into<String>,
        ttl_sec: i64,
    ) -> Self {
        Self {
            record_type,
            name: name.into(),
            target: target.into(),
            ttl_sec,
            priority: None,
            weight: None,
            port: None,
            service: None,
            protocol: None,
            tag: None,
        }
    }
}
