use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ZoneError;
use crate::utils::names::ROOT;

// ============ Zone ============

/// A DNS zone managed as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone name without trailing dot (e.g. `"example.com"`).
    pub name: String,
}

// ============ Record Type ============

/// Record kinds of the generic model.
///
/// `Https` and `Svcb` are service-binding kinds. They exist in the generic model
/// but Linode has no counterpart for them, so creating one fails with
/// [`ZoneError::UnsupportedKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
    /// Certificate Authority Authorization record.
    Caa,
    /// HTTPS service binding.
    Https,
    /// Generic service binding.
    Svcb,
}

impl RecordType {
    /// Uppercase wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Caa => "CAA",
            Self::Https => "HTTPS",
            Self::Svcb => "SVCB",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "NS" => Ok(Self::Ns),
            "SRV" => Ok(Self::Srv),
            "TXT" => Ok(Self::Txt),
            "CAA" => Ok(Self::Caa),
            "HTTPS" => Ok(Self::Https),
            "SVCB" => Ok(Self::Svcb),
            _ => Err(ZoneError::UnknownType {
                record_type: s.to_string(),
            }),
        }
    }
}

// ============ Record ============

/// Kind-specific record content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecordData {
    /// A or AAAA, depending on the address family.
    Address {
        /// IPv4 or IPv6 address.
        ip: IpAddr,
    },
    /// Alias to another name.
    Cname {
        /// Target hostname.
        target: String,
    },
    /// Authoritative name server.
    Ns {
        /// Name server hostname.
        target: String,
    },
    /// Mail exchange.
    Mx {
        /// Preference (lower = preferred).
        preference: u16,
        /// Mail server hostname.
        target: String,
    },
    /// Arbitrary text.
    Txt {
        /// Text content.
        text: String,
    },
    /// Service locator.
    Srv {
        /// Service name without the leading underscore (e.g. `"sip"`).
        service: String,
        /// Transport without the leading underscore (e.g. `"tcp"`).
        transport: String,
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight among same-priority targets.
        weight: u16,
        /// Port number.
        port: u16,
        /// Target hostname.
        target: String,
    },
    /// Certificate Authority Authorization.
    Caa {
        /// Issuer critical flag. Linode always reports 0.
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, `"iodef"`).
        tag: String,
        /// CA domain or reporting URI.
        value: String,
    },
    /// HTTPS/SVCB service binding.
    ServiceBinding {
        /// `"https"` selects the HTTPS type, anything else SVCB.
        scheme: String,
        /// `SvcPriority`; 0 is alias mode.
        priority: u16,
        /// Target name.
        target: String,
        /// Presentation-format `SvcParams`.
        params: String,
    },
}

impl RecordData {
    /// Returns the [`RecordType`] of this content.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Address { ip: IpAddr::V4(_) } => RecordType::A,
            Self::Address { ip: IpAddr::V6(_) } => RecordType::Aaaa,
            Self::Cname { .. } => RecordType::Cname,
            Self::Ns { .. } => RecordType::Ns,
            Self::Mx { .. } => RecordType::Mx,
            Self::Txt { .. } => RecordType::Txt,
            Self::Srv { .. } => RecordType::Srv,
            Self::Caa { .. } => RecordType::Caa,
            Self::ServiceBinding { scheme, .. } if scheme == "https" => RecordType::Https,
            Self::ServiceBinding { .. } => RecordType::Svcb,
        }
    }

    /// Flattened presentation value, as used for matching and display.
    pub fn flatten(&self) -> String {
        match self {
            Self::Address { ip } => ip.to_string(),
            Self::Cname { target } | Self::Ns { target } => target.clone(),
            Self::Mx { preference, target } => format!("{preference} {target}"),
            Self::Txt { text } => text.clone(),
            Self::Srv {
                priority,
                weight,
                port,
                target,
                ..
            } => format!("{priority} {weight} {port} {target}"),
            Self::Caa { flags, tag, value } => format!("{flags} {tag} {value:?}"),
            Self::ServiceBinding {
                priority,
                target,
                params,
                ..
            } => format!("{priority} {target} {params}").trim_end().to_string(),
        }
    }
}

/// A provider-neutral resource record.
///
/// `name` is relative to the zone; the zone apex is [`ROOT`] (`"@"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Relative name, case-sensitive as stored.
    pub name: String,
    /// Time to live.
    pub ttl: Duration,
    /// Kind-specific content.
    pub data: RecordData,
}

impl Record {
    pub fn new(name: impl Into<String>, ttl: Duration, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    /// Record at the zone apex.
    pub fn apex(ttl: Duration, data: RecordData) -> Self {
        Self::new(ROOT, ttl, data)
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// Flattened `(name, type, ttl, data)` view of this record.
    pub fn rr(&self) -> ResourceRecord {
        ResourceRecord {
            name: self.name.clone(),
            record_type: Some(self.record_type()),
            ttl: self.ttl,
            data: self.data.flatten(),
        }
    }
}

// ============ Resource Record ============

/// Flattened record view; doubles as a delete query.
///
/// In delete queries the zero values act as wildcards: `record_type: None`,
/// `ttl: Duration::ZERO` and an empty `data`. `name` never wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: Option<RecordType>,
    pub ttl: Duration,
    pub data: String,
}

impl ResourceRecord {
    /// Query matching every record with this name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }
}

impl From<&Record> for ResourceRecord {
    fn from(record: &Record) -> Self {
        record.rr()
    }
}
