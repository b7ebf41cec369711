//! 域名名称处理
//!
//! The generic model writes the zone apex as `"@"`; Linode writes it as the
//! empty string. Conversions in both directions go through this module.

/// Zone apex in the generic model.
pub const ROOT: &str = "@";

/// Zone apex in Linode's record schema.
pub const LINODE_ROOT: &str = "";

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// Provider name -> generic name (`""` becomes `"@"`).
pub fn from_provider_name(name: &str) -> String {
    if name == LINODE_ROOT {
        ROOT.to_string()
    } else {
        name.to_string()
    }
}

/// Generic name -> provider name (`"@"` becomes `""`).
pub fn to_provider_name(name: &str) -> String {
    if name == ROOT {
        LINODE_ROOT.to_string()
    } else {
        name.to_string()
    }
}

/// 将名称转换为相对于 zone 的名称
///
/// Absolute names (trailing dot) are relativized; relative names pass through.
/// 如: "www.example.com." + "example.com" -> "www"
/// 如: "example.com." + "example.com." -> "@"
/// 如: "www" + "example.com" -> "www"
pub fn relative_name(name: &str, zone: &str) -> String {
    let Some(absolute) = name.strip_suffix('.') else {
        return name.to_string();
    };
    let zone = normalize_domain_name(zone);

    if absolute == zone {
        ROOT.to_string()
    } else if let Some(subdomain) = absolute
        .strip_suffix(zone)
        .and_then(|rest| rest.strip_suffix('.'))
    {
        subdomain.to_string()
    } else {
        // Not inside the zone; leave it for the provider to reject.
        name.to_string()
    }
}

/// Name in the form Linode expects when creating a record in `zone`.
pub fn provider_create_name(name: &str, zone: &str) -> String {
    to_provider_name(&relative_name(name, zone))
}
