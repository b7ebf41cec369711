//! Utility modules.

/// Root sentinel handling and zone-relative names.
pub mod names;

/// Log sanitization utilities to keep large response bodies out of debug logs.
#[cfg(feature = "linode")]
pub mod log_sanitizer;
