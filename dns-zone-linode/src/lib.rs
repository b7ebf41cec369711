//! # dns-zone-linode
//!
//! Zone record management for [Linode DNS](https://www.linode.com/docs/api/domains/)
//! behind a provider-neutral record model.
//!
//! Linode exposes a flat list of ID-addressed records with create and delete
//! calls but no "replace". This crate builds the three zone-editing semantics on
//! top of that:
//!
//! - **append**: create every record, skipping the ones Linode can't represent;
//! - **set**: replace each `(name, type)` group named in the input, leaving
//!   every other group alone;
//! - **delete**: remove records matched by name plus optional type/TTL/value,
//!   where unset query fields are wildcards.
//!
//! ## Feature Flags
//!
//! - **`linode`** *(default)*: Enable [`LinodeClient`], the REST implementation
//!   of [`RecordApi`]. Without it the translation and reconciliation logic can
//!   still drive any custom [`RecordApi`].
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use dns_zone_linode::{
//!     LinodeConfig, Record, RecordData, ResourceRecord, ZoneEditor, ZoneProvider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = ZoneProvider::linode(LinodeConfig::from_env()?)?;
//!
//!     // Replace every A record at the apex with a single one.
//!     let record = Record::apex(
//!         Duration::from_secs(300),
//!         RecordData::Address { ip: "192.0.2.3".parse()? },
//!     );
//!     provider.set_records("example.com", &[record]).await?;
//!
//!     // Delete everything named "old", whatever its type or value.
//!     let gone = provider
//!         .delete_records("example.com", &[ResourceRecord::named("old")])
//!         .await?;
//!     println!("deleted {} records", gone.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Reads and appends return [`Result<T, ZoneError>`](ZoneError). Set and delete
//! return [`MutationError`], which carries the first fatal error together with
//! the records already affected. Nothing is rolled back: a set that fails after
//! its deletions leaves those records deleted.
//!
//! ## Provider limitations
//!
//! - SRV owner names are derived by Linode from `service`/`protocol`; the
//!   generic name of an SRV record is not sent on creation.
//! - CAA flags are not supported by Linode and always read back as 0.
//! - PTR records cannot be represented and are skipped by set and delete.
//! - HTTPS/SVCB records cannot be created and are skipped by append.

mod config;
mod error;
#[cfg(feature = "linode")]
mod http_client;
mod linode;
mod provider;
mod traits;
mod types;
mod utils;

pub mod matcher;
pub mod reconcile;
pub mod translate;

// Re-export error types
pub use error::{MutationError, Result, ZoneError};

pub use config::LinodeConfig;
pub use provider::ZoneProvider;
pub use traits::{RecordApi, ZoneEditor};

pub use types::{Record, RecordData, RecordType, ResourceRecord, Zone};

pub use linode::types::{LinodeDomain, LinodeDomainRecord, LinodeRecordCreate, LinodeRecordType};

#[cfg(feature = "linode")]
pub use linode::LinodeClient;

pub use utils::names::{LINODE_ROOT, ROOT};
