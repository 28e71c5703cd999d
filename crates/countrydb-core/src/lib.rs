// crates/countrydb-core/src/lib.rs

//! Country reference data access.
//!
//! A two-tier read layer over the public country dataset: a remote REST
//! source with automatic fallback to a snapshot bundled into the binary,
//! plus code lookups, border resolution and a pure filter engine. The
//! dataset is read-only reference data; nothing here mutates or persists.

pub mod error;
pub mod gateway;
pub mod model;
pub mod search;
pub mod source;
pub mod track;

// Re-exports
pub use crate::error::{CountryDbError, RemoteError, Result, SnapshotError};
pub use crate::gateway::{CountryDetail, CountryGateway};
pub use crate::model::{Country, CountryName, Currency, Flags, NativeName};
pub use crate::search::{filter_countries, matches, region_universe};
pub use crate::source::{LocalSnapshot, RemoteSource, DEFAULT_BASE_URL};
pub use crate::track::{FetchTag, RequestTracker};
