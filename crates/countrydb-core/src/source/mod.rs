// crates/countrydb-core/src/source/mod.rs

//! # Data Sources
//!
//! The two tiers behind the gateway: the remote REST service and the
//! bundled offline snapshot. Both normalize into the same domain model;
//! neither schema is assumed identical to the other.

mod remote;
mod snapshot;

pub use remote::{RemoteSource, DEFAULT_BASE_URL};
pub use snapshot::LocalSnapshot;
