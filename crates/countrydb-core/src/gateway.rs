// crates/countrydb-core/src/gateway.rs

//! # Resolving Data Gateway
//!
//! Unifies the remote source and the local snapshot behind one read
//! interface. Remote first; any remote failure falls back to the snapshot.
//! Only a snapshot failure propagates, since no tier remains below it.

use log::warn;

use crate::error::Result;
use crate::model::Country;
use crate::source::{LocalSnapshot, RemoteSource};

/// A detail-view record: one country plus its resolved border countries.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryDetail {
    pub country: Country,
    pub borders: Vec<Country>,
}

/// The orchestrator over both data tiers.
///
/// Stateless apart from its two sources: no caching of remote data, no
/// persisted state. Calls share no mutable data, so any number may be in
/// flight concurrently.
#[derive(Debug)]
pub struct CountryGateway {
    remote: RemoteSource,
    snapshot: LocalSnapshot,
}

impl CountryGateway {
    /// Gateway over the public service and the bundled snapshot.
    pub fn new() -> Self {
        Self::with_sources(RemoteSource::new(), LocalSnapshot::new())
    }

    /// Gateway over explicit sources. Used by tests and by consumers that
    /// point the remote tier elsewhere.
    pub fn with_sources(remote: RemoteSource, snapshot: LocalSnapshot) -> Self {
        Self { remote, snapshot }
    }

    /// Every known country.
    ///
    /// Attempts the remote source first; on any remote failure returns the
    /// snapshot's full contents instead. The result is always homogeneous —
    /// one tier, never a merge.
    pub async fn list_all(&self) -> Result<Vec<Country>> {
        match self.remote.fetch_all().await {
            Ok(countries) => Ok(countries),
            Err(err) => {
                warn!("remote list failed, serving bundled snapshot: {err}");
                Ok(self.snapshot.load()?)
            }
        }
    }

    /// A single country by 3-letter code, or `None` if neither tier has it.
    ///
    /// Not-found is a result, not an error: the caller decides presentation.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Country>> {
        match self.remote.fetch_by_code(code).await {
            Ok(country) => Ok(Some(country)),
            Err(err) => {
                warn!("remote lookup for {code:?} failed, scanning snapshot: {err}");
                Ok(self.snapshot.find_by_code(code)?)
            }
        }
    }

    /// Resolve a country's border codes into full records.
    ///
    /// Returns immediately with an empty vec — no fetch — when the country
    /// has no borders. Otherwise the subset of [`Self::list_all`] whose code
    /// appears in the border list, in the source collection's order. Codes
    /// with no match are silently omitted; partial resolution is expected.
    pub async fn resolve_borders(&self, country: &Country) -> Result<Vec<Country>> {
        if country.borders.is_empty() {
            return Ok(Vec::new());
        }
        let all = self.list_all().await?;
        Ok(all
            .into_iter()
            .filter(|candidate| {
                country
                    .borders
                    .iter()
                    .any(|code| code.eq_ignore_ascii_case(&candidate.code))
            })
            .collect())
    }

    /// The detail-view composite: the record, then its borders.
    ///
    /// The record fetch fully resolves before border resolution begins — a
    /// sequential dependency, not parallel fetches.
    pub async fn load_detail(&self, code: &str) -> Result<Option<CountryDetail>> {
        let Some(country) = self.get_by_code(code).await? else {
            return Ok(None);
        };
        let borders = self.resolve_borders(&country).await?;
        Ok(Some(CountryDetail { country, borders }))
    }
}

impl Default for CountryGateway {
    fn default() -> Self {
        Self::new()
    }
}
