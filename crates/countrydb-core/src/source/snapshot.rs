// crates/countrydb-core/src/source/snapshot.rs

use std::io::Read;

use flate2::read::GzDecoder;
use once_cell::sync::OnceCell;

use crate::error::SnapshotError;
use crate::model::{self, CountriesRaw, Country};

/// The bundled dataset, gzip-compressed JSON in the same shape as the remote
/// list endpoint.
const SNAPSHOT_GZ: &[u8] = include_bytes!("../../data/countries.json.gz");

/// Offline copy of the country collection, embedded in the binary.
///
/// Requires no network or filesystem access. The artifact is decoded and
/// normalized once per instance; subsequent reads clone out of the parsed
/// collection. Decode failure is the one fatal condition in the crate — there
/// is no tier below this one.
#[derive(Debug)]
pub struct LocalSnapshot {
    bytes: &'static [u8],
    cell: OnceCell<Vec<Country>>,
}

impl LocalSnapshot {
    /// Snapshot backed by the dataset shipped with the crate.
    pub fn new() -> Self {
        Self::from_gzip_bytes(SNAPSHOT_GZ)
    }

    /// Snapshot backed by caller-provided gzipped JSON. Used by tests.
    pub fn from_gzip_bytes(bytes: &'static [u8]) -> Self {
        Self {
            bytes,
            cell: OnceCell::new(),
        }
    }

    /// The full snapshot contents, in artifact order.
    pub fn load(&self) -> Result<Vec<Country>, SnapshotError> {
        self.records().cloned()
    }

    /// Scan for a record by 3-letter code, case-insensitive.
    pub fn find_by_code(&self, code: &str) -> Result<Option<Country>, SnapshotError> {
        Ok(self
            .records()?
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned())
    }

    fn records(&self) -> Result<&Vec<Country>, SnapshotError> {
        self.cell.get_or_try_init(|| {
            let mut json = String::new();
            GzDecoder::new(self.bytes).read_to_string(&mut json)?;
            let raw: CountriesRaw = serde_json::from_str(&json)?;
            Ok(model::from_raw(raw))
        })
    }
}

impl Default for LocalSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
