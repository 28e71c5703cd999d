// crates/countrydb-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CountryDbError>;

/// Failure of the remote tier.
///
/// Every variant is recoverable: the gateway answers any of them by falling
/// back to the bundled snapshot, so none of these reach a gateway caller.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The body could not be decoded into the expected shape.
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The by-code endpoint answered with an empty collection.
    /// For that endpoint an empty reply is a failure, not a result.
    #[error("no record for code {0:?}")]
    NoMatch(String),
}

/// Failure of the snapshot tier. Fatal: no further fallback exists.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot decompression failed: {0}")]
    Gzip(#[from] std::io::Error),

    #[error("snapshot payload invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error type.
///
/// Gateway operations only ever propagate the `Snapshot` variant; `Remote`
/// is surfaced when the remote source is used directly, bypassing fallback.
#[derive(Debug, Error)]
pub enum CountryDbError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
