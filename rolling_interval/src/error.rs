//! Error type shared by the rolling_interval crate.
//!
//! ```
//! use rolling_interval::{Error, Granularity, Instant, Kind};
//!
//! let err = Granularity::try_from(42_i64).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedGranularity(_)));
//!
//! let checkpoint = Instant::from_ymd_hms(2020, 1, 1, 0, 0, 0, Kind::Utc).unwrap();
//! let err = Error::CheckpointOutOfRange { granularity: Granularity::Year, checkpoint };
//! assert_eq!(
//!     err.to_string(),
//!     "Next Year checkpoint after 2020-01-01T00:00:00 (Utc) is out of range"
//! );
//! ```

use thiserror::Error;

use crate::{granularity::Granularity, instant::Instant};

/// The unified error type for the `rolling_interval` crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A granularity name or discriminant outside the catalog.
    #[error("Unsupported granularity: {0}")]
    UnsupportedGranularity(String),

    /// Advancing a checkpoint left the representable calendar range.
    #[error("Next {granularity} checkpoint after {checkpoint} is out of range")]
    CheckpointOutOfRange {
        /// Granularity whose bucket width was being added.
        granularity: Granularity,
        /// The current checkpoint that could not be advanced.
        checkpoint: Instant,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
