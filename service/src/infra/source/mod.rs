//! Catalog [`Source`]-related implementations.

#[cfg(feature = "remote")]
pub mod remote;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "remote")]
pub use self::remote::Remote;

/// Catalog source operation.
pub use common::Handler as Source;

/// [`Source`] error.
///
/// Every variant is one and the same observable failure: the catalog could
/// not be fetched.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "remote")]
    /// [`Remote`] error.
    Remote(remote::Error),
}
