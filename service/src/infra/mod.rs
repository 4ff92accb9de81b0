//! Infrastructure layer.

pub mod source;

pub use self::source::Source;
#[cfg(feature = "remote")]
pub use self::source::{remote, Remote};
