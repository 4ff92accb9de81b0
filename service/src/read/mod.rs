//! Read entities definitions.

pub mod skip;

pub use self::skip::{Card, Labels};
