//! Domain entities definitions.

pub mod catalog;
pub mod selection;
pub mod skip;

pub use self::{
    catalog::{Catalog, CategoryFilter, Location},
    selection::Selection,
    skip::{Category, Skip},
};
