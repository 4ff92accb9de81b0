//! [`Selection`] definitions.

use super::{skip, Catalog, Skip};

/// Single-[`Skip`] selection of a catalog view.
///
/// Starts empty, transitions only by explicit re-selection and never
/// auto-clears, even when the selected ID is absent from the [`Catalog`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selection(Option<skip::Id>);

impl Selection {
    /// Creates a new empty [`Selection`].
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Selects the [`Skip`] with the provided [`skip::Id`], replacing any
    /// previous choice.
    pub fn select(&mut self, id: skip::Id) {
        self.0 = Some(id);
    }

    /// Returns the [`skip::Id`] held by this [`Selection`], if any.
    #[must_use]
    pub const fn id(&self) -> Option<skip::Id> {
        self.0
    }

    /// Resolves this [`Selection`] against the provided [`Catalog`].
    ///
    /// Returns [`None`] when nothing is selected or the selected
    /// [`skip::Id`] has no match in the [`Catalog`].
    #[must_use]
    pub fn resolve<'c>(&self, catalog: &'c Catalog) -> Option<&'c Skip> {
        self.0.and_then(|id| catalog.find(id))
    }
}
