//! [`Catalog`] definitions.

use std::{fmt, slice, str::FromStr, vec};

use derive_more::{AsRef, Display, From, Into};

use super::{skip, Category, Skip};

/// Immutable snapshot of the [`Skip`]s available at some [`Location`].
///
/// Keeps the order the catalog endpoint returned and is never mutated:
/// every view of it is derived by borrowing.
#[derive(Clone, Debug, Default, From)]
pub struct Catalog(Vec<Skip>);

impl Catalog {
    /// Returns an [`Iterator`] over all [`Skip`]s of this [`Catalog`] in
    /// snapshot order.
    pub fn iter(&self) -> slice::Iter<'_, Skip> {
        self.0.iter()
    }

    /// Returns the number of [`Skip`]s in this [`Catalog`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether this [`Catalog`] contains no [`Skip`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the [`Skip`]s accepted by the provided [`CategoryFilter`] in
    /// snapshot order.
    ///
    /// [`CategoryFilter::All`] yields the whole snapshot unchanged.
    pub fn filter(
        &self,
        filter: CategoryFilter,
    ) -> impl Iterator<Item = &Skip> {
        self.iter().filter(move |s| filter.accepts(s.category()))
    }

    /// Returns the first [`Skip`] with the provided [`skip::Id`], if any.
    #[must_use]
    pub fn find(&self, id: skip::Id) -> Option<&Skip> {
        self.iter().find(|s| s.id == id)
    }

    /// Returns this [`Catalog`] without the [`Skip`]s marked as forbidden
    /// upstream, keeping the order of the remaining ones.
    #[must_use]
    pub fn without_forbidden(self) -> Self {
        self.into_iter().filter(|s| !*s.forbidden).collect()
    }
}

impl FromIterator<Skip> for Catalog {
    fn from_iter<T: IntoIterator<Item = Skip>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Catalog {
    type Item = Skip;
    type IntoIter = vec::IntoIter<Skip>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'c> IntoIterator for &'c Catalog {
    type Item = &'c Skip;
    type IntoIter = slice::Iter<'c, Skip>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`Category`] narrowing of a [`Catalog`] view.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CategoryFilter {
    /// No narrowing: every [`Skip`] is accepted.
    #[default]
    All,

    /// Only [`Skip`]s of the single provided [`Category`] are accepted.
    Only(Category),
}

impl CategoryFilter {
    /// Indicates whether a [`Skip`] of the provided [`Category`] passes this
    /// [`CategoryFilter`].
    #[must_use]
    pub fn accepts(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(Category::Small) => write!(f, "small"),
            Self::Only(Category::Medium) => write!(f, "medium"),
            Self::Only(Category::Large) => write!(f, "large"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.to_ascii_uppercase()
            .parse::<Category>()
            .map(Self::Only)
            .map_err(|_| "unknown category")
    }
}

/// Location a [`Catalog`] snapshot is scoped to.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{postcode} - {area}")]
pub struct Location {
    /// [`Postcode`] of this [`Location`].
    pub postcode: Postcode,

    /// [`Area`] name of this [`Location`].
    pub area: Area,
}

/// Postcode of a [`Location`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str)]
pub struct Postcode(String);

/// Area name of a [`Location`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str)]
pub struct Area(String);

#[cfg(test)]
mod spec {
    use common::Percent;

    use super::{skip, Catalog, Category, CategoryFilter, Skip};

    fn skip(id: i64, size: u32) -> Skip {
        Skip {
            id: skip::Id::from(id),
            size: size.into(),
            hire_period: 14.into(),
            net_price: 27500.into(),
            vat: "20".parse::<Percent>().unwrap(),
            allowed_on_road: false.into(),
            allows_heavy_waste: true.into(),
            forbidden: false.into(),
        }
    }

    fn catalog() -> Catalog {
        [skip(11, 8), skip(12, 12), skip(13, 20)]
            .into_iter()
            .collect()
    }

    fn ids<'c>(skips: impl Iterator<Item = &'c Skip>) -> Vec<i64> {
        skips.map(|s| s.id.into()).collect()
    }

    #[test]
    fn filter_all_is_identity() {
        assert_eq!(ids(catalog().filter(CategoryFilter::All)), [11, 12, 13]);
    }

    #[test]
    fn filter_keeps_only_matching_category() {
        assert_eq!(
            ids(catalog().filter(CategoryFilter::Only(Category::Medium))),
            [12],
        );
        assert_eq!(
            ids(catalog().filter(CategoryFilter::Only(Category::Small))),
            [11],
        );
    }

    #[test]
    fn filter_preserves_order() {
        let snapshot: Catalog =
            [skip(1, 4), skip(2, 20), skip(3, 6), skip(4, 8)]
                .into_iter()
                .collect();
        assert_eq!(
            ids(snapshot.filter(CategoryFilter::Only(Category::Small))),
            [1, 3, 4],
        );
    }

    #[test]
    fn find_returns_first_match_or_nothing() {
        let snapshot = catalog();
        assert_eq!(
            snapshot.find(skip::Id::from(12)).map(|s| u32::from(s.size)),
            Some(12),
        );
        assert!(snapshot.find(skip::Id::from(99)).is_none());
        assert!(Catalog::default().find(skip::Id::from(12)).is_none());
    }

    #[test]
    fn without_forbidden_drops_flagged_skips() {
        let snapshot: Catalog = [
            skip(1, 4),
            Skip {
                forbidden: true.into(),
                ..skip(2, 12)
            },
            skip(3, 20),
        ]
        .into_iter()
        .collect();
        assert_eq!(ids(snapshot.without_forbidden().iter()), [1, 3]);
    }

    #[test]
    fn category_filter_parses_case_insensitively() {
        assert_eq!("all".parse(), Ok(CategoryFilter::All));
        assert_eq!(
            "medium".parse(),
            Ok(CategoryFilter::Only(Category::Medium)),
        );
        assert_eq!("LARGE".parse(), Ok(CategoryFilter::Only(Category::Large)));
        assert!("huge".parse::<CategoryFilter>().is_err());
    }
}
