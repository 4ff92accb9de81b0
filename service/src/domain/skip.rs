//! [`Skip`] definitions.

use common::{define_kind, money::Currency, Money, Percent};
use derive_more::{Deref, Display, From, FromStr, Into};

/// Waste skip offered for hire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Skip {
    /// ID of this [`Skip`].
    pub id: Id,

    /// [`Size`] of this [`Skip`].
    pub size: Size,

    /// [`HirePeriod`] of this [`Skip`].
    pub hire_period: HirePeriod,

    /// Pre-VAT [`NetPrice`] of hiring this [`Skip`].
    pub net_price: NetPrice,

    /// VAT rate applied on top of the [`NetPrice`].
    pub vat: Percent,

    /// Indicator whether this [`Skip`] may be placed on a road.
    pub allowed_on_road: AllowedOnRoad,

    /// Indicator whether this [`Skip`] accepts heavy materials.
    pub allows_heavy_waste: AllowsHeavyWaste,

    /// Indicator whether this [`Skip`] is marked as forbidden upstream.
    pub forbidden: Forbidden,
}

impl Skip {
    /// Returns the [`Category`] this [`Skip`] falls into, derived from its
    /// [`Size`].
    #[must_use]
    pub fn category(&self) -> Category {
        Category::of(self.size)
    }

    /// Returns the pre-VAT price of hiring this [`Skip`].
    #[must_use]
    pub fn net(&self) -> Money {
        Money::from_minor(self.net_price.into(), Currency::Gbp)
    }

    /// Returns the final VAT-inclusive price of hiring this [`Skip`].
    #[must_use]
    pub fn final_price(&self) -> Money {
        self.net().with_vat(self.vat)
    }
}

/// ID of a [`Skip`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, FromStr, Hash, Into, PartialEq,
)]
pub struct Id(i64);

/// Size of a [`Skip`] in cubic yards.
///
/// Always positive.
#[derive(Clone, Copy, Debug, Display, Eq, From, Into, Ord, PartialEq, PartialOrd)]
pub struct Size(u32);

/// Rental duration of a [`Skip`] in days.
///
/// Always positive.
#[derive(Clone, Copy, Debug, Display, Eq, From, Into, PartialEq)]
pub struct HirePeriod(u32);

/// Pre-VAT price of a [`Skip`] in minor currency units (pence).
///
/// Never negative.
#[derive(Clone, Copy, Debug, Display, Eq, From, Into, PartialEq)]
pub struct NetPrice(i64);

/// Indicator whether a [`Skip`] may be placed on a road.
#[derive(Clone, Copy, Debug, Deref, Eq, From, Hash, PartialEq)]
pub struct AllowedOnRoad(pub bool);

/// Indicator whether a [`Skip`] accepts heavy materials.
#[derive(Clone, Copy, Debug, Deref, Eq, From, Hash, PartialEq)]
pub struct AllowsHeavyWaste(pub bool);

/// Indicator whether a [`Skip`] is marked as forbidden upstream.
///
/// The upstream data carries this flag on every record, while the observed
/// display logic never consults it. Whether it hides a [`Skip`] is a
/// configuration concern, not a domain rule.
#[derive(Clone, Copy, Debug, Deref, Eq, From, Hash, PartialEq)]
pub struct Forbidden(pub bool);

define_kind! {
    #[doc = "Size category of a [`Skip`]."]
    enum Category {
        #[doc = "Up to 8 cubic yards."]
        Small = 1,

        #[doc = "9 to 16 cubic yards."]
        Medium = 2,

        #[doc = "Over 16 cubic yards."]
        Large = 3,
    }
}

impl Category {
    /// Derives the [`Category`] a [`Skip`] of the provided [`Size`] falls
    /// into.
    #[must_use]
    pub fn of(size: Size) -> Self {
        match u32::from(size) {
            0..=8 => Self::Small,
            9..=16 => Self::Medium,
            _ => Self::Large,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Percent;

    use super::{Category, Id, Size, Skip};

    fn skip(id: i64, size: u32, net_minor: i64, vat: &str) -> Skip {
        Skip {
            id: Id::from(id),
            size: Size::from(size),
            hire_period: 14.into(),
            net_price: net_minor.into(),
            vat: vat.parse::<Percent>().unwrap(),
            allowed_on_road: true.into(),
            allows_heavy_waste: false.into(),
            forbidden: false.into(),
        }
    }

    #[test]
    fn category_thresholds_are_exact() {
        assert_eq!(Category::of(Size::from(4)), Category::Small);
        assert_eq!(Category::of(Size::from(8)), Category::Small);
        assert_eq!(Category::of(Size::from(9)), Category::Medium);
        assert_eq!(Category::of(Size::from(16)), Category::Medium);
        assert_eq!(Category::of(Size::from(17)), Category::Large);
        assert_eq!(Category::of(Size::from(40)), Category::Large);
    }

    #[test]
    fn final_price_includes_vat() {
        assert_eq!(skip(1, 6, 10000, "20").final_price().to_fixed(), "120.00");
        assert_eq!(skip(2, 6, 0, "20").final_price().to_fixed(), "0.00");
        assert_eq!(skip(3, 6, 999, "0").final_price().to_fixed(), "9.99");
    }

    #[test]
    fn net_price_carries_no_vat() {
        assert_eq!(skip(1, 6, 27500, "20").net().to_fixed(), "275.00");
    }
}
