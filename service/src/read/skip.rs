//! [`Skip`]-related read definitions.

use crate::domain::{Category, CategoryFilter, Skip};

/// Display-ready projection of a single [`Skip`], shaped as one catalog
/// card.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Card {
    /// Card heading, e.g. `6 Cubic Yard Skip`.
    pub heading: String,

    /// Hire period line, e.g. `14 day hire period`.
    pub hire_period: String,

    /// Final VAT-inclusive price text, e.g. `£240.00`.
    pub price: String,

    /// Pre-VAT price text, e.g. `£200.00`.
    pub net_price: String,

    /// Road-placement capability badge.
    pub road_badge: &'static str,

    /// Heavy-materials capability badge.
    pub heavy_waste_badge: &'static str,

    /// Image asset rendered on this [`Card`].
    pub image: &'static str,

    /// [`Category`] the projected [`Skip`] falls into.
    pub category: Category,
}

impl From<&Skip> for Card {
    fn from(skip: &Skip) -> Self {
        let sign = skip.final_price().currency.sign();
        Self {
            heading: format!("{} Cubic Yard Skip", skip.size),
            hire_period: format!("{} day hire period", skip.hire_period),
            price: format!("{sign}{}", skip.final_price().to_fixed()),
            net_price: format!("{sign}{}", skip.net().to_fixed()),
            road_badge: if *skip.allowed_on_road {
                "Road placement available"
            } else {
                "Private property only"
            },
            heavy_waste_badge: if *skip.allows_heavy_waste {
                "Heavy materials accepted"
            } else {
                "Light waste only"
            },
            image: image(skip.category()),
            category: skip.category(),
        }
    }
}

/// Image asset of catalog cards in the provided [`Category`].
#[must_use]
pub fn image(category: Category) -> &'static str {
    match category {
        Category::Small => "/images/bin1.png",
        Category::Medium => "/images/bin2.png",
        Category::Large => "/images/bin3.png",
    }
}

/// Naming scheme of the [`Category`] labels shown by filter controls.
///
/// Both observed schemes share the single canonical set of [`Category`]
/// thresholds: a scheme only swaps label texts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Labels {
    /// Project-oriented labels (`Small Projects`, `Medium Projects`, ...).
    #[default]
    Projects,

    /// Sector-oriented labels (`Residential`, `Commercial`, `Industrial`).
    Sectors,
}

impl Labels {
    /// Label of the provided filter choice under this naming scheme.
    #[must_use]
    pub fn name(self, filter: CategoryFilter) -> &'static str {
        match (self, filter) {
            (_, CategoryFilter::All) => "All Sizes",
            (Self::Projects, CategoryFilter::Only(Category::Small)) => {
                "Small Projects"
            }
            (Self::Projects, CategoryFilter::Only(Category::Medium)) => {
                "Medium Projects"
            }
            (Self::Projects, CategoryFilter::Only(Category::Large)) => {
                "Large Projects"
            }
            (Self::Sectors, CategoryFilter::Only(Category::Small)) => {
                "Residential"
            }
            (Self::Sectors, CategoryFilter::Only(Category::Medium)) => {
                "Commercial"
            }
            (Self::Sectors, CategoryFilter::Only(Category::Large)) => {
                "Industrial"
            }
        }
    }

    /// Description line of the provided filter choice under this naming
    /// scheme.
    #[must_use]
    pub fn description(self, filter: CategoryFilter) -> &'static str {
        match (self, filter) {
            (_, CategoryFilter::All) => {
                "Find the perfect skip for any project"
            }
            (Self::Projects, CategoryFilter::Only(Category::Small)) => {
                "Perfect for home clearouts and garden waste"
            }
            (Self::Projects, CategoryFilter::Only(Category::Medium)) => {
                "Ideal for renovations and office clearouts"
            }
            (Self::Projects, CategoryFilter::Only(Category::Large)) => {
                "Best for construction and major clearouts"
            }
            (Self::Sectors, CategoryFilter::Only(Category::Small)) => {
                "Household waste and small-scale clearances"
            }
            (Self::Sectors, CategoryFilter::Only(Category::Medium)) => {
                "Shop fits, offices and trade waste"
            }
            (Self::Sectors, CategoryFilter::Only(Category::Large)) => {
                "Construction sites and bulk industrial waste"
            }
        }
    }
}
