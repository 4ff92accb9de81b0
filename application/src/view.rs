//! Terminal view of the skip catalog page.

use std::io;

#[cfg(doc)]
use service::domain::Skip;
use service::{
    domain::{Catalog, CategoryFilter, Location, Selection},
    read::{skip::Labels, Card},
};

/// Filter choices rendered as category controls, in display order.
const FILTER_CHOICES: [CategoryFilter; 4] = [
    CategoryFilter::All,
    CategoryFilter::Only(service::domain::Category::Small),
    CategoryFilter::Only(service::domain::Category::Medium),
    CategoryFilter::Only(service::domain::Category::Large),
];

/// Terminal view rendering a [`Catalog`] as a page of cards.
#[derive(Clone, Copy, Debug)]
pub struct View {
    /// Naming scheme of the category labels.
    pub labels: Labels,
}

impl View {
    /// Renders the indicator shown while the catalog fetch is in flight.
    ///
    /// # Errors
    ///
    /// Errors if writing to the provided output fails.
    pub fn loading(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "Loading Skip Options...")
    }

    /// Renders the whole catalog page: header, filter controls, one card
    /// per [`Skip`] accepted by the filter, and the continue line gated on
    /// a resolvable [`Selection`].
    ///
    /// # Errors
    ///
    /// Errors if writing to the provided output fails.
    pub fn render(
        &self,
        out: &mut impl io::Write,
        location: &Location,
        catalog: &Catalog,
        filter: CategoryFilter,
        selection: Selection,
    ) -> io::Result<()> {
        writeln!(out, "WE WANT WASTE | {location}")?;
        writeln!(out, "\nChoose Your Skip Size")?;

        let controls = FILTER_CHOICES
            .into_iter()
            .map(|choice| {
                if choice == filter {
                    format!("[{}]", self.labels.name(choice))
                } else {
                    self.labels.name(choice).to_owned()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{controls}")?;
        writeln!(out, "{}\n", self.labels.description(filter))?;

        for skip in catalog.filter(filter) {
            Self::card(out, &Card::from(skip), selection.id() == Some(skip.id))?;
        }

        match selection.resolve(catalog) {
            Some(selected) => {
                let card = Card::from(selected);
                writeln!(
                    out,
                    "Selected: {} Yard Skip - {}",
                    selected.size, card.price,
                )?;
                writeln!(out, "Continue to Booking")
            }
            None => writeln!(out, "Please select a skip size to continue"),
        }
    }

    /// Renders a single catalog [`Card`].
    fn card(
        out: &mut impl io::Write,
        card: &Card,
        selected: bool,
    ) -> io::Result<()> {
        let marker = if selected { "  [SELECTED]" } else { "" };
        writeln!(out, "{}{marker}", card.heading)?;
        writeln!(out, "  {}", card.hire_period)?;
        writeln!(out, "  {} inc. VAT ({} + VAT)", card.price, card.net_price)?;
        writeln!(out, "  {} | {}", card.road_badge, card.heavy_waste_badge)?;
        writeln!(out, "  {}\n", card.image)
    }
}
