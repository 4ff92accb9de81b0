//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod infra;
pub mod read;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::domain::{catalog::Location, Catalog};
#[cfg(doc)]
use crate::domain::Skip;

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// [`Location`] catalog snapshots are scoped to.
    pub location: Location,

    /// Indicator whether [`Skip`]s marked as forbidden upstream are dropped
    /// from catalog snapshots.
    pub hide_forbidden: bool,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<S> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Catalog [`infra::Source`] of this [`Service`].
    source: S,
}

impl<S> Service<S> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches a fresh [`Catalog`] snapshot from the [`infra::Source`].
    ///
    /// This is the single fetch of a catalog page: any failure is logged
    /// and collapses into an empty [`Catalog`], with no retry and nothing
    /// selectable.
    pub async fn catalog(&self) -> Catalog
    where
        S: infra::Source<
            Select<By<Catalog, Location>>,
            Ok = Catalog,
            Err = Traced<infra::source::Error>,
        >,
    {
        let select = Select(By::new(self.config.location.clone()));
        match self.source.execute(select).await {
            Ok(catalog) if self.config.hide_forbidden => {
                catalog.without_forbidden()
            }
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("failed to fetch skip catalog: {e}");
                Catalog::default()
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Select},
        Handler, Percent,
    };
    use futures::executor;
    use tracerr::Traced;

    use crate::{
        domain::{catalog::Location, skip, Catalog, Selection, Skip},
        infra::source,
        Config, Service,
    };

    fn config(hide_forbidden: bool) -> Config {
        Config {
            location: Location {
                postcode: "NR32".to_owned().into(),
                area: "Lowestoft".to_owned().into(),
            },
            hide_forbidden,
        }
    }

    fn skip(id: i64, forbidden: bool) -> Skip {
        Skip {
            id: skip::Id::from(id),
            size: 6.into(),
            hire_period: 14.into(),
            net_price: 30500.into(),
            vat: "20".parse::<Percent>().unwrap(),
            allowed_on_road: true.into(),
            allows_heavy_waste: true.into(),
            forbidden: forbidden.into(),
        }
    }

    /// [`source::Source`] always failing, as a catalog endpoint answering
    /// HTTP 500 does.
    struct Failing;

    impl Handler<Select<By<Catalog, Location>>> for Failing {
        type Ok = Catalog;
        type Err = Traced<source::Error>;

        async fn execute(
            &self,
            _: Select<By<Catalog, Location>>,
        ) -> Result<Self::Ok, Self::Err> {
            Err(tracerr::new!(source::Error::Remote(
                source::remote::Error::BadStatus(500),
            )))
        }
    }

    /// [`source::Source`] answering with a fixed snapshot.
    struct Fixed(Vec<Skip>);

    impl Handler<Select<By<Catalog, Location>>> for Fixed {
        type Ok = Catalog;
        type Err = Traced<source::Error>;

        async fn execute(
            &self,
            _: Select<By<Catalog, Location>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.0.iter().copied().collect())
        }
    }

    #[test]
    fn failed_fetch_collapses_into_empty_catalog() {
        let service = Service::new(config(false), Failing);

        let catalog = executor::block_on(service.catalog());

        assert!(catalog.is_empty());

        // With an empty catalog nothing is selectable, whatever the ID.
        let mut selection = Selection::none();
        selection.select(skip::Id::from(17934));
        assert!(selection.resolve(&catalog).is_none());
    }

    #[test]
    fn successful_fetch_keeps_snapshot_order() {
        let service =
            Service::new(config(false), Fixed(vec![skip(2, false), skip(1, true)]));

        let catalog = executor::block_on(service.catalog());

        assert_eq!(
            catalog.iter().map(|s| i64::from(s.id)).collect::<Vec<_>>(),
            [2, 1],
        );
    }

    #[test]
    fn forbidden_skips_are_kept_by_default_and_hidden_on_demand() {
        let skips = vec![skip(1, false), skip(2, true), skip(3, false)];

        let kept = executor::block_on(
            Service::new(config(false), Fixed(skips.clone())).catalog(),
        );
        assert_eq!(kept.len(), 3);

        let hidden = executor::block_on(
            Service::new(config(true), Fixed(skips)).catalog(),
        );
        assert_eq!(
            hidden.iter().map(|s| i64::from(s.id)).collect::<Vec<_>>(),
            [1, 3],
        );
    }
}
