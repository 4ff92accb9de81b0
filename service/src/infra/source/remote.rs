//! Remote HTTP catalog [`Source`] implementation.

use common::{
    operations::{By, Select},
    Handler, Percent,
};
use derive_more::{Display, Error as StdError, From};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracerr::Traced;

#[cfg(doc)]
use crate::infra::Source;
use crate::{
    domain::{catalog::Location, Catalog, Skip},
    infra::source,
};

/// Remote HTTP catalog [`Source`] client.
#[derive(Clone, Debug)]
pub struct Remote {
    /// HTTP client performing the requests.
    http: reqwest::Client,

    /// Base URL of the catalog endpoint.
    endpoint: String,
}

impl Remote {
    /// Creates a new [`Remote`] client querying the provided catalog
    /// endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Handler<Select<By<Catalog, Location>>> for Remote {
    type Ok = Catalog;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Catalog, Location>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Location { postcode, area } = by.into_inner();

        let response = self
            .http
            .get(format!("{}/by-location", self.endpoint))
            .query(&[
                ("postcode", AsRef::<str>::as_ref(&postcode)),
                ("area", area.as_ref()),
            ])
            .send()
            .await
            .map_err(|e| tracerr::new!(source::Error::from(Error::Http(e))))?;

        let status = response.status();
        if !status.is_success() {
            return Err(tracerr::new!(source::Error::from(Error::BadStatus(
                status.as_u16(),
            ))));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| tracerr::new!(source::Error::from(Error::Http(e))))?;
        let records: Vec<SkipRecord> = serde_json::from_slice(&body)
            .map_err(|e| {
                tracerr::new!(source::Error::from(Error::Malformed(e)))
            })?;

        records
            .into_iter()
            .map(|r| {
                Skip::try_from(r).map_err(|e| {
                    tracerr::new!(source::Error::from(Error::InvalidRecord(e)))
                })
            })
            .collect()
    }
}

/// [`Remote`] catalog [`Source`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to perform the HTTP request.
    #[display("HTTP request failed: {_0}")]
    Http(reqwest::Error),

    /// Endpoint responded with a non-success HTTP status.
    #[display("unexpected HTTP status: {_0}")]
    #[from(ignore)]
    BadStatus(#[error(not(source))] u16),

    /// Response body is not a valid catalog.
    #[display("malformed catalog response: {_0}")]
    Malformed(serde_json::Error),

    /// Response record violates the catalog data contract.
    #[display("invalid catalog record: {_0}")]
    InvalidRecord(InvalidRecord),
}

/// Violation of the catalog data contract by a single record.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum InvalidRecord {
    /// `size` is zero, negative, or out of range.
    #[display("non-positive `size`")]
    NonPositiveSize,

    /// `hire_period_days` is zero, negative, or out of range.
    #[display("non-positive `hire_period_days`")]
    NonPositiveHirePeriod,

    /// `price_before_vat` is negative.
    #[display("negative `price_before_vat`")]
    NegativePrice,

    /// `vat` is negative or not a finite number.
    #[display("invalid `vat`")]
    InvalidVat,
}

/// Catalog record in the endpoint's wire format.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SkipRecord {
    /// Stable identifier of the record.
    pub id: i64,

    /// Container size in cubic yards.
    pub size: i64,

    /// Rental duration in days.
    pub hire_period_days: i64,

    /// Pre-tax price in minor currency units.
    pub price_before_vat: i64,

    /// VAT rate in percent.
    pub vat: f64,

    /// Road-placement permission.
    pub allowed_on_road: bool,

    /// Heavy-material permission.
    pub allows_heavy_waste: bool,

    /// Upstream availability flag.
    pub forbidden: bool,
}

impl TryFrom<SkipRecord> for Skip {
    type Error = InvalidRecord;

    fn try_from(record: SkipRecord) -> Result<Self, Self::Error> {
        let size = u32::try_from(record.size)
            .ok()
            .filter(|s| *s > 0)
            .ok_or(InvalidRecord::NonPositiveSize)?;
        let hire_period = u32::try_from(record.hire_period_days)
            .ok()
            .filter(|d| *d > 0)
            .ok_or(InvalidRecord::NonPositiveHirePeriod)?;
        if record.price_before_vat < 0 {
            return Err(InvalidRecord::NegativePrice);
        }
        let vat = Decimal::try_from(record.vat)
            .ok()
            .and_then(Percent::new)
            .ok_or(InvalidRecord::InvalidVat)?;

        Ok(Self {
            id: record.id.into(),
            size: size.into(),
            hire_period: hire_period.into(),
            net_price: record.price_before_vat.into(),
            vat,
            allowed_on_road: record.allowed_on_road.into(),
            allows_heavy_waste: record.allows_heavy_waste.into(),
            forbidden: record.forbidden.into(),
        })
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::{Category, Skip};

    use super::{InvalidRecord, SkipRecord};

    fn record() -> SkipRecord {
        SkipRecord {
            id: 17934,
            size: 6,
            hire_period_days: 14,
            price_before_vat: 30500,
            vat: 20.0,
            allowed_on_road: true,
            allows_heavy_waste: true,
            forbidden: false,
        }
    }

    #[test]
    fn record_converts_into_domain_skip() {
        let skip = Skip::try_from(record()).unwrap();
        assert_eq!(i64::from(skip.id), 17934);
        assert_eq!(skip.category(), Category::Small);
        assert_eq!(skip.final_price().to_fixed(), "366.00");
    }

    #[test]
    fn contract_violations_are_rejected() {
        assert_eq!(
            Skip::try_from(SkipRecord { size: 0, ..record() }),
            Err(InvalidRecord::NonPositiveSize),
        );
        assert_eq!(
            Skip::try_from(SkipRecord { size: -4, ..record() }),
            Err(InvalidRecord::NonPositiveSize),
        );
        assert_eq!(
            Skip::try_from(SkipRecord {
                hire_period_days: 0,
                ..record()
            }),
            Err(InvalidRecord::NonPositiveHirePeriod),
        );
        assert_eq!(
            Skip::try_from(SkipRecord {
                price_before_vat: -1,
                ..record()
            }),
            Err(InvalidRecord::NegativePrice),
        );
        assert_eq!(
            Skip::try_from(SkipRecord { vat: -20.0, ..record() }),
            Err(InvalidRecord::InvalidVat),
        );
        assert_eq!(
            Skip::try_from(SkipRecord {
                vat: f64::NAN,
                ..record()
            }),
            Err(InvalidRecord::InvalidVat),
        );
    }

    #[test]
    fn wire_format_matches_endpoint_field_names() {
        let records: Vec<SkipRecord> = serde_json::from_str(
            r#"[{
                "id": 17933,
                "size": 4,
                "hire_period_days": 14,
                "price_before_vat": 27800,
                "vat": 20,
                "allowed_on_road": true,
                "allows_heavy_waste": true,
                "forbidden": false
            }]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 17933);
        assert_eq!(records[0].price_before_vat, 27800);
    }
}
