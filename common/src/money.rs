//! [`Money`]-related definitions.

use std::fmt;

use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

use crate::{define_kind, Percent};

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] from an amount of minor [`Currency`] units
    /// (pence, cents).
    #[must_use]
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(minor, 2),
            currency,
        }
    }

    /// Returns this [`Money`] with the provided VAT rate applied as a markup.
    #[must_use]
    pub fn with_vat(self, vat: Percent) -> Self {
        Self {
            amount: self.amount * vat.markup(),
            currency: self.currency,
        }
    }

    /// Renders the amount of this [`Money`] with exactly two fractional
    /// digits, rounding half away from zero.
    #[must_use]
    pub fn to_fixed(&self) -> String {
        format!(
            "{:.2}",
            self.amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Pound Sterling."]
        Gbp = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

impl Currency {
    /// Returns the sign this [`Currency`] is prefixed with in price texts.
    #[must_use]
    pub const fn sign(self) -> &'static str {
        match self {
            Self::Gbp => "\u{a3}",
            Self::Usd => "$",
            Self::Eur => "\u{20ac}",
        }
    }
}
