//! Monetary amounts split into whole units and subunits.

use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use akmdocs_core::{DomainError, DomainResult, ValueObject};

/// Subunits per whole unit (fils per dirham).
pub const SUBUNITS_PER_UNIT: u8 = 100;

/// Positive amount rounded to two decimal places.
///
/// Rounding happens on the whole amount before it is split, so `19.999` becomes
/// `20.00` rather than `19` units and `100` subunits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonetaryAmount")]
pub struct MonetaryAmount {
    units: u64,
    subunits: u8,
}

impl ValueObject for MonetaryAmount {}

/// Unchecked wire form; validated through [`MonetaryAmount::new`].
#[derive(Deserialize)]
struct RawMonetaryAmount {
    units: u64,
    subunits: u8,
}

impl TryFrom<RawMonetaryAmount> for MonetaryAmount {
    type Error = DomainError;

    fn try_from(raw: RawMonetaryAmount) -> Result<Self, Self::Error> {
        MonetaryAmount::new(raw.units, raw.subunits)
    }
}

impl MonetaryAmount {
    pub fn new(units: u64, subunits: u8) -> DomainResult<Self> {
        if subunits >= SUBUNITS_PER_UNIT {
            return Err(DomainError::validation(format!(
                "subunits must be below {SUBUNITS_PER_UNIT}, got {subunits}"
            )));
        }
        Ok(Self { units, subunits })
    }

    pub fn units(&self) -> u64 {
        self.units
    }

    pub fn subunits(&self) -> u8 {
        self.subunits
    }

    /// Convert a floating point total.
    ///
    /// Returns `None` for zero, negative, NaN and infinite values. The float is read
    /// through its shortest decimal representation (`1.995`, not
    /// `1.99499999999999988…`) so half-way amounts round the way they were written.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let decimal = Decimal::from_str(&value.to_string()).ok()?;
        Self::from_decimal(decimal)
    }

    /// Convert an exact decimal total. Returns `None` when it is not positive or does
    /// not fit the unit range.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        if value <= Decimal::ZERO {
            return None;
        }

        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let whole = rounded.trunc();
        let units = whole.to_u64()?;
        let subunits = ((rounded - whole) * Decimal::ONE_HUNDRED).to_u8()?;
        Some(Self { units, subunits })
    }

    /// Parse the raw text of a total field. Accepts plain (`1250.5`) and scientific
    /// (`1.2505e3`) notation; anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let decimal = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()?;
        Self::from_decimal(decimal)
    }
}

impl core::fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.units, self.subunits)
    }
}
