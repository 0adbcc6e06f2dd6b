use crate::types::errors::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

const DISPLAY_PLACES: usize = 2;

/// A non-negative currency value.
///
/// Values keep the precision they were parsed with and are always displayed
/// with two decimal places.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value.to_string()));
        }

        Ok(Amount(value.abs()))
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp_with_strategy(DISPLAY_PLACES as u32, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{:.width$}", rounded, width = DISPLAY_PLACES);

        // Honour width/alignment flags so amounts can sit in table columns.
        formatter.pad(&text)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        if !value.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return Err(AmountError::InvalidFormat(format!("Value [{value}] is not a decimal number")));
        }

        //NOTE: Ledgers written from floating point values use exponent forms such as 1.0E7 for large amounts
        let parsed = if value.contains(['e', 'E']) {
            Decimal::from_scientific(value)?
        } else {
            Decimal::from_str(value)?
        };

        Amount::try_from(parsed)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Scales beyond the display precision are written in full so a reload is exact.
        if self.0.scale() > DISPLAY_PLACES as u32 {
            serializer.collect_str(&self.0)
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Amount::from_str(&value).map_err(de::Error::custom)
    }
}
