use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};

/// Exchange-assigned stock code, e.g. `600519`. Unique per stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct StockCode(String);

impl StockCode {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StockCode {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl From<String> for StockCode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Look-back window offered by the chart period selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, StrumDisplay)]
pub enum ChartPeriod {
    #[strum(serialize = "7D")]
    Week,
    #[default]
    #[strum(serialize = "30D")]
    Month,
    #[strum(serialize = "90D")]
    Quarter,
}

impl ChartPeriod {
    pub fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::iter().find(|period| period.days() == days)
    }
}

/// Decoders for numeric fields that the API sends either as JSON numbers or as
/// decimal strings (`"12.34"`).
pub mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    impl Raw {
        fn into_f64<E: Error>(self) -> Result<f64, E> {
            match self {
                Raw::Number(value) => Ok(value),
                Raw::Text(text) => text
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| E::custom(format!("invalid decimal {:?}: {}", text, e))),
            }
        }
    }

    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Raw::deserialize(deserializer)?.into_f64()
    }

    pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Raw>::deserialize(deserializer)?
            .map(Raw::into_f64)
            .transpose()
    }

    pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match optional_number(deserializer)? {
            Some(value) if value >= 0.0 && value.fract() == 0.0 => Ok(Some(value as u64)),
            Some(value) => Err(D::Error::custom(format!("invalid count {}", value))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_days_round_trip_through_lookup() {
        for period in ChartPeriod::iter() {
            assert_eq!(ChartPeriod::from_days(period.days()), Some(period));
        }
        assert_eq!(ChartPeriod::from_days(14), None);
        assert_eq!(ChartPeriod::default(), ChartPeriod::Month);
    }

    #[test]
    fn stock_code_is_trimmed() {
        assert_eq!(StockCode::from(" 000001 ").value(), "000001");
    }
}
