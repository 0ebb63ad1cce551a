use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCap {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUse {
    High,
    Medium,
    Low,
}

impl PriceTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTrend::Rising => "rising",
            PriceTrend::Stable => "stable",
            PriceTrend::Falling => "falling",
        }
    }

    /// Higher is better; used for column sorting.
    pub fn rank(&self) -> u8 {
        match self {
            PriceTrend::Rising => 2,
            PriceTrend::Stable => 1,
            PriceTrend::Falling => 0,
        }
    }
}

impl MarketCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCap::High => "high",
            MarketCap::Medium => "medium",
            MarketCap::Low => "low",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            MarketCap::High => 2,
            MarketCap::Medium => 1,
            MarketCap::Low => 0,
        }
    }
}

impl EnergyUse {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyUse::High => "high",
            EnergyUse::Medium => "medium",
            EnergyUse::Low => "low",
        }
    }

    /// Lower energy use ranks higher.
    pub fn rank(&self) -> u8 {
        match self {
            EnergyUse::Low => 2,
            EnergyUse::Medium => 1,
            EnergyUse::High => 0,
        }
    }
}

impl fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MarketCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EnergyUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub price_trend: PriceTrend,
    pub market_cap: MarketCap,
    pub energy_use: EnergyUse,
    pub sustainability_score: f64,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        price_trend: PriceTrend,
        market_cap: MarketCap,
        energy_use: EnergyUse,
        sustainability_score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            price_trend,
            market_cap,
            energy_use,
            sustainability_score,
        }
    }

    pub fn is_rising(&self) -> bool {
        self.price_trend == PriceTrend::Rising
    }

    /// Sustainability on the 0-10 scale shown to users, e.g. `3.0/10`.
    pub fn score_out_of_ten(&self) -> String {
        format!("{:.1}/10", self.sustainability_score * 10.0)
    }
}
