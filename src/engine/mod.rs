//! Recommendation queries over the asset table.
//!
//! Every query is a pure read. Orderings that sort use a stable sort so ties
//! keep table order.

use std::cmp::Ordering;
use std::fmt::Write;
use thiserror::Error;

use crate::config::{
    HIGH_CAP_WEIGHT, MEDIUM_CAP_WEIGHT, RISING_WEIGHT, SUSTAINABILITY_THRESHOLD,
    SUSTAINABILITY_WEIGHT,
};
use crate::data::{Asset, AssetTable, MarketCap};

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Sorry, I don't have data for {name}. Try: {known}")]
    NotFound { name: String, known: String },
}

#[derive(Clone, Debug)]
pub struct RecommendationEngine {
    table: AssetTable,
}

impl RecommendationEngine {
    pub fn new(table: AssetTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AssetTable {
        &self.table
    }

    /// Names of rising assets, in table order.
    pub fn rising(&self) -> Vec<&str> {
        self.table
            .iter()
            .filter(|a| a.is_rising())
            .map(|a| a.name.as_str())
            .collect()
    }

    /// Assets scoring at least `min_score`, best first.
    pub fn sustainable(&self, min_score: f64) -> Vec<(&str, f64)> {
        let mut picks: Vec<(&str, f64)> = self
            .table
            .iter()
            .filter(|a| a.sustainability_score >= min_score)
            .map(|a| (a.name.as_str(), a.sustainability_score))
            .collect();
        picks.sort_by(|a, b| descending(a.1, b.1));
        picks
    }

    pub fn profitable(&self) -> Vec<&str> {
        self.table
            .iter()
            .filter(|a| a.is_rising() && matches!(a.market_cap, MarketCap::High | MarketCap::Medium))
            .map(|a| a.name.as_str())
            .collect()
    }

    /// Every asset with its composite score, best first.
    pub fn balanced_ranking(&self) -> Vec<(&Asset, f64)> {
        let mut ranked: Vec<(&Asset, f64)> =
            self.table.iter().map(|a| (a, balanced_score(a))).collect();
        ranked.sort_by(|a, b| descending(a.1, b.1));
        ranked
    }

    /// Top of the balanced ranking, `None` for an empty table.
    pub fn recommend(&self) -> Option<&Asset> {
        self.balanced_ranking().first().map(|(asset, _)| *asset)
    }

    pub fn analyze(&self, name: &str) -> Result<String, EngineError> {
        let asset = self.table.get(name).ok_or_else(|| EngineError::NotFound {
            name: name.to_string(),
            known: self.table.joined_names(),
        })?;

        let mut analysis = String::new();
        let _ = writeln!(analysis, "\nAnalysis for {}:", asset.name);
        let _ = writeln!(analysis, "• Price Trend: {}", asset.price_trend.as_str().to_uppercase());
        let _ = writeln!(analysis, "• Market Cap: {}", asset.market_cap.as_str().to_uppercase());
        let _ = writeln!(analysis, "• Energy Use: {}", asset.energy_use.as_str().to_uppercase());
        let _ = writeln!(analysis, "• Sustainability Score: {}\n", asset.score_out_of_ten());

        if asset.sustainability_score >= SUSTAINABILITY_THRESHOLD {
            analysis.push_str("🌱 Excellent sustainability choice!\n");
        }
        if asset.is_rising() {
            analysis.push_str("+ : Currently trending upward!\n");
        }
        Ok(analysis)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(AssetTable::default())
    }
}

/// +3 rising, +2 high cap / +1 medium cap, plus three times sustainability.
pub fn balanced_score(asset: &Asset) -> f64 {
    let mut score = 0.0;
    if asset.is_rising() {
        score += RISING_WEIGHT;
    }
    score += match asset.market_cap {
        MarketCap::High => HIGH_CAP_WEIGHT,
        MarketCap::Medium => MEDIUM_CAP_WEIGHT,
        MarketCap::Low => 0.0,
    };
    score + asset.sustainability_score * SUSTAINABILITY_WEIGHT
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
