use anyhow::Context;
use itertools::Itertools;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::data::{Asset, EnergyUse, MarketCap, PriceTrend};

/// Reasons a table is rejected at construction time.
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("asset at position {0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate asset name: {0}")]
    DuplicateName(String),

    #[error("sustainability score for {name} must be within [0, 1], got {score}")]
    ScoreOutOfRange { name: String, score: f64 },
}

/// Read-only reference table, kept in insertion order.
#[derive(Clone, Debug)]
pub struct AssetTable {
    assets: Vec<Asset>,
}

impl AssetTable {
    pub fn new(assets: Vec<Asset>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for (i, asset) in assets.iter().enumerate() {
            if asset.name.trim().is_empty() {
                return Err(TableError::EmptyName(i));
            }
            if !seen.insert(asset.name.to_lowercase()) {
                return Err(TableError::DuplicateName(asset.name.clone()));
            }
            let score = asset.sustainability_score;
            if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                return Err(TableError::ScoreOutOfRange {
                    name: asset.name.clone(),
                    score,
                });
            }
        }
        Ok(Self { assets })
    }

    /// The five coins CryptoBuddy ships with.
    pub fn builtin() -> Self {
        Self {
            assets: vec![
                Asset::new("Bitcoin", PriceTrend::Rising, MarketCap::High, EnergyUse::High, 0.3),
                Asset::new("Ethereum", PriceTrend::Stable, MarketCap::High, EnergyUse::Medium, 0.6),
                Asset::new("Cardano", PriceTrend::Rising, MarketCap::Medium, EnergyUse::Low, 0.8),
                Asset::new("Solana", PriceTrend::Rising, MarketCap::Medium, EnergyUse::Low, 0.7),
                Asset::new("Polkadot", PriceTrend::Stable, MarketCap::Medium, EnergyUse::Low, 0.7),
            ],
        }
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let assets: Vec<Asset> = serde_json::from_str(json).context("malformed asset table")?;
        Ok(Self::new(assets)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read asset table {}", path.display()))?;
        let table = Self::from_json_str(&json)
            .with_context(|| format!("invalid asset table {}", path.display()))?;
        log::info!("Loaded {} assets from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.name.as_str()).collect()
    }

    /// Names joined for help messages, e.g. `Bitcoin, Ethereum`.
    pub fn joined_names(&self) -> String {
        self.assets.iter().map(|a| a.name.as_str()).join(", ")
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for AssetTable {
    fn default() -> Self {
        Self::builtin()
    }
}
