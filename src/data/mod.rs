mod asset;
mod table;

pub use asset::{Asset, EnergyUse, MarketCap, PriceTrend};
pub use table::AssetTable;
