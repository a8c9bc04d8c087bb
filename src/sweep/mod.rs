//! Parameter sweeps: repeated, independent re-pricing over swept inputs
//!
//! Every point derives a fresh [`OptionContract`](crate::domain::OptionContract)
//! from the template, so points can be priced in parallel without sharing state.

pub mod heatmap;
pub mod range;
pub mod strike;

pub use heatmap::{pnl_heatmap, pnl_heatmaps, HeatmapConfig, PriceGrid};
pub use range::ParameterRange;
pub use strike::{strike_sweep, StrikeSeries, StrikeSweepConfig};
