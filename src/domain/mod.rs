//! Contract descriptions priced by the engine

pub mod option;

pub use option::{OptionContract, OptionType, DAYS_PER_YEAR};
