//! Drink Recommender
//!
//! Suggests similar drinks, pricier upsells and food pairings from three
//! CSV files loaded at startup.

pub mod dataset;
mod engine;

pub use dataset::{Dataset, Drink, FoodItem, PairingRule};
pub use engine::{Recommendation, Recommender};
