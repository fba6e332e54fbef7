//! CSV datasets for the recommender.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const DRINKS_FILE: &str = "drinks.csv";
pub const FOOD_FILE: &str = "food.csv";
pub const PAIRING_FILE: &str = "pairing.csv";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Drink {
    pub name: String,
    pub category: String,
    pub temperature: String,
    pub milk_based: String,
    pub price: f64,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub price: f64,
}

/// A drink category or level that goes well with a food.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PairingRule {
    pub drink_category: String,
    pub food_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub drinks: Vec<Drink>,
    pub foods: Vec<FoodItem>,
    pub pairings: Vec<PairingRule>,
}

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}

fn read_file<T: DeserializeOwned>(dir: &Path, name: &str) -> anyhow::Result<Vec<T>> {
    let path = dir.join(name);
    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    read_records(file).with_context(|| format!("parsing {}", path.display()))
}

impl Dataset {
    /// Loads the three CSV files from `dir`.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            drinks: read_file(dir, DRINKS_FILE)?,
            foods: read_file(dir, FOOD_FILE)?,
            pairings: read_file(dir, PAIRING_FILE)?,
        })
    }

    pub fn from_readers<D: Read, F: Read, P: Read>(
        drinks: D,
        foods: F,
        pairings: P,
    ) -> Result<Self, csv::Error> {
        Ok(Self {
            drinks: read_records(drinks)?,
            foods: read_records(foods)?,
            pairings: read_records(pairings)?,
        })
    }
}
