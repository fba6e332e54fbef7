//! Drink recommendations.
//!
//! Drinks are embedded as `[category, temperature, milk_based, price, level]`
//! with each text column label-encoded (index into its sorted distinct
//! values). Similarity between drinks is the cosine of those vectors and is
//! computed once when the recommender is built.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use super::dataset::{Dataset, Drink};
use crate::error::{Result, SiteError};

/// How many similar drinks and upsells are returned.
const SUGGESTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub selected_drink: String,
    pub price: i64,
    pub similar_drinks: Vec<String>,
    pub premium_upsell: Vec<String>,
    pub food_pairings: Vec<String>,
}

/// Maps each value of a column to its rank among the column's distinct values.
fn label_encode<'a>(values: impl Iterator<Item = &'a str> + Clone) -> Vec<f64> {
    let distinct: Vec<&str> = values.clone().collect::<BTreeSet<_>>().into_iter().collect();
    values
        .map(|v| distinct.binary_search(&v).unwrap_or(0) as f64)
        .collect()
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

fn features(drinks: &[Drink]) -> Vec<[f64; 5]> {
    let category = label_encode(drinks.iter().map(|d| d.category.as_str()));
    let temperature = label_encode(drinks.iter().map(|d| d.temperature.as_str()));
    let milk = label_encode(drinks.iter().map(|d| d.milk_based.as_str()));
    let level = label_encode(drinks.iter().map(|d| d.level.as_str()));

    drinks
        .iter()
        .enumerate()
        .map(|(i, d)| [category[i], temperature[i], milk[i], d.price, level[i]])
        .collect()
}

#[derive(Debug, Clone)]
pub struct Recommender {
    dataset: Dataset,
    similarity: Vec<Vec<f64>>,
}

impl Recommender {
    pub fn new(dataset: Dataset) -> Self {
        let vectors = features(&dataset.drinks);
        let similarity = vectors
            .iter()
            .map(|a| vectors.iter().map(|b| cosine(a, b)).collect())
            .collect();

        Self {
            dataset,
            similarity,
        }
    }

    pub fn drink_count(&self) -> usize {
        self.dataset.drinks.len()
    }

    pub fn recommend(&self, drink_name: &str) -> Result<Recommendation> {
        let (index, selected) = self
            .dataset
            .drinks
            .iter()
            .enumerate()
            .find(|(_, d)| d.name == drink_name)
            .ok_or_else(|| SiteError::NotFound("Drink not found".to_string()))?;

        Ok(Recommendation {
            selected_drink: selected.name.clone(),
            price: selected.price as i64,
            similar_drinks: self.similar(index),
            premium_upsell: self.premium(selected),
            food_pairings: self.pairings(selected),
        })
    }

    fn similar(&self, index: usize) -> Vec<String> {
        let mut ranked: Vec<(usize, f64)> = self.similarity[index]
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        ranked
            .into_iter()
            .take(SUGGESTIONS)
            .map(|(i, _)| self.dataset.drinks[i].name.clone())
            .collect()
    }

    fn premium(&self, selected: &Drink) -> Vec<String> {
        let mut pricier: Vec<&Drink> = self
            .dataset
            .drinks
            .iter()
            .filter(|d| {
                d.price > selected.price
                    && d.milk_based == selected.milk_based
                    && d.temperature == selected.temperature
            })
            .collect();
        // stable, so equal prices keep file order
        pricier.sort_by(|a, b| a.price.total_cmp(&b.price));

        pricier
            .into_iter()
            .take(SUGGESTIONS)
            .map(|d| d.name.clone())
            .collect()
    }

    fn pairings(&self, selected: &Drink) -> Vec<String> {
        let names: HashSet<&str> = self
            .dataset
            .pairings
            .iter()
            .filter(|r| r.drink_category == selected.category || r.drink_category == selected.level)
            .map(|r| r.food_name.as_str())
            .collect();

        self.dataset
            .foods
            .iter()
            .filter(|f| names.contains(f.name.as_str()))
            .map(|f| f.name.clone())
            .collect()
    }
}
