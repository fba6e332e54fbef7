//! Menu item documents

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cold,
    Hot,
    ManualBrew,
    ShakesTea,
    Food,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cold => "cold",
            Category::Hot => "hot",
            Category::ManualBrew => "manual-brew",
            Category::ShakesTea => "shakes-tea",
            Category::Food => "food",
        }
    }
}

/// Menu sub-category within a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubCategory {
    RobustaColdNonMilk,
    RobustaColdMilk,
    RobustaHotNonMilk,
    RobustaHotMilk,
    BlendColdNonMilk,
    BlendColdMilk,
    BlendHotNonMilk,
    BlendHotMilk,
    ColdBrew,
    PourOver,
    Shakes,
    ColdTea,
    SnacksSides,
    BagelsCroissants,
}

impl SubCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubCategory::RobustaColdNonMilk => "robusta-cold-non-milk",
            SubCategory::RobustaColdMilk => "robusta-cold-milk",
            SubCategory::RobustaHotNonMilk => "robusta-hot-non-milk",
            SubCategory::RobustaHotMilk => "robusta-hot-milk",
            SubCategory::BlendColdNonMilk => "blend-cold-non-milk",
            SubCategory::BlendColdMilk => "blend-cold-milk",
            SubCategory::BlendHotNonMilk => "blend-hot-non-milk",
            SubCategory::BlendHotMilk => "blend-hot-milk",
            SubCategory::ColdBrew => "cold-brew",
            SubCategory::PourOver => "pour-over",
            SubCategory::Shakes => "shakes",
            SubCategory::ColdTea => "cold-tea",
            SubCategory::SnacksSides => "snacks-sides",
            SubCategory::BagelsCroissants => "bagels-croissants",
        }
    }
}

/// Customer review attached to a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub customer: String,
    /// 1 to 5
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// A stored menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub sub_category: SubCategory,
    pub image: String,
    pub is_available: bool,
    pub display_order: i32,
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a menu item, used for create, update and seeding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub sub_category: SubCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl MenuItemInput {
    /// Returns an error message if the input cannot be stored.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name is required".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        if let Some(review) = self.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
            return Some(format!(
                "Review rating {} is outside 1-5",
                review.rating
            ));
        }
        None
    }
}

/// Available items grouped by category, then sub-category.
///
/// Keys order the same way as the stored category strings.
pub type GroupedMenu = BTreeMap<String, BTreeMap<String, Vec<MenuItem>>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn input(price: f64) -> MenuItemInput {
        MenuItemInput {
            name: "Robusta Iced Latte".to_string(),
            description: String::new(),
            price,
            category: Category::Cold,
            sub_category: SubCategory::RobustaColdMilk,
            image: String::new(),
            is_available: None,
            display_order: 0,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_category_serde_names() {
        assert_eq!(
            serde_json::to_string(&Category::ManualBrew).unwrap(),
            "\"manual-brew\""
        );
        assert_eq!(
            serde_json::to_string(&SubCategory::RobustaColdNonMilk).unwrap(),
            format!("\"{}\"", SubCategory::RobustaColdNonMilk.as_str())
        );
        let parsed: SubCategory = serde_json::from_str("\"bagels-croissants\"").unwrap();
        assert_eq!(parsed, SubCategory::BagelsCroissants);
    }

    #[test]
    fn test_input_deserialize_camel_case() {
        let json = r#"{"name":"Cold Brew","price":180,"category":"manual-brew","subCategory":"cold-brew","displayOrder":2}"#;
        let item: MenuItemInput = serde_json::from_str(json).unwrap();
        assert_eq!(item.sub_category, SubCategory::ColdBrew);
        assert_eq!(item.display_order, 2);
        assert!(item.is_available.is_none());
    }

    #[test]
    fn test_validate_price() {
        assert!(input(200.0).validate().is_none());
        assert!(input(-1.0).validate().is_some());
        assert!(input(f64::NAN).validate().is_some());
    }

    #[test]
    fn test_validate_review_rating() {
        let mut item = input(120.0);
        item.reviews.push(Review {
            customer: "Asha".to_string(),
            rating: 6,
            comment: "great".to_string(),
            date: Utc::now(),
        });
        assert!(item.validate().unwrap().contains("outside 1-5"));
    }
}
