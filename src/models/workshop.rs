//! Workshop documents

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkshopType {
    Upcoming,
    Past,
}

impl WorkshopType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkshopType::Upcoming => "upcoming",
            WorkshopType::Past => "past",
        }
    }
}

impl FromStr for WorkshopType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(WorkshopType::Upcoming),
            "past" => Ok(WorkshopType::Past),
            other => Err(format!("Unknown workshop type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkshopMeta {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

/// A stored workshop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: WorkshopType,
    pub category: Option<String>,
    pub meta: WorkshopMeta,
    pub gallery_images: Vec<String>,
    pub is_active: bool,
    pub display_order: i32,
}

/// Workshop fields as found in seed files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "type")]
    pub kind: WorkshopType,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub meta: WorkshopMeta,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub display_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_deserialize() {
        let json = r#"{
            "title": "Latte Art Basics",
            "date": "2026-11-02T10:00:00Z",
            "type": "upcoming",
            "meta": {"tags": ["latte", "art"], "level": "beginner"}
        }"#;
        let input: WorkshopInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.kind, WorkshopType::Upcoming);
        assert_eq!(input.meta.tags.len(), 2);
        assert!(input.is_active.is_none());
        assert!(input.gallery_images.is_empty());
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("past".parse::<WorkshopType>().unwrap(), WorkshopType::Past);
        assert!("future".parse::<WorkshopType>().is_err());
    }
}
