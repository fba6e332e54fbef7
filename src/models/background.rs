//! Background image documents
//!
//! Each site section shows at most one active background image.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Site sections that can carry a background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SitePage {
    Menu,
    Home,
    About,
    Gallery,
    Philosophy,
    Workshops,
    Franchise,
}

impl SitePage {
    pub const ALL: [SitePage; 7] = [
        SitePage::Menu,
        SitePage::Home,
        SitePage::About,
        SitePage::Gallery,
        SitePage::Philosophy,
        SitePage::Workshops,
        SitePage::Franchise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SitePage::Menu => "menu",
            SitePage::Home => "home",
            SitePage::About => "about",
            SitePage::Gallery => "gallery",
            SitePage::Philosophy => "philosophy",
            SitePage::Workshops => "workshops",
            SitePage::Franchise => "franchise",
        }
    }
}

impl fmt::Display for SitePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SitePage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SitePage::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| format!("Unknown page '{}'", s))
    }
}

/// A stored background image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    pub id: u64,
    /// Unique display name
    pub name: String,
    pub description: String,
    /// Path of the file on disk
    pub image_path: String,
    /// Public URL of the image
    pub image_url: String,
    pub page: SitePage,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a background image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBackgroundImage {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image_path: String,
    pub image_url: String,
    pub page: SitePage,
    #[serde(default)]
    pub is_active: bool,
}

impl NewBackgroundImage {
    /// Returns an error message if a required field is blank.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name is required".to_string());
        }
        if self.image_path.trim().is_empty() {
            return Some("Image path is required".to_string());
        }
        if self.image_url.trim().is_empty() {
            return Some("Image URL is required".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_round_trips_through_str() {
        for page in SitePage::ALL {
            assert_eq!(page.as_str().parse::<SitePage>().unwrap(), page);
        }
        assert!("kitchen".parse::<SitePage>().is_err());
    }

    #[test]
    fn test_new_background_deserialize_defaults() {
        let json = r#"{"name":"hero","imagePath":"public/bg.jpg","imageUrl":"/bg.jpg","page":"home"}"#;
        let req: NewBackgroundImage = serde_json::from_str(json).unwrap();
        assert_eq!(req.page, SitePage::Home);
        assert!(!req.is_active);
        assert_eq!(req.description, "");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_unknown_page_rejected() {
        let json = r#"{"name":"x","imagePath":"p","imageUrl":"u","page":"kitchen"}"#;
        assert!(serde_json::from_str::<NewBackgroundImage>(json).is_err());
    }

    #[test]
    fn test_validate_blank_name() {
        let req = NewBackgroundImage {
            name: "  ".to_string(),
            description: String::new(),
            image_path: "p".to_string(),
            image_url: "u".to_string(),
            page: SitePage::Menu,
            is_active: false,
        };
        assert_eq!(req.validate().as_deref(), Some("Name is required"));
    }
}
