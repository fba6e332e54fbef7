//! Background Image Store
//!
//! Every write goes through [`BackgroundImageStore::save`], which keeps at
//! most one active image per page.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use crate::error::{Result, SiteError};
use crate::models::{BackgroundImage, NewBackgroundImage, SitePage};

#[derive(Debug, Default)]
pub struct BackgroundImageStore {
    images: BTreeMap<u64, BackgroundImage>,
    next_id: u64,
}

impl BackgroundImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Create ==
    /// Creates a new image. Names are unique across all pages.
    pub fn create(&mut self, input: NewBackgroundImage) -> Result<BackgroundImage> {
        if let Some(error_msg) = input.validate() {
            return Err(SiteError::InvalidRequest(error_msg));
        }

        let now = Utc::now();
        let image = BackgroundImage {
            id: self.next_id + 1,
            name: input.name.trim().to_string(),
            description: input.description,
            image_path: input.image_path,
            image_url: input.image_url,
            page: input.page,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };

        let saved = self.save(image)?;
        self.next_id = saved.id;
        Ok(saved)
    }

    // == Save ==
    /// Inserts or replaces `image`.
    ///
    /// When the image is active, every other image of the same page is
    /// deactivated. `updated_at` is refreshed on every save.
    pub fn save(&mut self, mut image: BackgroundImage) -> Result<BackgroundImage> {
        if self
            .images
            .values()
            .any(|other| other.id != image.id && other.name == image.name)
        {
            return Err(SiteError::Conflict(format!(
                "Background image '{}' already exists",
                image.name
            )));
        }

        if image.is_active {
            for other in self.images.values_mut() {
                if other.id != image.id && other.page == image.page && other.is_active {
                    debug!(page = %image.page, deactivated = other.id, "Deactivating background");
                    other.is_active = false;
                }
            }
        }

        image.updated_at = Utc::now();
        self.next_id = self.next_id.max(image.id);
        self.images.insert(image.id, image.clone());
        Ok(image)
    }

    // == Set Active ==
    pub fn set_active(&mut self, id: u64, active: bool) -> Result<BackgroundImage> {
        let mut image = self
            .images
            .get(&id)
            .cloned()
            .ok_or_else(|| SiteError::NotFound(format!("Background image {} not found", id)))?;
        image.is_active = active;
        self.save(image)
    }

    // == Delete ==
    pub fn delete(&mut self, id: u64) -> Result<BackgroundImage> {
        self.images
            .remove(&id)
            .ok_or_else(|| SiteError::NotFound(format!("Background image {} not found", id)))
    }

    pub fn get(&self, id: u64) -> Option<&BackgroundImage> {
        self.images.get(&id)
    }

    /// Images in creation order, optionally restricted to one page.
    pub fn list(&self, page: Option<SitePage>) -> Vec<BackgroundImage> {
        self.images
            .values()
            .filter(|image| page.map_or(true, |p| image.page == p))
            .cloned()
            .collect()
    }

    pub fn active_for(&self, page: SitePage) -> Option<BackgroundImage> {
        self.images
            .values()
            .find(|image| image.page == page && image.is_active)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
