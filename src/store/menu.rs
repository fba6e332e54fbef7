//! Menu Store
//!
//! Holds menu items and answers the orderings the site needs.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::{Result, SiteError};
use crate::models::{Category, GroupedMenu, MenuItem, MenuItemInput, SubCategory};

#[derive(Debug, Default)]
pub struct MenuStore {
    items: BTreeMap<u64, MenuItem>,
    next_id: u64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Create ==
    pub fn create(&mut self, input: MenuItemInput) -> Result<MenuItem> {
        if let Some(error_msg) = input.validate() {
            return Err(SiteError::InvalidRequest(error_msg));
        }

        self.next_id += 1;
        let now = Utc::now();
        let item = MenuItem {
            id: self.next_id,
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            price: input.price,
            category: input.category,
            sub_category: input.sub_category,
            image: input.image,
            is_available: input.is_available.unwrap_or(true),
            display_order: input.display_order,
            reviews: input.reviews,
            created_at: now,
            updated_at: now,
        };

        self.items.insert(item.id, item.clone());
        Ok(item)
    }

    // == Update ==
    /// Replaces the writable fields of item `id`. Reviews are kept when the
    /// input carries none.
    pub fn update(&mut self, id: u64, input: MenuItemInput) -> Result<MenuItem> {
        if let Some(error_msg) = input.validate() {
            return Err(SiteError::InvalidRequest(error_msg));
        }

        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| SiteError::NotFound("Item not found".to_string()))?;

        item.name = input.name.trim().to_string();
        item.description = input.description.trim().to_string();
        item.price = input.price;
        item.category = input.category;
        item.sub_category = input.sub_category;
        item.image = input.image;
        if let Some(available) = input.is_available {
            item.is_available = available;
        }
        item.display_order = input.display_order;
        if !input.reviews.is_empty() {
            item.reviews = input.reviews;
        }
        item.updated_at = Utc::now();

        Ok(item.clone())
    }

    // == Delete ==
    pub fn delete(&mut self, id: u64) -> Result<MenuItem> {
        self.items
            .remove(&id)
            .ok_or_else(|| SiteError::NotFound("Item not found".to_string()))
    }

    pub fn get(&self, id: u64) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    /// Whether an item with this name already exists in the sub-category.
    pub fn contains(&self, name: &str, category: Category, sub_category: SubCategory) -> bool {
        self.items.values().any(|item| {
            item.name == name.trim() && item.category == category && item.sub_category == sub_category
        })
    }

    /// Every item, sorted by category then name.
    pub fn all(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self.items.values().cloned().collect();
        items.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        items
    }

    /// Available items, sorted by category, sub-category, then display order.
    pub fn available(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self
            .items
            .values()
            .filter(|item| item.is_available)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| a.sub_category.as_str().cmp(b.sub_category.as_str()))
                .then_with(|| a.display_order.cmp(&b.display_order))
        });
        items
    }

    /// Available items in display order only, as the chat prompt lists them.
    pub fn available_by_display_order(&self, limit: usize) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self
            .items
            .values()
            .filter(|item| item.is_available)
            .cloned()
            .collect();
        items.sort_by_key(|item| item.display_order);
        items.truncate(limit);
        items
    }

    /// Available items grouped by category, then sub-category.
    pub fn grouped(&self) -> GroupedMenu {
        let mut grouped = GroupedMenu::new();
        for item in self.available() {
            grouped
                .entry(item.category.as_str().to_string())
                .or_default()
                .entry(item.sub_category.as_str().to_string())
                .or_default()
                .push(item);
        }
        grouped
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
