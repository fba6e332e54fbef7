//! Workshop Store

use std::collections::BTreeMap;

use crate::models::{Workshop, WorkshopInput, WorkshopType};

#[derive(Debug, Default)]
pub struct WorkshopStore {
    workshops: BTreeMap<u64, Workshop>,
    next_id: u64,
}

impl WorkshopStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, input: WorkshopInput) -> Workshop {
        self.next_id += 1;
        let workshop = Workshop {
            id: self.next_id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            date: input.date,
            image: input.image,
            kind: input.kind,
            category: input.category,
            meta: input.meta,
            gallery_images: input.gallery_images,
            is_active: input.is_active.unwrap_or(true),
            display_order: input.display_order,
        };
        self.workshops.insert(workshop.id, workshop.clone());
        workshop
    }

    /// Whether a workshop with this title is already stored.
    pub fn contains(&self, title: &str) -> bool {
        self.workshops.values().any(|w| w.title == title.trim())
    }

    /// Active workshops sorted by date then display order, optionally of one type.
    pub fn list(&self, kind: Option<WorkshopType>) -> Vec<Workshop> {
        let mut workshops: Vec<Workshop> = self
            .workshops
            .values()
            .filter(|w| w.is_active && kind.map_or(true, |k| w.kind == k))
            .cloned()
            .collect();
        workshops.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.display_order.cmp(&b.display_order))
        });
        workshops
    }

    /// The first `limit` active workshops by date.
    pub fn active_by_date(&self, limit: usize) -> Vec<Workshop> {
        let mut workshops = self.list(None);
        workshops.truncate(limit);
        workshops
    }

    pub fn len(&self) -> usize {
        self.workshops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workshops.is_empty()
    }
}
