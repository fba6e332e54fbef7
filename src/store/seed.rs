//! Seed Loading
//!
//! Fills the stores from `menu-items.json` and `workshops.json` at startup.
//! Menu items already present (same name, category and sub-category) and
//! workshops with a known title are skipped.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::models::{MenuItemInput, WorkshopInput};
use crate::store::{MenuStore, WorkshopStore};

pub const MENU_SEED_FILE: &str = "menu-items.json";
pub const WORKSHOP_SEED_FILE: &str = "workshops.json";

/// Outcome of one seed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
    pub rejected: usize,
}

/// Reads a JSON array of documents from `path`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
}

pub fn seed_menu(store: &mut MenuStore, items: Vec<MenuItemInput>) -> SeedReport {
    let mut report = SeedReport::default();
    for item in items {
        if store.contains(&item.name, item.category, item.sub_category) {
            report.skipped += 1;
            continue;
        }
        let name = item.name.clone();
        match store.create(item) {
            Ok(_) => report.created += 1,
            Err(err) => {
                warn!(item = %name, error = %err, "Skipping invalid menu seed item");
                report.rejected += 1;
            }
        }
    }
    report
}

pub fn seed_workshops(store: &mut WorkshopStore, workshops: Vec<WorkshopInput>) -> SeedReport {
    let mut report = SeedReport::default();
    for workshop in workshops {
        if workshop.title.trim().is_empty() {
            report.rejected += 1;
        } else if store.contains(&workshop.title) {
            report.skipped += 1;
        } else {
            store.insert(workshop);
            report.created += 1;
        }
    }
    report
}

/// Seeds both stores from `dir`. Missing or unreadable files are logged and skipped.
pub fn seed_from_dir(dir: &Path, menu: &mut MenuStore, workshops: &mut WorkshopStore) {
    let menu_path = dir.join(MENU_SEED_FILE);
    if menu_path.exists() {
        match load_json::<MenuItemInput>(&menu_path) {
            Ok(items) => {
                let report = seed_menu(menu, items);
                info!(
                    created = report.created,
                    skipped = report.skipped,
                    rejected = report.rejected,
                    "Menu items seeded"
                );
            }
            Err(err) => warn!(error = ?err, "Menu seed failed"),
        }
    } else {
        warn!(path = %menu_path.display(), "Menu seed file not found");
    }

    let workshop_path = dir.join(WORKSHOP_SEED_FILE);
    if workshop_path.exists() {
        match load_json::<WorkshopInput>(&workshop_path) {
            Ok(items) => {
                let report = seed_workshops(workshops, items);
                info!(
                    created = report.created,
                    skipped = report.skipped,
                    rejected = report.rejected,
                    "Workshops seeded"
                );
            }
            Err(err) => warn!(error = ?err, "Workshop seed failed"),
        }
    } else {
        warn!(path = %workshop_path.display(), "Workshop seed file not found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU_JSON: &str = r#"[
        {"name": "Robusta Iced Latte", "price": 200, "category": "cold", "subCategory": "robusta-cold-milk"},
        {"name": "Robusta Iced Latte", "price": 200, "category": "cold", "subCategory": "robusta-cold-milk"},
        {"name": "Free Lunch", "price": -5, "category": "food", "subCategory": "snacks-sides"}
    ]"#;

    #[test]
    fn test_seed_menu_skips_duplicates_and_invalid() {
        let items: Vec<MenuItemInput> = serde_json::from_str(MENU_JSON).unwrap();
        let mut store = MenuStore::new();

        let report = seed_menu(&mut store, items.clone());
        assert_eq!(
            report,
            SeedReport {
                created: 1,
                skipped: 1,
                rejected: 1
            }
        );

        let again = seed_menu(&mut store, items);
        assert_eq!(again.created, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_seed_workshops_by_title() {
        let json = r#"[
            {"title": "Cupping 101", "date": "2026-11-10T10:00:00Z", "type": "upcoming"},
            {"title": "Cupping 101", "date": "2026-12-10T10:00:00Z", "type": "upcoming"}
        ]"#;
        let items: Vec<WorkshopInput> = serde_json::from_str(json).unwrap();
        let mut store = WorkshopStore::new();

        let report = seed_workshops(&mut store, items);
        assert_eq!(report.created, 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_load_json_missing_file() {
        let err = load_json::<MenuItemInput>(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("reading seed file"));
    }

    #[test]
    fn test_seed_from_dir_reads_files() {
        let dir = std::env::temp_dir().join(format!("rabuste-seed-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MENU_SEED_FILE), MENU_JSON).unwrap();

        let mut menu = MenuStore::new();
        let mut workshops = WorkshopStore::new();
        seed_from_dir(&dir, &mut menu, &mut workshops);

        assert_eq!(menu.len(), 1);
        assert!(workshops.is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }
}
