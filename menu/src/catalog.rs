//! The fixed list of entries on the menu.

use std::sync::Arc;
use std::sync::LazyLock;

use itertools::Itertools;
use thiserror::Error;

use crate::entry::MenuEntry;
use crate::price::Price;

/// An authoring mistake found while building a [`Catalog`].
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("menu entry with an empty name")]
    EmptyName,
    /// Two entries share a name, which would make list identity and
    /// favourite toggling ambiguous.
    #[error("duplicate menu entry name: {0}")]
    DuplicateName(String),
    #[error("menu entry {0} has a zero price")]
    ZeroPrice(String),
    #[error("menu entry {0} has no image")]
    EmptyImage(String),
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered, validated, read-only list of [`MenuEntry`] values.
///
/// There is no way to add, remove or reorder entries once a catalog exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Vec<MenuEntry>);

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    // A literal in this file; failing here is an authoring bug.
    Arc::new(Catalog::new(builtin_entries()).expect("built-in catalog is invalid"))
});

impl Catalog {
    /// Validates `entries` and wraps them, keeping their order.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        for entry in &entries {
            if entry.name().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !entry.price().is_positive() {
                return Err(CatalogError::ZeroPrice(entry.name().to_string()));
            }
            if entry.image_ref().is_empty() {
                return Err(CatalogError::EmptyImage(entry.name().to_string()));
            }
        }
        if let Some(name) = entries.iter().map(MenuEntry::name).duplicates().next() {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }
        Ok(Self(entries))
    }

    /// Parses and validates a catalog from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<MenuEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The restaurant's own menu, built once per process and shared by
    /// every caller.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&MenuEntry> {
        self.0.iter().find(|entry| entry.name() == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn builtin_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(
            "Focaccia",
            "Bread with italian olive oil and rosemary",
            Price::dollars(6),
            "focaccia.jpg",
            false,
        ),
        MenuEntry::new(
            "Pizza Margherita",
            "Tomato and mozarella",
            Price::dollars(10),
            "margherita.jpg",
            false,
        ),
        MenuEntry::new(
            "Pizza Spinaci",
            "Tomato, mozarella, spinach, and ricotta cheese",
            Price::dollars(12),
            "spinaci.jpg",
            false,
        ),
        MenuEntry::new(
            "Pizza Funghi",
            "Tomato, mozarella, mushrooms, and onion",
            Price::dollars(12),
            "funghi.jpg",
            false,
        ),
        MenuEntry::new(
            "Pizza Salamino",
            "Tomato, mozarella, and pepperoni",
            Price::dollars(15),
            "salamino.jpg",
            true,
        ),
        MenuEntry::new(
            "Pizza Prosciutto",
            "Tomato, mozarella, ham, aragula, and burrata cheese",
            Price::dollars(18),
            "prosciutto.jpg",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, price: u32, image: &str) -> MenuEntry {
        MenuEntry::new(name, "", Price::dollars(price), image, false)
    }

    #[test]
    fn builtin_catalog_is_well_formed() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        for entry in catalog.iter() {
            assert!(entry.price().is_positive(), "{}", entry.name());
            assert!(!entry.image_ref().is_empty(), "{}", entry.name());
        }
    }

    #[test]
    fn builtin_catalog_keeps_authoring_order() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.iter().map(MenuEntry::name).collect();
        assert_eq!(
            names,
            [
                "Focaccia",
                "Pizza Margherita",
                "Pizza Spinaci",
                "Pizza Funghi",
                "Pizza Salamino",
                "Pizza Prosciutto",
            ]
        );
    }

    #[test]
    fn only_salamino_is_sold_out() {
        let catalog = Catalog::builtin();
        let sold_out: Vec<_> = catalog
            .iter()
            .filter(|e| e.is_sold_out())
            .map(MenuEntry::name)
            .collect();
        assert_eq!(sold_out, ["Pizza Salamino"]);
    }

    #[test]
    fn builtin_catalog_is_shared() {
        assert!(Arc::ptr_eq(&Catalog::builtin(), &Catalog::builtin()));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Catalog::new(vec![
            entry("Focaccia", 6, "a.jpg"),
            entry("Focaccia", 7, "b.jpg"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(n)) if n == "Focaccia"));
    }

    #[test]
    fn rejects_zero_price() {
        let result = Catalog::new(vec![entry("Free Pizza", 0, "free.jpg")]);
        assert!(matches!(result, Err(CatalogError::ZeroPrice(_))));
    }

    #[test]
    fn rejects_missing_image() {
        let result = Catalog::new(vec![entry("Ghost", 9, "")]);
        assert!(matches!(result, Err(CatalogError::EmptyImage(_))));
    }

    #[test]
    fn rejects_empty_name() {
        let result = Catalog::new(vec![entry("", 9, "x.jpg")]);
        assert!(matches!(result, Err(CatalogError::EmptyName)));
    }

    #[test]
    fn loads_from_json() {
        let json = r#"[
            {"name": "Calzone", "description": "Folded", "price": 14, "imageRef": "calzone.jpg", "soldOut": false},
            {"name": "Marinara", "description": "No cheese", "price": 8, "imageRef": "marinara.jpg", "soldOut": true}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let marinara = catalog.get("Marinara").unwrap();
        assert!(marinara.is_sold_out());
        assert_eq!(marinara.price(), Price::dollars(8));
    }

    #[test]
    fn json_is_validated_too() {
        let json = r#"[
            {"name": "Calzone", "description": "", "price": 14, "imageRef": "c.jpg", "soldOut": false},
            {"name": "Calzone", "description": "", "price": 15, "imageRef": "d.jpg", "soldOut": false}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateName(_))
        ));
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }
}
