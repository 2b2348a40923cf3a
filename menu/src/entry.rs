use serde::Deserialize;
use serde::Serialize;

use crate::price::Price;

/// Directory under which the host serves the pizza photos.
pub const IMAGE_DIR: &str = "/pizzas";

/// A single item on the menu.
///
/// Entries are only ever constructed when the catalog is built and are never
/// mutated afterwards. The `name` doubles as the entry's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    name: String,
    description: String,
    price: Price,
    image_ref: String,
    sold_out: bool,
}

impl MenuEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        image_ref: impl Into<String>,
        sold_out: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            image_ref: image_ref.into(),
            sold_out,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// The bare image file name, e.g. `focaccia.jpg`.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// The path the image is served from, e.g. `/pizzas/focaccia.jpg`.
    pub fn image_path(&self) -> String {
        format!("{}/{}", IMAGE_DIR, self.image_ref)
    }

    pub fn is_sold_out(&self) -> bool {
        self.sold_out
    }

    /// Case-insensitive substring match of `term` against the entry name.
    /// An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}
