//! The mutable state behind the menu view.

use std::sync::Arc;

use dioxus_logger::tracing::debug;

use crate::catalog::Catalog;
use crate::entry::MenuEntry;
use crate::favourites::FavouriteSet;
use crate::filter::MenuFilter;

/// Everything the menu view can change, plus the catalog it filters.
///
/// Only the action methods mutate anything. The renderer reads through the
/// accessors and [`MenuState::visible`], which hands out owned snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    catalog: Arc<Catalog>,
    favourites: FavouriteSet,
    filter: MenuFilter,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl MenuState {
    /// Fresh session state: no favourites, empty search, showing everything.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            favourites: FavouriteSet::new(),
            filter: MenuFilter::default(),
        }
    }

    // --- Actions ---

    /// Replaces the search term verbatim. No trimming is applied.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.filter.set_search_term(text);
        debug!("search term: {:?}", self.filter.search_term());
    }

    pub fn toggle_favourites_only(&mut self) {
        let on = self.filter.toggle_favourites_only();
        debug!("favourites only: {}", on);
    }

    /// Flips the favourite status of the entry called `name`.
    ///
    /// Names outside the catalog are ignored. Returns whether the favourite
    /// set changed. Sold-out entries toggle like any other; the item view is
    /// what withholds their button.
    pub fn toggle_favourite(&mut self, name: &str) -> bool {
        if self.catalog.get(name).is_none() {
            debug!("ignoring favourite toggle for unknown {:?}", name);
            return false;
        }
        let now_favourite = self.favourites.toggle(name);
        debug!("favourite {:?}: {}", name, now_favourite);
        true
    }

    // --- Read-only views ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_term(&self) -> &str {
        self.filter.search_term()
    }

    pub fn favourites_only(&self) -> bool {
        self.filter.favourites_only()
    }

    pub fn is_favourite(&self, name: &str) -> bool {
        self.favourites.contains(name)
    }

    pub fn favourites(&self) -> impl Iterator<Item = &str> {
        self.favourites.iter()
    }

    /// The entries that pass the current filter, in catalog order.
    pub fn visible(&self) -> Vec<MenuEntry> {
        self.catalog
            .iter()
            .filter(|entry| self.filter.admits(entry, &self.favourites))
            .cloned()
            .collect()
    }
}
