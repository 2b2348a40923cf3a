use crate::entry::MenuEntry;
use crate::favourites::FavouriteSet;

/// The visitor's search text and favourites-only switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    search_term: String,
    favourites_only: bool,
}

impl MenuFilter {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn favourites_only(&self) -> bool {
        self.favourites_only
    }

    /// Stores the search text exactly as typed.
    pub(crate) fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub(crate) fn toggle_favourites_only(&mut self) -> bool {
        self.favourites_only = !self.favourites_only;
        self.favourites_only
    }

    /// Whether `entry` belongs in the visible list under this filter.
    pub fn admits(&self, entry: &MenuEntry, favourites: &FavouriteSet) -> bool {
        entry.matches_search(&self.search_term)
            && (!self.favourites_only || favourites.contains(entry.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn margherita() -> MenuEntry {
        MenuEntry::new("Pizza Margherita", "", Price::dollars(10), "m.jpg", false)
    }

    #[test]
    fn default_admits_everything() {
        let filter = MenuFilter::default();
        assert_eq!(filter.search_term(), "");
        assert!(!filter.favourites_only());
        assert!(filter.admits(&margherita(), &FavouriteSet::new()));
    }

    #[test]
    fn favourites_only_requires_membership() {
        let mut filter = MenuFilter::default();
        filter.toggle_favourites_only();

        let mut favourites = FavouriteSet::new();
        assert!(!filter.admits(&margherita(), &favourites));
        favourites.toggle("Pizza Margherita");
        assert!(filter.admits(&margherita(), &favourites));
    }

    #[test]
    fn search_and_favourites_combine() {
        let mut filter = MenuFilter::default();
        filter.toggle_favourites_only();
        filter.set_search_term("funghi");

        let mut favourites = FavouriteSet::new();
        favourites.toggle("Pizza Margherita");
        assert!(!filter.admits(&margherita(), &favourites));
    }
}
