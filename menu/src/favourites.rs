use std::collections::BTreeSet;

/// The names of the entries a visitor has marked as favourite.
///
/// Lives only as long as the page session. Mutation is restricted to this
/// crate so that [`MenuState`](crate::MenuState) can guarantee every name
/// belongs to its catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavouriteSet(BTreeSet<String>);

impl FavouriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Removes `name` if present, inserts it otherwise. Returns whether the
    /// name is a favourite afterwards.
    pub(crate) fn toggle(&mut self, name: &str) -> bool {
        if self.0.remove(name) {
            false
        } else {
            self.0.insert(name.to_string());
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the favourite names in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_inserts_then_removes() {
        let mut favourites = FavouriteSet::new();
        assert!(favourites.toggle("Pizza Funghi"));
        assert!(favourites.contains("Pizza Funghi"));
        assert!(!favourites.toggle("Pizza Funghi"));
        assert!(favourites.is_empty());
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut favourites = FavouriteSet::new();
        favourites.toggle("Focaccia");
        assert!(!favourites.contains("focaccia"));
    }
}
