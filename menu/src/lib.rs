//! Domain model for the pizza menu: the catalog, visitor favourites,
//! search/filter state and the shop's opening hours.
//!
//! Nothing in here depends on the UI layer, so every rule can be tested
//! without a renderer.

pub mod catalog;
pub mod config;
pub mod entry;
pub mod favourites;
pub mod filter;
pub mod hours;
pub mod price;
pub mod state;

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use config::ShopConfig;
pub use entry::MenuEntry;
pub use favourites::FavouriteSet;
pub use filter::MenuFilter;
pub use hours::Clock;
pub use hours::HoursError;
pub use hours::OpeningHours;
pub use price::Price;
pub use state::MenuState;
