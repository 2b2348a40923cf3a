//! Shared building blocks used by the page sections.
pub mod empty_state;
pub mod order;
pub mod pico;
pub mod pizza_item;
