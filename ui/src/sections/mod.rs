// The three stacked parts of the page, top to bottom.

pub mod footer;
pub mod header;
pub mod pizza_menu;
