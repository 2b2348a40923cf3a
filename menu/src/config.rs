//! Shop-wide settings shown on the page.

use dioxus_logger::tracing::warn;

use crate::hours::OpeningHours;

/// Fixed text and hours for the shop.
///
/// # Build-time overrides
/// A browser has no process environment, so overrides are baked in when the
/// crate is compiled:
/// - `PIZZA_OPEN_HOUR`: first hour (0-23) the shop is open. Defaults to 10.
/// - `PIZZA_CLOSE_HOUR`: hour (1-24) the shop closes. Defaults to 22.
///
/// An invalid override is logged and the default hours are used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub hours: OpeningHours,
}

impl ShopConfig {
    pub fn from_build_env() -> Self {
        let hours = match OpeningHours::from_overrides(
            option_env!("PIZZA_OPEN_HOUR"),
            option_env!("PIZZA_CLOSE_HOUR"),
        ) {
            Ok(hours) => hours,
            Err(e) => {
                warn!("ignoring opening hour override: {}", e);
                OpeningHours::default()
            }
        };

        Self::with_hours(hours)
    }

    pub fn with_hours(hours: OpeningHours) -> Self {
        Self {
            brand: "Aason's Pizza Co.",
            tagline: "Authentic Italian Cuisine",
            hours,
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_hours_keeps_brand_text() {
        let config = ShopConfig::with_hours(OpeningHours::new(9, 17).unwrap());
        assert_eq!(config.brand, "Aason's Pizza Co.");
        assert_eq!(config.tagline, "Authentic Italian Cuisine");
        assert!(config.hours.is_open(9));
        assert!(!config.hours.is_open(17));
    }

    #[test]
    fn build_env_always_yields_a_valid_window() {
        let hours = ShopConfig::from_build_env().hours;
        assert!(hours.open() < hours.close());
    }
}
