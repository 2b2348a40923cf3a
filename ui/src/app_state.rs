use menu::Clock;
use menu::ShopConfig;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub config: ShopConfig,
    pub clock: Clock,
}

/// Read-only, page-wide settings provided as a Dioxus context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: ShopConfig, clock: Clock) -> Self {
        Self(Arc::new(AppStateData { config, clock }))
    }

    /// Whether the shop is open at the clock's current hour.
    pub fn is_open(&self) -> bool {
        self.config.hours.is_open(self.clock.current_hour())
    }
}
