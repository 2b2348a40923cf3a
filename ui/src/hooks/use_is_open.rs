//=============================================================================
// File: src/hooks/use_is_open.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;

/// Reads the injected clock once per render and reports whether the shop is
/// open. Header and Footer both go through here so they can never disagree.
pub fn use_is_open() -> bool {
    use_context::<AppState>().is_open()
}
