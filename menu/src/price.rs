//! A whole-dollar menu price.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The price of a menu entry in whole dollars.
///
/// Menu prices are always whole amounts, so the value is stored as an
/// unsigned integer rather than a float. A zero price is representable here
/// but rejected when a [`Catalog`](crate::Catalog) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// Creates a price from a whole-dollar amount.
    pub const fn dollars(amount: u32) -> Self {
        Self(amount)
    }

    /// Returns the amount in whole dollars.
    pub fn as_dollars(&self) -> u32 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

/// Formats as `$<amount>`, e.g. `$12`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
