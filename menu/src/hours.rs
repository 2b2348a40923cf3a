//! Opening hours and the clock they are checked against.

use std::ops::Range;

use chrono::Timelike;
use thiserror::Error;

/// An error that can occur when configuring opening hours.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HoursError {
    #[error("invalid hour {0:?}")]
    InvalidHour(String),
    #[error("opening hour {open} must be before closing hour {close}")]
    EmptyWindow { open: u32, close: u32 },
}

/// The half-open range of local hours, `[open, close)`, during which the shop
/// takes orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    open: u32,
    close: u32,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self { open: 10, close: 22 }
    }
}

impl OpeningHours {
    /// `open` must be 0..=23, `close` 1..=24 and after `open`.
    pub fn new(open: u32, close: u32) -> Result<Self, HoursError> {
        if open > 23 {
            return Err(HoursError::InvalidHour(open.to_string()));
        }
        if close > 24 {
            return Err(HoursError::InvalidHour(close.to_string()));
        }
        if open >= close {
            return Err(HoursError::EmptyWindow { open, close });
        }
        Ok(Self { open, close })
    }

    /// Builds hours from optional textual overrides. A missing value keeps
    /// the default for that end of the window.
    pub fn from_overrides(open: Option<&str>, close: Option<&str>) -> Result<Self, HoursError> {
        let default = Self::default();
        let open = open.map(parse_hour).transpose()?.unwrap_or(default.open);
        let close = close.map(parse_hour).transpose()?.unwrap_or(default.close);
        Self::new(open, close)
    }

    pub fn open(&self) -> u32 {
        self.open
    }

    pub fn close(&self) -> u32 {
        self.close
    }

    pub fn as_range(&self) -> Range<u32> {
        self.open..self.close
    }

    /// The single open/closed predicate shared by every part of the page.
    pub fn is_open(&self, hour: u32) -> bool {
        self.as_range().contains(&hour)
    }
}

fn parse_hour(value: &str) -> Result<u32, HoursError> {
    value
        .trim()
        .parse()
        .map_err(|_| HoursError::InvalidHour(value.to_string()))
}

/// Where the current hour comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum Clock {
    /// The host's local wall clock.
    #[default]
    Local,
    /// Always reports the given hour.
    Fixed(u32),
}

impl Clock {
    pub fn current_hour(&self) -> u32 {
        match self {
            Self::Local => chrono::Local::now().hour(),
            Self::Fixed(hour) => *hour,
        }
    }
}
