//! Timetable hour slot representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One timetable hour, at "HH:00" granularity.
///
/// The frontend submits times as "HH:MM" strings; only the hour component is
/// significant for slot identity, so minutes are dropped on parse. Printing
/// always yields the canonical "HH:00" form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourSlot(u32);

impl HourSlot {
    /// Create a slot from an hour of day.
    ///
    /// Returns `None` for hours outside 0..24.
    pub fn from_hour(hour: u32) -> Option<Self> {
        if hour < 24 {
            Some(HourSlot(hour))
        } else {
            None
        }
    }

    /// Hour of day, 0..24.
    pub fn hour(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HourSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Error parsing an "HH:MM" time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hour slot '{input}': expected HH:MM with hour in 0..24")]
pub struct ParseHourSlotError {
    pub input: String,
}

impl FromStr for HourSlot {
    type Err = ParseHourSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHourSlotError {
            input: s.to_string(),
        };

        let (hh, mm) = s.trim().split_once(':').ok_or_else(err)?;
        let hour: u32 = hh.parse().map_err(|_| err())?;
        let minutes: u32 = mm.parse().map_err(|_| err())?;
        if minutes >= 60 {
            return Err(err());
        }
        HourSlot::from_hour(hour).ok_or_else(err)
    }
}

impl Serialize for HourSlot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HourSlot {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
