//! Conversion between civil years and the regional era shown in the mask.

use serde::{Deserialize, Serialize};

use crate::consts::{BUDDHIST_ERA_OFFSET, ERA_THRESHOLD, MAX_YEAR};

/// A fixed-offset era used for the year slot of the mask.
///
/// A civil year below `threshold` is shifted by `offset` for display. A year at
/// or above `threshold` is assumed to already be regional and is shown as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Era {
    pub offset: u16,
    pub threshold: u16,
}

impl Era {
    /// Thai Buddhist era: civil 2025 is displayed as 2568.
    pub const BUDDHIST: Self = Self {
        offset: BUDDHIST_ERA_OFFSET,
        threshold: ERA_THRESHOLD,
    };

    /// An era that displays civil years unchanged.
    pub const CIVIL: Self = Self {
        offset: 0,
        threshold: 0,
    };

    /// Regional year shown for a civil year, saturating at `MAX_YEAR`.
    pub const fn to_regional(self, civil: u16) -> u16 {
        if civil < self.threshold {
            let shifted = civil.saturating_add(self.offset);
            if shifted > MAX_YEAR { MAX_YEAR } else { shifted }
        } else {
            civil
        }
    }

    /// Civil year for a typed regional year.
    ///
    /// Years whose shifted value lands below `threshold` are shifted back,
    /// anything past the displayable band is passed through. Returns `None`
    /// for regional years that would map to year zero or earlier.
    ///
    /// Every year in `offset + 1..threshold + offset` is read as regional, so a
    /// civil year typed by mistake (`2025` in the Buddhist era) yields 1482.
    pub const fn to_civil(self, regional: u16) -> Option<u16> {
        if regional <= self.offset {
            return None;
        }
        let shifted = regional - self.offset;
        if shifted < self.threshold {
            Some(shifted)
        } else {
            Some(regional)
        }
    }
}

impl Default for Era {
    fn default() -> Self {
        Self::BUDDHIST
    }
}
