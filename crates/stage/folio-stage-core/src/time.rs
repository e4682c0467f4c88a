//! Time handling for the stage sequencer.
//!
//! Stage delays are configured in milliseconds, so the sequencer clock is a
//! millisecond-resolution monotonic value rather than a wall-clock instant.
//! Hosts advance it by the frame delta; it never runs backwards.

use serde::{Deserialize, Serialize};

use crate::error::StageError;

/// A moment on the sequencer's timeline, in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct StageTime(u64);

impl StageTime {
    /// Zero time
    #[inline]
    pub fn zero() -> Self {
        Self(0)
    }

    /// Create a stage time from whole milliseconds
    #[inline]
    pub fn from_millis(milliseconds: u64) -> Self {
        Self(milliseconds)
    }

    /// Create a stage time from fractional milliseconds.
    /// Rejects negative and non-finite inputs.
    #[inline]
    pub fn from_millis_f64(milliseconds: f64) -> Result<Self, StageError> {
        if milliseconds < 0.0 || !milliseconds.is_finite() {
            return Err(StageError::InvalidTime {
                millis: milliseconds,
            });
        }
        Ok(Self(milliseconds.round() as u64))
    }

    /// Create a stage time from fractional milliseconds, clamping negative
    /// and non-finite inputs to zero. This is the scheduling-boundary path:
    /// a misconfigured delay must never reach the timer queue as-is.
    #[inline]
    pub fn from_millis_clamped(milliseconds: f64) -> Self {
        if milliseconds.is_finite() && milliseconds > 0.0 {
            Self(milliseconds.round() as u64)
        } else {
            Self(0)
        }
    }

    /// Get time in milliseconds
    #[inline]
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Get time in seconds
    #[inline]
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Difference to an earlier time, saturating at zero.
    #[inline]
    pub fn saturating_since(&self, earlier: StageTime) -> StageTime {
        Self(self.0.saturating_sub(earlier.0))
    }
}

impl std::ops::Add for StageTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for StageTime {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::Sub for StageTime {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl From<u64> for StageTime {
    fn from(milliseconds: u64) -> Self {
        Self::from_millis(milliseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_constructor_floors_bad_input_at_zero() {
        assert_eq!(StageTime::from_millis_clamped(-250.0), StageTime::zero());
        assert_eq!(StageTime::from_millis_clamped(f64::NAN), StageTime::zero());
        assert_eq!(
            StageTime::from_millis_clamped(350.4),
            StageTime::from_millis(350)
        );
    }

    #[test]
    fn strict_constructor_rejects_bad_input() {
        assert!(StageTime::from_millis_f64(-1.0).is_err());
        assert!(StageTime::from_millis_f64(f64::INFINITY).is_err());
        assert_eq!(
            StageTime::from_millis_f64(600.0).unwrap(),
            StageTime::from_millis(600)
        );
    }

    #[test]
    fn arithmetic_saturates() {
        let a = StageTime::from_millis(100);
        let b = StageTime::from_millis(300);
        assert_eq!(a - b, StageTime::zero());
        assert_eq!((a + b).as_millis(), 400);
    }
}
