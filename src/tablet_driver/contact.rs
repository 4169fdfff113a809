use tracing::warn;

use crate::error::ConfigError;
use crate::event_model::AxisExtents;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Released,
    Pressed,
}

impl ContactStatus {
    pub fn is_pressed(self) -> bool {
        self == Self::Pressed
    }
}

/// Pressure levels, in device units, that drive clicking and movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Pressure at or above which the button is pressed.
    pub click: i32,
    /// Pressure at or below which the button is released.
    pub release: i32,
    /// Pressure at or above which the pointer follows the finger.
    pub movement: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            click: 50,
            release: 20,
            movement: 0,
        }
    }
}

impl Thresholds {
    /// Checks the click and release levels against the pressure axis range.
    ///
    /// An inverted band (click below release) is allowed but logged.
    pub fn validate(&self, pressure: &AxisExtents) -> Result<(), ConfigError> {
        for (name, value) in [("click", self.click), ("release", self.release)] {
            if !pressure.contains(value) {
                return Err(ConfigError::ThresholdOutOfRange {
                    name,
                    value,
                    minimum: pressure.minimum,
                    maximum: pressure.maximum,
                });
            }
        }
        if self.is_inverted() {
            warn!(
                click = self.click,
                release = self.release,
                "click threshold less than release threshold"
            );
        }
        Ok(())
    }

    pub fn is_inverted(&self) -> bool {
        self.click < self.release
    }

    /// Movement has no hysteresis: only the current pressure counts.
    pub fn allows_movement(&self, pressure: i32) -> bool {
        pressure >= self.movement
    }
}

/// Pressed/released state derived from pressure with hysteresis.
#[derive(Debug, Clone)]
pub struct ContactTracker {
    thresholds: Thresholds,
    status: ContactStatus,
}

impl ContactTracker {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            status: ContactStatus::Released,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    /// Feeds the pressure seen at a sync barrier.
    ///
    /// Returns the button state to send, if any. A press or release is
    /// returned on every barrier its condition holds, even when the state is
    /// unchanged. Inside the band between the two thresholds nothing is sent.
    pub fn update(&mut self, pressure: i32) -> Option<ContactStatus> {
        let next = if pressure >= self.thresholds.click {
            ContactStatus::Pressed
        } else if pressure <= self.thresholds.release {
            ContactStatus::Released
        } else {
            return None;
        };
        self.status = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hysteresis_band_holds_state() {
        let mut tracker = ContactTracker::new(Thresholds::default());
        let emitted: Vec<_> = [0, 30, 60, 15, 35]
            .into_iter()
            .map(|p| (tracker.update(p), tracker.status()))
            .collect();
        assert_eq!(
            emitted,
            vec![
                (Some(ContactStatus::Released), ContactStatus::Released),
                (None, ContactStatus::Released),
                (Some(ContactStatus::Pressed), ContactStatus::Pressed),
                (Some(ContactStatus::Released), ContactStatus::Released),
                (None, ContactStatus::Released),
            ]
        );
    }

    #[test]
    fn band_keeps_pressed_too() {
        let mut tracker = ContactTracker::new(Thresholds::default());
        tracker.update(80);
        assert_eq!(tracker.update(35), None);
        assert!(tracker.status().is_pressed());
    }

    #[test]
    fn repeats_are_not_suppressed() {
        let mut tracker = ContactTracker::new(Thresholds::default());
        assert_eq!(tracker.update(60), Some(ContactStatus::Pressed));
        assert_eq!(tracker.update(70), Some(ContactStatus::Pressed));
    }

    #[test]
    fn inverted_thresholds_prefer_press() {
        let mut tracker = ContactTracker::new(Thresholds {
            click: 20,
            release: 50,
            movement: 0,
        });
        assert_eq!(tracker.update(30), Some(ContactStatus::Pressed));
        assert_eq!(tracker.update(10), Some(ContactStatus::Released));
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let pressure = AxisExtents::new(0, 255);
        let too_high = Thresholds {
            click: 300,
            ..Thresholds::default()
        };
        assert!(matches!(
            too_high.validate(&pressure),
            Err(ConfigError::ThresholdOutOfRange { name: "click", .. })
        ));
        let too_low = Thresholds {
            release: -1,
            ..Thresholds::default()
        };
        assert!(matches!(
            too_low.validate(&pressure),
            Err(ConfigError::ThresholdOutOfRange { name: "release", .. })
        ));
    }

    #[test]
    fn validate_allows_inverted_and_ignores_movement() {
        let pressure = AxisExtents::new(0, 255);
        let inverted = Thresholds {
            click: 10,
            release: 40,
            movement: 1000,
        };
        assert!(inverted.is_inverted());
        assert!(inverted.validate(&pressure).is_ok());
    }

    #[test]
    fn movement_gate_is_inclusive() {
        let t = Thresholds {
            movement: 10,
            ..Thresholds::default()
        };
        assert!(!t.allows_movement(5));
        assert!(t.allows_movement(10));
    }
}
