//! Clock geometry and scaling.
//!
//! Pure time-to-geometry transforms for the analog face (hand angles, tick
//! marks) and the scale model shared by both clock widgets. Nothing in here
//! touches the terminal; the components translate this into canvas shapes.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};
use strum::Display;

pub const FACE_RADIUS: f64 = 100.0;
pub const HOUR_HAND_LENGTH: f64 = 50.0;
pub const MINUTE_HAND_LENGTH: f64 = 70.0;
pub const SECOND_HAND_LENGTH: f64 = 80.0;

/// Which clock widget is visible. Persisted under `clock.mode`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ClockMode {
    #[default]
    Analog,
    Digital,
}

impl ClockMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Analog => Self::Digital,
            Self::Digital => Self::Analog,
        }
    }

    pub fn from_setting(value: &str) -> Self {
        if value == "digital" {
            Self::Digital
        } else {
            Self::Analog
        }
    }

    pub fn as_setting(self) -> &'static str {
        match self {
            Self::Analog => "analog",
            Self::Digital => "digital",
        }
    }
}

/// Wall-clock sample taken once per clock tick and discarded after paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    pub fn now() -> Self {
        Self::from(Local::now())
    }
}

impl From<DateTime<Local>> for ClockReading {
    fn from(t: DateTime<Local>) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

/// Hour hand angle in degrees from horizontal. The minute term makes the hand
/// creep between hour marks.
pub fn hour_hand_deg(hour: u32, minute: u32) -> f64 {
    f64::from(hour % 12) * 30.0 + f64::from(minute) * 0.5 - 90.0
}

pub fn minute_hand_deg(minute: u32, second: u32) -> f64 {
    f64::from(minute) * 6.0 + f64::from(second) * 0.1 - 90.0
}

pub fn second_hand_deg(second: u32) -> f64 {
    f64::from(second) * 6.0 - 90.0
}

/// Endpoint of a hand of the given length, in painter coordinates (y grows
/// downward, so -90° points straight up).
pub fn hand_endpoint(angle_deg: f64, length: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (length * rad.cos(), length * rad.sin())
}

/// One tick mark on the clock face, in painter coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub major: bool,
}

fn radial_mark(angle_deg: f64, r1: f64, r2: f64, major: bool) -> TickMark {
    let rad = angle_deg.to_radians();
    TickMark {
        x1: r1 * rad.cos(),
        y1: r1 * rad.sin(),
        x2: r2 * rad.cos(),
        y2: r2 * rad.sin(),
        major,
    }
}

/// All 60 tick marks: 12 long hour marks (radius 85..95) and 48 short minute
/// marks (radius 90..95, multiples of five skipped).
pub fn face_ticks() -> Vec<TickMark> {
    let mut marks = Vec::with_capacity(60);
    for i in 0..12 {
        marks.push(radial_mark(f64::from(i) * 30.0 - 90.0, 85.0, 95.0, true));
    }
    for i in 0..60 {
        if i % 5 != 0 {
            marks.push(radial_mark(f64::from(i) * 6.0 - 90.0, 90.0, 95.0, false));
        }
    }
    marks
}

pub const BASE_TIME_SIZE: f64 = 32.0;
pub const BASE_DATE_SIZE: f64 = 16.0;

/// Scale derived from the container width. Baseline 500px maps to 1.0.
pub fn auto_scale(width_px: f64) -> f64 {
    (width_px / 500.0).clamp(0.6, 2.5)
}

/// Scale derived from the size slider (50..=200 maps to 0.5..=2.0).
pub fn slider_scale(value: f64) -> f64 {
    (value / 100.0).clamp(0.5, 2.0)
}

/// Multiplier applied to the two base font sizes of the digital clock. Both
/// the resize-driven auto scale and the slider write through [`set`], so the
/// last writer within a frame wins.
///
/// [`set`]: ClockScale::set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockScale {
    factor: f64,
}

impl Default for ClockScale {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl ClockScale {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn set(&mut self, factor: f64) {
        self.factor = factor;
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn time_size(&self) -> f64 {
        BASE_TIME_SIZE * self.factor
    }

    pub fn date_size(&self) -> f64 {
        BASE_DATE_SIZE * self.factor
    }
}

pub fn format_time(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

pub fn format_date(t: &DateTime<Local>) -> String {
    t.format("%Y-%m-%d %A").to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, 0, -90.0)]
    #[case(3, 0, 0.0)]
    #[case(6, 0, 90.0)]
    #[case(9, 0, 180.0)]
    #[case(12, 0, -90.0)]
    #[case(15, 0, 0.0)]
    #[case(10, 30, 225.0)]
    fn test_hour_hand_deg(#[case] hour: u32, #[case] minute: u32, #[case] expected: f64) {
        assert_eq!(hour_hand_deg(hour, minute), expected);
    }

    #[rstest]
    #[case(0, 0, -90.0)]
    #[case(15, 0, 0.0)]
    #[case(30, 0, 90.0)]
    #[case(45, 0, 180.0)]
    #[case(59, 30, 267.0)]
    fn test_minute_hand_deg(#[case] minute: u32, #[case] second: u32, #[case] expected: f64) {
        assert_eq!(minute_hand_deg(minute, second), expected);
    }

    #[rstest]
    #[case(0, -90.0)]
    #[case(15, 0.0)]
    #[case(30, 90.0)]
    #[case(45, 180.0)]
    fn test_second_hand_deg(#[case] second: u32, #[case] expected: f64) {
        assert_eq!(second_hand_deg(second), expected);
    }

    #[test]
    fn test_hour_hand_creeps_with_minutes() {
        // half past should put the hour hand halfway between marks
        let on_the_hour = hour_hand_deg(4, 0);
        let half_past = hour_hand_deg(4, 30);
        assert_eq!(half_past - on_the_hour, 15.0);
    }

    #[test]
    fn test_hand_endpoint_points_up_at_minus_ninety() {
        let (x, y) = hand_endpoint(-90.0, SECOND_HAND_LENGTH);
        assert!(x.abs() < 1e-9);
        assert!((y + SECOND_HAND_LENGTH).abs() < 1e-9);
    }

    #[test]
    fn test_face_ticks_counts() {
        let ticks = face_ticks();
        assert_eq!(ticks.len(), 60);
        assert_eq!(ticks.iter().filter(|t| t.major).count(), 12);
        assert_eq!(ticks.iter().filter(|t| !t.major).count(), 48);
    }

    #[test]
    fn test_face_ticks_radii() {
        for tick in face_ticks() {
            let inner = (tick.x1 * tick.x1 + tick.y1 * tick.y1).sqrt();
            let outer = (tick.x2 * tick.x2 + tick.y2 * tick.y2).sqrt();
            let expected_inner = if tick.major { 85.0 } else { 90.0 };
            assert!((inner - expected_inner).abs() < 1e-9);
            assert!((outer - 95.0).abs() < 1e-9);
        }
    }

    #[rstest]
    #[case(0.0, 0.6)]
    #[case(250.0, 0.6)]
    #[case(500.0, 1.0)]
    #[case(1000.0, 2.0)]
    #[case(5000.0, 2.5)]
    fn test_auto_scale_clamps(#[case] width: f64, #[case] expected: f64) {
        assert_eq!(auto_scale(width), expected);
    }

    #[rstest]
    #[case(0.0, 0.5)]
    #[case(50.0, 0.5)]
    #[case(100.0, 1.0)]
    #[case(200.0, 2.0)]
    #[case(400.0, 2.0)]
    fn test_slider_scale_clamps(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(slider_scale(value), expected);
    }

    #[test]
    fn test_clock_scale_multiplies_both_sizes() {
        let mut scale = ClockScale::default();
        assert_eq!(scale.time_size(), BASE_TIME_SIZE);
        assert_eq!(scale.date_size(), BASE_DATE_SIZE);
        scale.set(2.0);
        assert_eq!(scale.time_size(), 64.0);
        assert_eq!(scale.date_size(), 32.0);
    }

    #[test]
    fn test_clock_mode_setting_roundtrip() {
        assert_eq!(ClockMode::from_setting("digital"), ClockMode::Digital);
        assert_eq!(ClockMode::from_setting("analog"), ClockMode::Analog);
        assert_eq!(ClockMode::from_setting("cuckoo"), ClockMode::Analog);
        assert_eq!(ClockMode::Digital.as_setting(), "digital");
        assert_eq!(ClockMode::Digital.toggled(), ClockMode::Analog);
    }
}
