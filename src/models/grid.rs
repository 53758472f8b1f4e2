//! Teaching grid: days, clock times, periods, and time slots.
//!
//! The grid is fixed: Monday through Friday, 08:00-15:00, with the
//! 12:00-13:00 lunch interval excluded. Periods are one hour long and
//! aligned to hour boundaries, giving six teaching periods per day.
//!
//! # Time Model
//! Clock times are minutes since midnight. A `Period` is a half-open
//! interval [start, start + 60). `Period::starting_at` is the only
//! constructor, so every `Period` in circulation lies on the grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of one teaching period (minutes).
pub const PERIOD_MINUTES: u16 = 60;

/// First teaching minute of the day (08:00).
pub const DAY_START_MINUTES: u16 = 8 * 60;

/// End of the teaching day (15:00, exclusive).
pub const DAY_END_MINUTES: u16 = 15 * 60;

/// Lunch interval start (12:00, inclusive).
pub const LUNCH_START_MINUTES: u16 = 12 * 60;

/// Lunch interval end (13:00, exclusive).
pub const LUNCH_END_MINUTES: u16 = 13 * 60;

/// A teaching day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days, Monday first.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Three-letter short name (`Mon`, `Tue`, ...).
    pub fn short_name(&self) -> &'static str {
        match self {
            Day::Monday => "Mon",
            Day::Tuesday => "Tue",
            Day::Wednesday => "Wed",
            Day::Thursday => "Thu",
            Day::Friday => "Fri",
        }
    }

    /// Full name (`Monday`, `Tuesday`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Parses a short or long day name, case-insensitive.
    ///
    /// Returns `None` for anything that is not a teaching day
    /// (including `Sat`/`Sun`).
    pub fn parse_token(token: &str) -> Option<Day> {
        let lower = token.trim().to_ascii_lowercase();
        match lower.as_str() {
            "mon" | "monday" => Some(Day::Monday),
            "tue" | "tuesday" => Some(Day::Tuesday),
            "wed" | "wednesday" => Some(Day::Wednesday),
            "thu" | "thursday" => Some(Day::Thursday),
            "fri" | "friday" => Some(Day::Friday),
            _ => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A clock time with minute precision.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day. Returns `None` if out of range.
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Parses `HH:MM` or `H:MM` (exported data uses both forms).
    pub fn parse(text: &str) -> Option<Self> {
        let (h, m) = text.trim().split_once(':')?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return None;
        }
        let hour: u16 = h.parse().ok()?;
        let minute: u16 = m.parse().ok()?;
        Self::new(hour, minute)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Whether this time falls inside the lunch interval.
    #[inline]
    pub fn is_lunch(&self) -> bool {
        self.0 >= LUNCH_START_MINUTES && self.0 < LUNCH_END_MINUTES
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// One teaching period: the half-open interval [start, start + 60).
///
/// Only obtainable through [`Period::starting_at`] or [`Period::all`],
/// so a `Period` value always lies on the teaching grid: outside lunch,
/// inside 08:00-15:00, aligned to an hour boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period {
    start: TimeOfDay,
}

impl Period {
    /// Returns the period starting at the given time, or `None` when no
    /// teaching period starts there (outside the grid, inside lunch, or
    /// not on an hour boundary).
    pub fn starting_at(start: TimeOfDay) -> Option<Period> {
        let m = start.minutes();
        if m < DAY_START_MINUTES || m >= DAY_END_MINUTES {
            return None;
        }
        if start.is_lunch() {
            return None;
        }
        if m % PERIOD_MINUTES != 0 {
            return None;
        }
        Some(Period { start })
    }

    /// All teaching periods of a day, in order.
    pub fn all() -> Vec<Period> {
        (DAY_START_MINUTES..DAY_END_MINUTES)
            .step_by(PERIOD_MINUTES as usize)
            .filter_map(|m| Period::starting_at(TimeOfDay(m)))
            .collect()
    }

    /// Period start (inclusive).
    #[inline]
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Period end (exclusive).
    #[inline]
    pub fn end(&self) -> TimeOfDay {
        TimeOfDay(self.start.0 + PERIOD_MINUTES)
    }

    /// Whether a clock time falls within this period.
    #[inline]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        time >= self.start && time < self.end()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

/// A (day, period) pair, the atomic scheduling unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeSlot {
    /// Teaching day.
    pub day: Day,
    /// Teaching period within the day.
    pub period: Period,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day.short_name(), self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u16, minute: u16) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn test_day_parse_token() {
        assert_eq!(Day::parse_token("Mon"), Some(Day::Monday));
        assert_eq!(Day::parse_token("monday"), Some(Day::Monday));
        assert_eq!(Day::parse_token("FRIDAY"), Some(Day::Friday));
        assert_eq!(Day::parse_token("  wed "), Some(Day::Wednesday));
        assert_eq!(Day::parse_token("Sat"), None);
        assert_eq!(Day::parse_token("Mondays"), None);
        assert_eq!(Day::parse_token(""), None);
    }

    #[test]
    fn test_day_names() {
        assert_eq!(Day::Monday.short_name(), "Mon");
        assert_eq!(Day::Thursday.to_string(), "Thursday");
        assert_eq!(Day::ALL.len(), 5);
        assert!(Day::Monday < Day::Friday);
    }

    #[test]
    fn test_time_of_day_parse() {
        assert_eq!(TimeOfDay::parse("08:00"), Some(at(8, 0)));
        assert_eq!(TimeOfDay::parse("8:00"), Some(at(8, 0)));
        assert_eq!(TimeOfDay::parse("14:30"), Some(at(14, 30)));
        assert_eq!(TimeOfDay::parse(" 09:15 "), Some(at(9, 15)));
        assert_eq!(TimeOfDay::parse("25:00"), None);
        assert_eq!(TimeOfDay::parse("08:60"), None);
        assert_eq!(TimeOfDay::parse("08:5"), None); // minutes must be two digits
        assert_eq!(TimeOfDay::parse("0800"), None);
        assert_eq!(TimeOfDay::parse(""), None);
    }

    #[test]
    fn test_time_of_day_display() {
        assert_eq!(at(8, 0).to_string(), "08:00");
        assert_eq!(at(13, 5).to_string(), "13:05");
    }

    #[test]
    fn test_period_starting_at() {
        assert!(Period::starting_at(at(8, 0)).is_some());
        assert!(Period::starting_at(at(11, 0)).is_some());
        assert!(Period::starting_at(at(13, 0)).is_some());
        assert!(Period::starting_at(at(14, 0)).is_some());

        assert!(Period::starting_at(at(12, 0)).is_none()); // lunch
        assert!(Period::starting_at(at(12, 30)).is_none()); // inside lunch
        assert!(Period::starting_at(at(7, 0)).is_none()); // before grid
        assert!(Period::starting_at(at(15, 0)).is_none()); // after grid
        assert!(Period::starting_at(at(8, 30)).is_none()); // misaligned
    }

    #[test]
    fn test_period_all() {
        let periods = Period::all();
        assert_eq!(periods.len(), 6);
        assert_eq!(periods[0].start(), at(8, 0));
        assert_eq!(periods[3].start(), at(11, 0));
        assert_eq!(periods[4].start(), at(13, 0)); // lunch skipped
        assert_eq!(periods[5].start(), at(14, 0));
    }

    #[test]
    fn test_period_interval() {
        let p = Period::starting_at(at(9, 0)).unwrap();
        assert_eq!(p.end(), at(10, 0));
        assert!(p.contains(at(9, 0)));
        assert!(p.contains(at(9, 59)));
        assert!(!p.contains(at(10, 0))); // exclusive end
        assert_eq!(p.to_string(), "09:00-10:00");
    }

    #[test]
    fn test_slot_display_and_order() {
        let early = TimeSlot::new(Day::Monday, Period::starting_at(at(8, 0)).unwrap());
        let late = TimeSlot::new(Day::Monday, Period::starting_at(at(14, 0)).unwrap());
        let tuesday = TimeSlot::new(Day::Tuesday, Period::starting_at(at(8, 0)).unwrap());

        assert_eq!(early.to_string(), "Mon 08:00-09:00");
        assert!(early < late);
        assert!(late < tuesday);
    }
}
