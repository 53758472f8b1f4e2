//! Free-slot expression parser.
//!
//! Converts the free-form availability text stored per teacher into a
//! typed [`AvailabilitySet`]. Problems are reported as warnings alongside
//! the partial result, never as errors: a bulk import of fifty teachers
//! must not abort because one row has a typo.
//!
//! # Grammar
//!
//! ```text
//! expression := entry (delim entry)*      delim = ',' | ';' | '|'
//! entry      := day WS time
//! day        := short or long day name, case-insensitive
//! time       := HH:MM | HH:MM-HH:MM       (H:MM accepted for both bounds)
//! ```
//!
//! A single time selects the one period starting there. A range selects
//! every period whose start lies in [start, end): start bound inclusive,
//! end bound exclusive. An empty or all-whitespace expression means full
//! weekly availability.
//!
//! This grammar is the compatibility surface for existing exported data;
//! [`AvailabilitySet::canonical_form`] round-trips through it.

use crate::models::{AvailabilitySet, Day, Period, TimeOfDay, TimeSlot};

/// Characters that may separate entries, freely mixed within one expression.
const DELIMITERS: [char; 3] = [',', ';', '|'];

/// Categories of parse warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarningKind {
    /// Entry has no time part.
    MalformedEntry,
    /// Day token is not a teaching day.
    UnknownDay,
    /// Time text failed to parse, or a range end precedes its start.
    InvalidTime,
    /// Well-formed time, but no teaching period there (outside
    /// 08:00-15:00, inside lunch, or off the hour boundary).
    OutOfGrid,
}

/// A non-fatal problem found while parsing an expression.
///
/// The offending entry is dropped and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// Warning category.
    pub kind: ParseWarningKind,
    /// Human-readable description naming the offending token.
    pub message: String,
}

impl ParseWarning {
    fn new(kind: ParseWarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parses a free-slot expression into an availability set.
///
/// Returns the set plus any warnings. An empty or all-whitespace
/// expression yields [`AvailabilitySet::full`] with zero warnings.
/// Duplicate slots across entries merge silently.
pub fn parse(expression: &str) -> (AvailabilitySet, Vec<ParseWarning>) {
    if expression.trim().is_empty() {
        return (AvailabilitySet::full(), Vec::new());
    }

    let mut set = AvailabilitySet::empty();
    let mut warnings = Vec::new();

    for raw in expression.split(DELIMITERS) {
        let entry = raw.trim();
        if entry.is_empty() {
            continue;
        }
        parse_entry(entry, &mut set, &mut warnings);
    }

    (set, warnings)
}

fn parse_entry(entry: &str, set: &mut AvailabilitySet, warnings: &mut Vec<ParseWarning>) {
    let Some((day_token, time_token)) = entry.split_once(char::is_whitespace) else {
        warnings.push(ParseWarning::new(
            ParseWarningKind::MalformedEntry,
            format!("Entry '{entry}' has no time part"),
        ));
        return;
    };
    let time_token = time_token.trim();
    if time_token.is_empty() {
        warnings.push(ParseWarning::new(
            ParseWarningKind::MalformedEntry,
            format!("Entry '{entry}' has no time part"),
        ));
        return;
    }

    let Some(day) = Day::parse_token(day_token) else {
        warnings.push(ParseWarning::new(
            ParseWarningKind::UnknownDay,
            format!("Unknown day '{day_token}'"),
        ));
        return;
    };

    match time_token.split_once('-') {
        Some((start_text, end_text)) => {
            parse_range(day, start_text, end_text, set, warnings);
        }
        None => parse_single(day, time_token, set, warnings),
    }
}

/// A bare time selects the one period starting exactly there.
fn parse_single(
    day: Day,
    text: &str,
    set: &mut AvailabilitySet,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(start) = TimeOfDay::parse(text) else {
        warnings.push(ParseWarning::new(
            ParseWarningKind::InvalidTime,
            format!("Invalid time '{text}'"),
        ));
        return;
    };
    match Period::starting_at(start) {
        Some(period) => {
            set.insert(TimeSlot::new(day, period));
        }
        None => warnings.push(ParseWarning::new(
            ParseWarningKind::OutOfGrid,
            format!("No teaching period starts at '{start}'"),
        )),
    }
}

/// A range selects every period whose start lies in [start, end).
fn parse_range(
    day: Day,
    start_text: &str,
    end_text: &str,
    set: &mut AvailabilitySet,
    warnings: &mut Vec<ParseWarning>,
) {
    let (Some(start), Some(end)) = (
        TimeOfDay::parse(start_text),
        TimeOfDay::parse(end_text),
    ) else {
        warnings.push(ParseWarning::new(
            ParseWarningKind::InvalidTime,
            format!("Invalid time range '{}-{}'", start_text.trim(), end_text.trim()),
        ));
        return;
    };
    if end <= start {
        warnings.push(ParseWarning::new(
            ParseWarningKind::InvalidTime,
            format!("Range '{start}-{end}' ends before it starts"),
        ));
        return;
    }

    let selected: Vec<Period> = Period::all()
        .into_iter()
        .filter(|p| p.start() >= start && p.start() < end)
        .collect();

    if selected.is_empty() {
        warnings.push(ParseWarning::new(
            ParseWarningKind::OutOfGrid,
            format!("No teaching periods within '{start}-{end}'"),
        ));
        return;
    }
    for period in selected {
        set.insert(TimeSlot::new(day, period));
    }
}
