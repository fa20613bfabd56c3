use chrono::NaiveDate;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start/end pair picked with two clicks on the calendar.
///
/// Click order does not matter, chronological order does: a second click
/// before the start swaps the bounds instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DateRange {
    #[default]
    Empty,
    StartOnly { start: NaiveDate },
    Complete { start: NaiveDate, end: NaiveDate },
}

/// What the picker popup should do after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PickerAction {
    KeepOpen,
    Close,
}

impl DateRange {
    /// Rebuilds the state from stored bounds. An end without a start is
    /// treated as no selection at all.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => DateRange::Complete { start, end },
            (Some(start), None) => DateRange::StartOnly { start },
            (None, _) => DateRange::Empty,
        }
    }

    pub fn click(&mut self, day: NaiveDate) -> PickerAction {
        match *self {
            DateRange::Empty | DateRange::Complete { .. } => {
                *self = DateRange::StartOnly { start: day };
                PickerAction::KeepOpen
            }
            DateRange::StartOnly { start } if day < start => {
                *self = DateRange::Complete { start: day, end: start };
                PickerAction::KeepOpen
            }
            DateRange::StartOnly { start } => {
                *self = DateRange::Complete { start, end: day };
                PickerAction::Close
            }
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            DateRange::Empty => None,
            DateRange::StartOnly { start } | DateRange::Complete { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            DateRange::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DateRange::Complete { .. })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match *self {
            DateRange::Complete { start, end } => day >= start && day <= end,
            _ => false,
        }
    }

    /// `"start — end"`, `—` standing in for a missing bound; empty when
    /// nothing is selected.
    pub fn display(&self) -> String {
        match *self {
            DateRange::Empty => String::new(),
            DateRange::StartOnly { start } => format!("{} — —", format_date(start)),
            DateRange::Complete { start, end } => {
                format!("{} — {}", format_date(start), format_date(end))
            }
        }
    }
}

pub fn format_date(day: NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

/// Empty string means "not set"; anything else must be `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map(Some)
}
