use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

pub const GRID_DAYS: usize = 42;

/// Six Monday-first weeks covering one month, plus the month bounds used to
/// dim days that belong to the neighbouring months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub days: Vec<NaiveDate>,
}

impl CalendarMonth {
    /// Builds the grid for the month containing `reference`. `None` when the
    /// grid would run past the range of representable dates.
    pub fn build(reference: NaiveDate) -> Option<Self> {
        let month_start = first_of_month(reference);
        let month_end = last_of_month(month_start);

        let offset = i64::from(month_start.weekday().num_days_from_monday());
        let grid_start = month_start.checked_sub_signed(Duration::days(offset))?;
        let days = (0..GRID_DAYS as i64)
            .map(|i| grid_start.checked_add_signed(Duration::days(i)))
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            month_start,
            month_end,
            days,
        })
    }

    pub fn is_in_month(&self, day: NaiveDate) -> bool {
        day >= self.month_start && day <= self.month_end
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(7)
    }

    pub fn previous_month(&self) -> Option<NaiveDate> {
        self.month_start.pred_opt().map(first_of_month)
    }

    pub fn next_month(&self) -> Option<NaiveDate> {
        self.month_end.succ_opt()
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.day0()))
}

fn last_of_month(month_start: NaiveDate) -> NaiveDate {
    (28..=31)
        .rev()
        .find_map(|d| month_start.with_day(d))
        .unwrap_or(month_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_42_days_starting_monday_and_covers_month() {
        let mut reference = date(1999, 1, 1);
        let stop = date(2031, 1, 1);
        while reference < stop {
            let grid = CalendarMonth::build(reference).unwrap();
            assert_eq!(grid.days.len(), GRID_DAYS);
            assert_eq!(grid.days[0].weekday(), Weekday::Mon);
            assert!(grid.days[0] <= grid.month_start);
            assert!(grid.days[GRID_DAYS - 1] >= grid.month_end);
            assert_eq!(grid.days[GRID_DAYS - 1] - grid.days[0], Duration::days(41));
            assert!(grid.is_in_month(reference));
            reference += Duration::days(13);
        }
    }

    #[test]
    fn month_starting_on_monday_begins_on_the_first() {
        // 2024-04-01 is a Monday
        let grid = CalendarMonth::build(date(2024, 4, 17)).unwrap();
        assert_eq!(grid.days[0], date(2024, 4, 1));
        assert_eq!(grid.month_end, date(2024, 4, 30));
    }

    #[test]
    fn handles_leap_february_and_year_boundaries() {
        let feb = CalendarMonth::build(date(2024, 2, 29)).unwrap();
        assert_eq!(feb.month_start, date(2024, 2, 1));
        assert_eq!(feb.month_end, date(2024, 2, 29));
        assert_eq!(feb.days[0], date(2024, 1, 29));

        let plain_feb = CalendarMonth::build(date(2023, 2, 10)).unwrap();
        assert_eq!(plain_feb.month_end, date(2023, 2, 28));

        let dec = CalendarMonth::build(date(2024, 12, 31)).unwrap();
        assert_eq!(dec.next_month(), Some(date(2025, 1, 1)));
        let jan = CalendarMonth::build(date(2025, 1, 1)).unwrap();
        assert_eq!(jan.previous_month(), Some(date(2024, 12, 1)));
        assert_eq!(jan.days[0], date(2024, 12, 30));
    }

    #[test]
    fn weeks_are_six_rows_of_seven() {
        let grid = CalendarMonth::build(date(2024, 5, 10)).unwrap();
        let weeks: Vec<_> = grid.weeks().collect();
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|w| w.len() == 7 && w[0].weekday() == Weekday::Mon));
    }

    #[test]
    fn grid_past_the_last_representable_date_is_refused() {
        assert!(CalendarMonth::build(NaiveDate::MAX).is_none());

        let last_full = CalendarMonth::build(date(262142, 11, 15)).unwrap();
        assert_eq!(last_full.next_month(), Some(date(262142, 12, 1)));
    }
}
