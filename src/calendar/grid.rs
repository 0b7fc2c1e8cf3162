//! Pure calendar-grid arithmetic.
//!
//! Everything here operates on plain [`time::Date`] values with no UI or
//! timezone involvement: given an anchor month and a configurable start of
//! week, compute which dates are visible in a 7-column month grid, including
//! the leading and trailing days borrowed from the adjacent months.

use std::iter::successors;
use time::{Date, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

const LAST_DAY_INDEX: u8 = 6;

pub trait WeekdayExt {
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    /// 0 = Sunday .. 6 = Saturday
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

/// The first day of `date`'s month, i.e. the anchor form of a month.
pub fn month_start(date: Date) -> Date {
    date.replace_day(1)
        .expect("day 1 should be valid for every month")
}

/// Number of days `weekday` lies past the most recent `start_of_week`.
///
/// Zero when they coincide, at most six otherwise.
fn days_past_week_start(weekday: Weekday, start_of_week: Weekday) -> u8 {
    (weekday.index0() + LAST_DAY_INDEX + 1 - start_of_week.index0()) % (LAST_DAY_INDEX + 1)
}

/// The date of the first grid cell: day 1 of the anchor month, stepped
/// backwards to the most recent date falling on `start_of_week`.
///
/// # Panics
///
/// Panics when the grid runs past an edge of the supported calendar; use
/// [`visible_range`] to handle that case.
pub fn first_visible_date(anchor: Date, start_of_week: Weekday) -> Date {
    visible_range(anchor, start_of_week)
        .expect("visible range should stay within the supported calendar")
        .0
}

/// How many date cells the grid for the anchor month holds.
///
/// Leading days of the previous month, the month itself, and trailing days of
/// the next month up to a full week boundary.  Always a multiple of seven in
/// `28..=42`.
pub fn total_visible_dates(anchor: Date, start_of_week: Weekday) -> usize {
    let first = month_start(anchor);
    let month_length = anchor.month().length(anchor.year());
    let last = first
        .replace_day(month_length)
        .expect("month length should be a valid day of the month");
    let leading = days_past_week_start(first.weekday(), start_of_week);
    let trailing = LAST_DAY_INDEX - days_past_week_start(last.weekday(), start_of_week);
    usize::from(leading) + usize::from(month_length) + usize::from(trailing)
}

/// The first visible date and cell count of the anchor month's grid, or
/// `None` when the grid would run past an edge of the supported calendar
/// (months at the very ends of the [`time::Date`] range).
pub fn visible_range(anchor: Date, start_of_week: Weekday) -> Option<(Date, usize)> {
    let first_of_month = month_start(anchor);
    let offset = days_past_week_start(first_of_month.weekday(), start_of_week);
    let first = Date::from_julian_day(first_of_month.to_julian_day() - i32::from(offset)).ok()?;
    let total = total_visible_dates(anchor, start_of_week);
    let span = i32::try_from(total - 1).ok()?;
    // The grid's last cell must be representable too
    Date::from_julian_day(first.to_julian_day() + span).ok()?;
    Some((first, total))
}

/// Every date of the anchor month's grid, in order.
///
/// # Panics
///
/// Panics when the grid runs past an edge of the supported calendar; use
/// [`visible_range`] to handle that case.
pub fn visible_dates(anchor: Date, start_of_week: Weekday) -> impl Iterator<Item = Date> {
    let (first, total) = visible_range(anchor, start_of_week)
        .expect("visible range should stay within the supported calendar");
    successors(Some(first), |&d| d.next_day()).take(total)
}

/// Whether `date` is the last day of its own month.
pub fn is_last_of_month(date: Date) -> bool {
    match date.next_day() {
        Some(tomorrow) => date.month() != tomorrow.month(),
        None => true,
    }
}

/// Anchor of the month before `anchor`'s month, or `None` at the edge of the
/// supported calendar range.
pub fn prev_month(anchor: Date) -> Option<Date> {
    let (year, month) = match anchor.month() {
        Month::January => (anchor.year().checked_sub(1)?, Month::December),
        m => (anchor.year(), m.previous()),
    };
    Date::from_calendar_date(year, month, 1).ok()
}

/// Anchor of the month after `anchor`'s month, or `None` at the edge of the
/// supported calendar range.
pub fn next_month(anchor: Date) -> Option<Date> {
    let (year, month) = match anchor.month() {
        Month::December => (anchor.year().checked_add(1)?, Month::January),
        m => (anchor.year(), m.next()),
    };
    Date::from_calendar_date(year, month, 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};

    const WEEKDAYS: [Weekday; 7] = [
        Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
    ];

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date!(2012 - 02 - 14)), date!(2012 - 02 - 01));
        assert_eq!(month_start(date!(2012 - 02 - 01)), date!(2012 - 02 - 01));
    }

    #[test]
    fn test_first_visible_date_feb_2012() {
        // Feb 1, 2012 is a Wednesday
        assert_eq!(
            first_visible_date(date!(2012 - 02 - 14), Sunday),
            date!(2012 - 01 - 29)
        );
        assert_eq!(
            first_visible_date(date!(2012 - 02 - 14), Monday),
            date!(2012 - 01 - 30)
        );
        assert_eq!(
            first_visible_date(date!(2012 - 02 - 14), Wednesday),
            date!(2012 - 02 - 01)
        );
    }

    #[test]
    fn test_first_visible_date_aligned_month() {
        // Aug 1, 2010 is a Sunday, so no leading offset
        assert_eq!(
            first_visible_date(date!(2010 - 08 - 16), Sunday),
            date!(2010 - 08 - 01)
        );
    }

    #[test]
    fn test_total_visible_dates_feb_2012() {
        assert_eq!(total_visible_dates(date!(2012 - 02 - 01), Sunday), 35);
    }

    #[test]
    fn test_total_visible_dates_aug_2010() {
        assert_eq!(total_visible_dates(date!(2010 - 08 - 01), Sunday), 35);
    }

    #[test]
    fn test_total_visible_dates_month_ending_on_last_weekday() {
        // Jun 2012 ends on a Saturday; no trailing offset with a Sunday start
        assert_eq!(total_visible_dates(date!(2012 - 06 - 01), Sunday), 35);
    }

    #[test]
    fn test_total_visible_dates_exact_four_weeks() {
        // Feb 2010 starts on a Monday and spans exactly four weeks
        assert_eq!(total_visible_dates(date!(2010 - 02 - 01), Monday), 28);
    }

    #[test]
    fn test_total_visible_dates_six_weeks() {
        // Dec 2012 starts on a Saturday and has 31 days
        assert_eq!(total_visible_dates(date!(2012 - 12 - 01), Sunday), 42);
    }

    #[test]
    fn test_grid_laws_across_a_year() {
        for month in 1u8..=12 {
            let anchor = Date::from_calendar_date(2023, Month::try_from(month).unwrap(), 1)
                .unwrap();
            for start in [Sunday, Monday, Saturday] {
                let total = total_visible_dates(anchor, start);
                assert_eq!(total % DAYS_IN_WEEK, 0, "{anchor} {start}");
                assert!((28..=42).contains(&total), "{anchor} {start}");
                assert_eq!(first_visible_date(anchor, start).weekday(), start);
                assert_eq!(visible_dates(anchor, start).count(), total);
            }
        }
    }

    #[test]
    fn test_visible_dates_are_consecutive() {
        let dates = visible_dates(date!(2012 - 02 - 01), Sunday).collect::<Vec<_>>();
        assert_eq!(dates.first(), Some(&date!(2012 - 01 - 29)));
        assert_eq!(dates.last(), Some(&date!(2012 - 03 - 03)));
        for pair in dates.windows(2) {
            assert_eq!(pair[0].next_day(), Some(pair[1]));
        }
    }

    #[test]
    fn test_is_last_of_month() {
        assert!(is_last_of_month(date!(2012 - 02 - 29)));
        assert!(!is_last_of_month(date!(2012 - 02 - 28)));
        assert!(is_last_of_month(date!(2011 - 02 - 28)));
        assert!(is_last_of_month(date!(2012 - 12 - 31)));
    }

    #[test]
    fn test_visible_range_at_start_of_calendar() {
        // Only a start of week matching Date::MIN's weekday avoids stepping
        // back past the calendar
        let aligned = Date::MIN.weekday();
        for start in WEEKDAYS {
            let range = visible_range(Date::MIN, start);
            if start == aligned {
                assert_eq!(range.map(|(first, _)| first), Some(Date::MIN));
            } else {
                assert_eq!(range, None, "{start}");
            }
        }
    }

    #[test]
    fn test_visible_range_at_end_of_calendar() {
        // Only a week ending exactly on Date::MAX keeps the trailing offset
        // at zero
        let aligned = Date::MAX.weekday().next();
        for start in WEEKDAYS {
            let range = visible_range(month_start(Date::MAX), start);
            if start == aligned {
                let (first, total) = range.expect("grid should fit");
                let last = Date::from_julian_day(
                    first.to_julian_day() + i32::try_from(total - 1).unwrap(),
                )
                .unwrap();
                assert_eq!(last, Date::MAX);
            } else {
                assert_eq!(range, None, "{start}");
            }
        }
    }

    #[test]
    fn test_month_stepping() {
        assert_eq!(
            prev_month(date!(2012 - 01 - 01)),
            Some(date!(2011 - 12 - 01))
        );
        assert_eq!(
            next_month(date!(2011 - 12 - 01)),
            Some(date!(2012 - 01 - 01))
        );
        assert_eq!(
            prev_month(date!(2012 - 06 - 01)),
            Some(date!(2012 - 05 - 01))
        );
        assert_eq!(next_month(Date::MAX), None);
        assert_eq!(prev_month(Date::MIN), None);
    }
}
