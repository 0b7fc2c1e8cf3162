//! Per-render date records and their classification tags.

use super::grid::WeekdayExt;
use time::{Date, Weekday};

/// A classification tag attached to a [`DayCell`] by an annotator.
///
/// The built-in tags use the associated constants below; annotators may also
/// introduce their own with [`Modifier::new`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Modifier(&'static str);

impl Modifier {
    pub const TODAY: Modifier = Modifier("today");
    pub const PREV_MONTH: Modifier = Modifier("prevMonth");
    pub const NEXT_MONTH: Modifier = Modifier("nextMonth");
    pub const CURRENT_MONTH: Modifier = Modifier("currentMonth");
    pub const FIRST_MONTH_DATE: Modifier = Modifier("firstMonthDate");
    pub const LAST_MONTH_DATE: Modifier = Modifier("lastMonthDate");

    const WEEKDAYS: [Modifier; 7] = [
        Modifier("su"),
        Modifier("mo"),
        Modifier("tu"),
        Modifier("we"),
        Modifier("th"),
        Modifier("fr"),
        Modifier("sa"),
    ];

    pub const fn new(tag: &'static str) -> Modifier {
        Modifier(tag)
    }

    /// The fixed day-of-week tag (`su` .. `sa`) for `weekday`.
    pub fn for_weekday(weekday: Weekday) -> Modifier {
        Modifier::WEEKDAYS[usize::from(weekday.index0())]
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// An ordered, duplicate-free list of [`Modifier`]s.
///
/// Insertion order is preserved; pushing a tag already present is a no-op.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, modifier: Modifier) {
        if !self.0.contains(&modifier) {
            self.0.push(modifier);
        }
    }
}

/// One cell of the rendered month grid.
///
/// Cells are built fresh on every render pass and owned by it; the date and
/// anchor are fixed at construction, and annotators may only append tags.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DayCell {
    date: Date,
    anchor: Date,
    modifiers: Modifiers,
}

impl DayCell {
    /// A cell for `date` in the grid anchored at `anchor`, pre-tagged with
    /// its day-of-week modifier.
    pub(super) fn new(date: Date, anchor: Date) -> DayCell {
        let mut modifiers = Modifiers::default();
        modifiers.push(Modifier::for_weekday(date.weekday()));
        DayCell {
            date,
            anchor,
            modifiers,
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    /// First day of the month this cell was rendered for, which may differ
    /// from the month of [`DayCell::date`] on leading/trailing cells.
    pub fn anchor(&self) -> Date {
        self.anchor
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// Append `modifier` unless already present.
    pub fn tag(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }
}
