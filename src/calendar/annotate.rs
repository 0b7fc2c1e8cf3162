//! The annotator chain: ordered, pluggable per-day classification logic.

use super::cells::{DayCell, Modifier};
use super::grid;
use std::fmt;
use std::iter::successors;
use time::{Date, Weekday};

/// Pluggable per-day annotation logic.
///
/// An annotator inspects one [`DayCell`] per visible date per render and may
/// append tags to it.  Any `Fn(&mut DayCell)` closure qualifies.
pub trait DayAnnotator {
    fn annotate(&self, cell: &mut DayCell);
}

impl<F: Fn(&mut DayCell)> DayAnnotator for F {
    fn annotate(&self, cell: &mut DayCell) {
        self(cell);
    }
}

/// Stable key identifying one registration in an [`AnnotatorChain`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnnotatorHandle(u64);

/// An ordered list of annotators, applied in registration order.
///
/// The same annotator may be registered more than once; each registration
/// gets its own handle, and deregistration removes exactly the registration
/// the handle names.  Changes to the chain only affect subsequent renders.
pub struct AnnotatorChain {
    next_handle: u64,
    entries: Vec<(AnnotatorHandle, Box<dyn DayAnnotator>)>,
}

impl AnnotatorChain {
    pub fn new() -> AnnotatorChain {
        AnnotatorChain {
            next_handle: 0,
            entries: Vec::new(),
        }
    }

    /// A chain pre-loaded with the default annotators, in order: today,
    /// previous month, next month, current month, first of month, last of
    /// month.
    pub fn with_defaults(today: Date) -> AnnotatorChain {
        let mut chain = AnnotatorChain::new();
        chain.register(annotators::today(today));
        chain.register(annotators::previous_month());
        chain.register(annotators::next_month());
        chain.register(annotators::current_month());
        chain.register(annotators::first_month_date());
        chain.register(annotators::last_month_date());
        chain
    }

    pub fn register<A: DayAnnotator + 'static>(&mut self, annotator: A) -> AnnotatorHandle {
        let handle = AnnotatorHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((handle, Box::new(annotator)));
        handle
    }

    /// Remove the registration identified by `handle`.  Returns `false` if no
    /// such registration exists.
    pub fn deregister(&mut self, handle: AnnotatorHandle) -> bool {
        match self.entries.iter().position(|&(h, _)| h == handle) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every annotator over `cell`, in registration order.
    pub fn annotate(&self, cell: &mut DayCell) {
        for (_, annotator) in &self.entries {
            annotator.annotate(cell);
        }
    }

    /// Build and annotate the full grid of cells for the month containing
    /// `anchor`, or `None` when the grid would run past an edge of the
    /// supported calendar range.
    pub fn annotate_month(&self, anchor: Date, start_of_week: Weekday) -> Option<Vec<DayCell>> {
        let anchor = grid::month_start(anchor);
        let (first, total) = grid::visible_range(anchor, start_of_week)?;
        let cells = successors(Some(first), |&d| d.next_day())
            .take(total)
            .map(|date| {
                let mut cell = DayCell::new(date, anchor);
                self.annotate(&mut cell);
                cell
            })
            .collect();
        Some(cells)
    }
}

impl Default for AnnotatorChain {
    fn default() -> AnnotatorChain {
        AnnotatorChain::new()
    }
}

impl fmt::Debug for AnnotatorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatorChain")
            .field(
                "handles",
                &self.entries.iter().map(|&(h, _)| h).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// The default annotators.
pub mod annotators {
    use super::{grid, DayAnnotator, DayCell, Modifier};
    use time::Date;

    fn year_month(date: Date) -> (i32, u8) {
        (date.year(), u8::from(date.month()))
    }

    /// Tags the cell matching the injected current date with `today`.
    pub fn today(today: Date) -> impl DayAnnotator {
        move |cell: &mut DayCell| {
            if cell.date() == today {
                cell.tag(Modifier::TODAY);
            }
        }
    }

    /// Tags leading cells from the month before the anchor with `prevMonth`.
    pub fn previous_month() -> impl DayAnnotator {
        |cell: &mut DayCell| {
            if year_month(cell.date()) < year_month(cell.anchor()) {
                cell.tag(Modifier::PREV_MONTH);
            }
        }
    }

    /// Tags trailing cells from the month after the anchor with `nextMonth`.
    pub fn next_month() -> impl DayAnnotator {
        |cell: &mut DayCell| {
            if year_month(cell.date()) > year_month(cell.anchor()) {
                cell.tag(Modifier::NEXT_MONTH);
            }
        }
    }

    /// Tags cells inside the anchor month with `currentMonth`.
    pub fn current_month() -> impl DayAnnotator {
        |cell: &mut DayCell| {
            if year_month(cell.date()) == year_month(cell.anchor()) {
                cell.tag(Modifier::CURRENT_MONTH);
            }
        }
    }

    /// Tags the first day of any visible month with `firstMonthDate`.
    pub fn first_month_date() -> impl DayAnnotator {
        |cell: &mut DayCell| {
            if cell.date().day() == 1 {
                cell.tag(Modifier::FIRST_MONTH_DATE);
            }
        }
    }

    /// Tags the last day of any visible month with `lastMonthDate`.
    pub fn last_month_date() -> impl DayAnnotator {
        |cell: &mut DayCell| {
            if grid::is_last_of_month(cell.date()) {
                cell.tag(Modifier::LAST_MONTH_DATE);
            }
        }
    }
}
