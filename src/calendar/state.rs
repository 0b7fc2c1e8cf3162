//! Widget instance state: the anchor month, the annotator chain, and the
//! cells of the current render.

use super::annotate::{AnnotatorChain, AnnotatorHandle, DayAnnotator};
use super::cells::DayCell;
use super::grid::{self, DAYS_IN_WEEK};
use crate::config::Config;
use crate::events::CalendarEvent;
use ratatui::layout::{Position, Rect};
use std::collections::VecDeque;
use thiserror::Error;
use time::Date;

/// A month-view calendar instance.
///
/// Holds the currently displayed month (as its first day), the live annotator
/// chain, the cells produced by the latest draw, and the pending notification
/// queue.  Drawing operations replace the whole cell list in one pass; the
/// [`Calendar`](super::Calendar) widget renders whatever the latest draw
/// produced.
#[derive(Debug)]
pub struct MonthCalendar {
    today: Date,
    config: Config,
    chain: AnnotatorChain,
    anchor: Option<Date>,
    pub(super) cells: Vec<DayCell>,
    events: VecDeque<CalendarEvent>,
    // Screen rectangle the date grid occupied on the last render, for
    // resolving clicks back to cells.
    pub(super) grid_area: Option<Rect>,
}

impl MonthCalendar {
    /// A calendar with the default configuration and default annotator chain.
    ///
    /// `today` is injected rather than read from the clock so that all
    /// annotation stays deterministic; the binary passes the real local date.
    pub fn new(today: Date) -> MonthCalendar {
        let mut calendar = MonthCalendar {
            today,
            config: Config::default(),
            chain: AnnotatorChain::with_defaults(today),
            anchor: None,
            cells: Vec::new(),
            events: VecDeque::new(),
            grid_area: None,
        };
        calendar.events.push_back(CalendarEvent::Created);
        calendar
    }

    pub fn with_config(mut self, config: Config) -> MonthCalendar {
        self.config = config;
        self
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The cells of the latest draw, in grid order.  Empty until the first
    /// draw.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Display the month containing `date`: set the anchor to the month's
    /// first day and rebuild every cell through the grid calculator and the
    /// annotator chain.
    ///
    /// Fails when the month's grid would run past an edge of the supported
    /// calendar range, leaving the displayed month unchanged.
    pub fn draw_month(&mut self, date: Date) -> Result<(), OutOfCalendarError> {
        let anchor = grid::month_start(date);
        self.cells = self
            .chain
            .annotate_month(anchor, self.config.start_of_week)
            .ok_or(OutOfCalendarError)?;
        self.anchor = Some(anchor);
        Ok(())
    }

    /// Display the month before `date`'s month, defaulting to the current
    /// anchor, or today if nothing has been drawn yet.
    pub fn draw_prev_month(&mut self, date: Option<Date>) -> Result<(), OutOfCalendarError> {
        let base = date.or(self.anchor).unwrap_or(self.today);
        let anchor = grid::prev_month(grid::month_start(base)).ok_or(OutOfCalendarError)?;
        self.draw_month(anchor)
    }

    /// Display the month after `date`'s month, defaulting to the current
    /// anchor, or today if nothing has been drawn yet.
    pub fn draw_next_month(&mut self, date: Option<Date>) -> Result<(), OutOfCalendarError> {
        let base = date.or(self.anchor).unwrap_or(self.today);
        let anchor = grid::next_month(grid::month_start(base)).ok_or(OutOfCalendarError)?;
        self.draw_month(anchor)
    }

    /// The anchor of the displayed month, by value.  `None` until the first
    /// draw.
    pub fn get_date(&self) -> Option<Date> {
        self.anchor
    }

    /// Rebuild every cell of the current month from scratch, picking up any
    /// annotator-chain changes.  No-op before the first draw.
    pub fn update(&mut self) {
        if let Some(anchor) = self.anchor {
            // The anchor came from a successful draw, so redrawing it cannot
            // leave the calendar range
            let _ = self.draw_month(anchor);
        }
    }

    /// Append an annotator to the chain.  Takes effect on the next draw.
    pub fn register_annotator<A: DayAnnotator + 'static>(
        &mut self,
        annotator: A,
    ) -> AnnotatorHandle {
        self.chain.register(annotator)
    }

    /// Remove an annotator registration.  Cells already rendered keep their
    /// tags; only subsequent draws are affected.
    pub fn deregister_annotator(&mut self, handle: AnnotatorHandle) -> bool {
        self.chain.deregister(handle)
    }

    /// Resolve a screen position to the rendered day cell under it and raise
    /// [`CalendarEvent::DaySelected`] with a copy of its record.  Positions
    /// outside the grid are ignored.  Returns whether a cell was hit.
    pub fn select_at(&mut self, position: Position) -> bool {
        match self.cell_index_at(position) {
            Some(i) => {
                let cell = self.cells[i].clone();
                self.events.push_back(CalendarEvent::DaySelected(cell));
                true
            }
            None => false,
        }
    }

    /// Take the next pending notification, oldest first.
    pub fn poll_event(&mut self) -> Option<CalendarEvent> {
        self.events.pop_front()
    }

    fn cell_index_at(&self, position: Position) -> Option<usize> {
        let area = self.grid_area?;
        if !area.contains(position) {
            return None;
        }
        let col = usize::from((position.x - area.x) / super::widget::DAY_WIDTH);
        let row = usize::from(position.y - area.y);
        if col >= DAYS_IN_WEEK {
            return None;
        }
        let index = row * DAYS_IN_WEEK + col;
        (index < self.cells.len()).then_some(index)
    }
}

/// Month navigation ran off the edge of the supported calendar range.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("month outside the supported calendar range")]
pub struct OutOfCalendarError;
