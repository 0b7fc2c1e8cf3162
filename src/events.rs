//! Fire-and-observe widget notifications.

use crate::calendar::DayCell;

/// A notification raised by a [`MonthCalendar`](crate::calendar::MonthCalendar).
///
/// Events queue up inside the widget and are drained with
/// [`poll_event`](crate::calendar::MonthCalendar::poll_event), keeping the
/// notification channel free of any UI-framework dispatch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CalendarEvent {
    /// Raised once per instance, immediately at construction.
    Created,
    /// Raised when a rendered day cell is selected, carrying a copy of its
    /// record.
    DaySelected(DayCell),
}
