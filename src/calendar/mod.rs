mod annotate;
mod cells;
pub mod grid;
mod state;
mod widget;
pub use self::annotate::{annotators, AnnotatorChain, AnnotatorHandle, DayAnnotator};
pub use self::cells::{DayCell, Modifier, Modifiers};
pub use self::grid::WeekdayExt;
pub use self::state::{MonthCalendar, OutOfCalendarError};
pub use self::widget::Calendar;
