//! The terminal rendering adapter: draws a [`MonthCalendar`]'s sections into
//! a ratatui buffer, in the order the configured template lists them.

use super::cells::{DayCell, Modifier};
use super::grid::DAYS_IN_WEEK;
use super::state::MonthCalendar;
use crate::config::{Config, Marker};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::StatefulWidget,
};

/// Number of columns per day of week
pub(super) const DAY_WIDTH: u16 = 4;

const GRID_WIDTH: u16 = DAY_WIDTH * 7;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Calendar;

impl Calendar {
    pub fn new() -> Calendar {
        Calendar
    }
}

impl StatefulWidget for Calendar {
    type State = MonthCalendar;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut MonthCalendar) {
        state.grid_area = None;
        let template = state.config().template.clone();
        let mut y = area.y;
        for row in template.rows() {
            if y >= area.bottom() {
                break;
            }
            if row.contains(&Marker::Dates) {
                y = render_dates(area, buf, state, y);
            } else if row.contains(&Marker::Header) {
                render_header(area, buf, state.config(), y);
                y += 1;
            } else {
                render_labels(area, buf, state, row, y);
                y += 1;
            }
        }
    }
}

fn render_labels(area: Rect, buf: &mut Buffer, state: &MonthCalendar, row: &[Marker], y: u16) {
    // Label sections stay blank until the first draw sets an anchor
    let Some(anchor) = state.get_date() else {
        return;
    };
    let mut text = String::new();
    for &marker in row {
        let part = match marker {
            Marker::MonthLabel => state.config().month_name(anchor.month()).to_owned(),
            Marker::YearLabel => anchor.year().to_string(),
            Marker::Header | Marker::Dates => continue,
        };
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&part);
    }
    buf.set_line(area.x, y, &Line::styled(text, Style::new().bold()), area.width);
}

fn render_header(area: Rect, buf: &mut Buffer, config: &Config, y: u16) {
    let mut spans = Vec::new();
    let mut weekday = config.start_of_week;
    for _ in 0..DAYS_IN_WEEK {
        spans.push(Span::styled(
            format!(
                "{:^width$}",
                config.day_abbr(weekday),
                width = usize::from(DAY_WIDTH)
            ),
            Style::new().bold(),
        ));
        weekday = weekday.next();
    }
    buf.set_line(area.x, y, &Line::from(spans), area.width);
}

fn render_dates(area: Rect, buf: &mut Buffer, state: &mut MonthCalendar, mut y: u16) -> u16 {
    let top = y;
    for week in state.cells.chunks(DAYS_IN_WEEK) {
        if y >= area.bottom() {
            break;
        }
        let spans = week.iter().map(cell_span).collect::<Vec<_>>();
        buf.set_line(area.x, y, &Line::from(spans), area.width);
        y += 1;
    }
    state.grid_area = (y > top).then(|| Rect {
        x: area.x,
        y: top,
        width: GRID_WIDTH.min(area.width),
        height: y - top,
    });
    y
}

fn cell_span(cell: &DayCell) -> Span<'static> {
    let s = if cell.modifiers().contains(Modifier::TODAY) {
        format!("[{:2}]", cell.date().day())
    } else {
        format!(" {:2} ", cell.date().day())
    };
    Span::styled(s, cell_style(cell))
}

fn cell_style(cell: &DayCell) -> Style {
    let modifiers = cell.modifiers();
    if modifiers.contains(Modifier::TODAY) {
        Style::new().bold()
    } else if modifiers.contains(Modifier::PREV_MONTH) || modifiers.contains(Modifier::NEXT_MONTH)
    {
        Style::new().dark_gray()
    } else {
        Style::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Template;
    use ratatui::layout::Position;
    use time::macros::date;
    use time::Weekday::Monday;

    fn rendered(state: &mut MonthCalendar, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        Calendar::new().render(area, &mut buffer, state);
        buffer
    }

    #[test]
    fn test_render_feb_2012() {
        let mut state = MonthCalendar::new(date!(2012 - 02 - 14));
        state.draw_month(date!(2012 - 02 - 14)).unwrap();
        let buffer = rendered(&mut state, 28, 8);
        let mut expected = Buffer::with_lines([
            "february 2012               ",
            " su  mo  tu  we  th  fr  sa ",
            " 29  30  31   1   2   3   4 ",
            "  5   6   7   8   9  10  11 ",
            " 12  13 [14] 15  16  17  18 ",
            " 19  20  21  22  23  24  25 ",
            " 26  27  28  29   1   2   3 ",
            "                            ",
        ]);
        let bold = Style::new().bold();
        let dim = Style::new().dark_gray();
        expected.set_style(Rect::new(0, 0, 13, 1), bold);
        expected.set_style(Rect::new(0, 1, 28, 1), bold);
        expected.set_style(Rect::new(0, 2, 12, 1), dim);
        expected.set_style(Rect::new(8, 4, 4, 1), bold);
        expected.set_style(Rect::new(16, 6, 12, 1), dim);
        assert_eq!(buffer, expected);
        assert_eq!(state.grid_area, Some(Rect::new(0, 2, 28, 5)));
    }

    #[test]
    fn test_render_before_first_draw() {
        let mut state = MonthCalendar::new(date!(2012 - 02 - 14));
        let buffer = rendered(&mut state, 28, 4);
        let mut expected = Buffer::with_lines([
            "                            ",
            " su  mo  tu  we  th  fr  sa ",
            "                            ",
            "                            ",
        ]);
        expected.set_style(Rect::new(0, 1, 28, 1), Style::new().bold());
        assert_eq!(buffer, expected);
        assert_eq!(state.grid_area, None);
    }

    #[test]
    fn test_render_monday_start_rotates_header() {
        let config = Config {
            start_of_week: Monday,
            ..Config::default()
        };
        let mut state = MonthCalendar::new(date!(2012 - 02 - 14)).with_config(config);
        state.draw_month(date!(2012 - 02 - 14)).unwrap();
        let buffer = rendered(&mut state, 28, 8);
        let mut expected = Buffer::with_lines([
            "february 2012               ",
            " mo  tu  we  th  fr  sa  su ",
            " 30  31   1   2   3   4   5 ",
            "  6   7   8   9  10  11  12 ",
            " 13 [14] 15  16  17  18  19 ",
            " 20  21  22  23  24  25  26 ",
            " 27  28  29   1   2   3   4 ",
            "                            ",
        ]);
        let bold = Style::new().bold();
        let dim = Style::new().dark_gray();
        expected.set_style(Rect::new(0, 0, 13, 1), bold);
        expected.set_style(Rect::new(0, 1, 28, 1), bold);
        expected.set_style(Rect::new(0, 2, 8, 1), dim);
        expected.set_style(Rect::new(4, 4, 4, 1), bold);
        expected.set_style(Rect::new(12, 6, 16, 1), dim);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_render_template_without_labels() {
        let config = Config {
            template: Template::parse(&["header", "dates"]),
            ..Config::default()
        };
        let mut state = MonthCalendar::new(date!(2012 - 02 - 14)).with_config(config);
        state.draw_month(date!(2012 - 02 - 14)).unwrap();
        let buffer = rendered(&mut state, 28, 6);
        let mut expected = Buffer::with_lines([
            " su  mo  tu  we  th  fr  sa ",
            " 29  30  31   1   2   3   4 ",
            "  5   6   7   8   9  10  11 ",
            " 12  13 [14] 15  16  17  18 ",
            " 19  20  21  22  23  24  25 ",
            " 26  27  28  29   1   2   3 ",
        ]);
        let bold = Style::new().bold();
        let dim = Style::new().dark_gray();
        expected.set_style(Rect::new(0, 0, 28, 1), bold);
        expected.set_style(Rect::new(0, 1, 12, 1), dim);
        expected.set_style(Rect::new(8, 3, 4, 1), bold);
        expected.set_style(Rect::new(16, 5, 12, 1), dim);
        assert_eq!(buffer, expected);
        assert_eq!(state.grid_area, Some(Rect::new(0, 1, 28, 5)));
    }

    #[test]
    fn test_click_resolution_after_render() {
        let mut state = MonthCalendar::new(date!(2012 - 02 - 14));
        state.draw_month(date!(2012 - 02 - 14)).unwrap();
        let _ = rendered(&mut state, 28, 8);
        let _ = state.poll_event();

        assert!(state.select_at(Position::new(8, 4)));
        let Some(crate::events::CalendarEvent::DaySelected(cell)) = state.poll_event() else {
            panic!("expected a day-selected event");
        };
        assert_eq!(cell.date(), date!(2012 - 02 - 14));
        assert!(cell.modifiers().contains(Modifier::TODAY));

        // The label row is not selectable
        assert!(!state.select_at(Position::new(0, 0)));
    }
}
