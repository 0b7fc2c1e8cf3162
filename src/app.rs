use crate::help::Help;
use crate::theme::{BASE_STYLE, STATUS_STYLE};
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use monthgrid::calendar::{Calendar, MonthCalendar};
use monthgrid::events::CalendarEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Position, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

/// Columns the calendar column occupies on screen
const CALENDAR_WIDTH: u16 = 28;

#[derive(Debug)]
pub(crate) struct App {
    calendar: MonthCalendar,
    selected: Option<Date>,
    state: AppState,
}

impl App {
    pub(crate) fn new(calendar: MonthCalendar) -> App {
        App {
            calendar,
            selected: None,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: ratatui::backend::Backend>(
        mut self,
        mut terminal: Terminal<B>,
    ) -> io::Result<()> {
        while !self.quitting() {
            self.drain_events();
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    // Move pending widget notifications into app state
    fn drain_events(&mut self) {
        while let Some(event) = self.calendar.poll_event() {
            match event {
                CalendarEvent::Created => (),
                CalendarEvent::DaySelected(cell) => self.selected = Some(cell.date()),
            }
        }
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        let event = read()?;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = event.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        } else if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                self.calendar
                    .select_at(Position::new(mouse.column, mouse.row));
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('p') | KeyCode::Left => self.calendar.draw_prev_month(None).is_ok(),
                KeyCode::Char('n') | KeyCode::Right => self.calendar.draw_next_month(None).is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    let today = self.calendar.today();
                    self.calendar.draw_month(today).is_ok()
                }
                KeyCode::Char('r') => {
                    self.calendar.update();
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn status_line(&self) -> String {
        match self.selected {
            Some(date) => format!("selected {date}"),
            None => String::from("p/n month · 0 today · ? help · q quit"),
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [calendar_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [calendar_area] = Layout::horizontal([Constraint::Length(CALENDAR_WIDTH)])
            .flex(Flex::Center)
            .areas(calendar_area);
        Calendar::new().render(calendar_area, buf, &mut self.calendar);
        buf.set_line(
            status_area.x,
            status_area.y,
            &Line::styled(self.status_line(), STATUS_STYLE),
            status_area.width,
        );
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}
