//! A month-view calendar widget for the terminal.
//!
//! The computation core is UI-free: [`calendar::grid`] figures out which
//! dates a month's 7-column grid shows, and a [`calendar::AnnotatorChain`]
//! tags each [`calendar::DayCell`] with classifications like `today` or
//! `prevMonth`.  [`calendar::MonthCalendar`] holds one widget instance's
//! state (anchor month, chain, notification queue), and [`calendar::Calendar`]
//! is the ratatui adapter that renders it and resolves clicks back to cells.

pub mod calendar;
pub mod config;
pub mod events;
