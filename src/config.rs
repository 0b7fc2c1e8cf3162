//! Widget configuration: labels, start of week, and the layout template.

use crate::calendar::WeekdayExt;
use time::{Month, Weekday};

/// Per-instance widget configuration.
///
/// Immutable after construction; every instance gets its own copy, with
/// [`Config::default`] matching the stock widget: English lowercase labels,
/// Sunday start, and the three-section [`Template`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Day-of-week abbreviations for the header, indexed Sunday..Saturday.
    pub day_abbrs: [String; 7],
    /// The weekday shown in the leftmost grid column.
    pub start_of_week: Weekday,
    /// Month names for the month label, indexed January..December.
    pub month_names: [String; 12],
    /// Which sections the widget renders, and in what order.
    pub template: Template,
}

impl Config {
    pub fn month_name(&self, month: Month) -> &str {
        &self.month_names[usize::from(u8::from(month)) - 1]
    }

    pub fn day_abbr(&self, weekday: Weekday) -> &str {
        &self.day_abbrs[usize::from(weekday.index0())]
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            day_abbrs: ["su", "mo", "tu", "we", "th", "fr", "sa"].map(String::from),
            start_of_week: Weekday::Sunday,
            month_names: [
                "january",
                "february",
                "march",
                "april",
                "may",
                "june",
                "july",
                "august",
                "september",
                "october",
                "november",
                "december",
            ]
            .map(String::from),
            template: Template::default(),
        }
    }
}

/// A structural marker naming one widget section.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Marker {
    MonthLabel,
    YearLabel,
    Header,
    Dates,
}

impl Marker {
    fn parse(token: &str) -> Option<Marker> {
        match token {
            "month" => Some(Marker::MonthLabel),
            "year" => Some(Marker::YearLabel),
            "header" => Some(Marker::Header),
            "dates" => Some(Marker::Dates),
            _ => None,
        }
    }
}

/// The widget's layout, as ordered rows of structural markers.
///
/// Parsed from marker lines; a row may hold several markers (e.g. a combined
/// month/year label line).  Unknown tokens are ignored, and templates without
/// label rows simply render without labels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    rows: Vec<Vec<Marker>>,
}

impl Template {
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Template {
        let rows = lines
            .iter()
            .map(|line| {
                line.as_ref()
                    .split_whitespace()
                    .filter_map(Marker::parse)
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        Template { rows }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Marker]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn contains(&self, marker: Marker) -> bool {
        self.rows.iter().any(|row| row.contains(&marker))
    }
}

impl Default for Template {
    fn default() -> Template {
        Template::parse(&["month year", "header", "dates"])
    }
}
