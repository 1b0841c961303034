//! Gantt chart rendering for taskchart
//!
//! Maps a list of date-ranged tasks onto a fixed-width character timeline:
//! three header lines (month markers, sparse day stamps, separator) followed
//! by one positioned, colored, optionally-labeled bar per task. The timeline
//! is computed once per render call and shared by every row; rendering is a
//! pure function of the task list.

use chrono::{Datelike, Duration, NaiveDate};
use colored::Colorize;

use crate::model::Task;

/// Default number of chart columns
pub const DEFAULT_CHART_WIDTH: usize = 50;

/// Width of the task-name label column, including its padding
const LABEL_WIDTH: usize = 20;

/// Names longer than this are truncated before padding
const NAME_WIDTH: usize = LABEL_WIDTH - 1;

/// Fill glyph for task bars
const FILL: &str = "=";

/// An RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse a `#RRGGBB` hex color.
///
/// Accepts an optional leading `#` and exactly six hex digits, any case.
/// Anything else is not a color and yields `None`; callers fall back to the
/// default bar color rather than erroring.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Derive initials from a full name: first character of each
/// whitespace-separated token. Runs of spaces collapse.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// The shared date-to-column mapping for one render call.
///
/// Immutable once built; every bar position and length is computed relative
/// to `min_date` and `days_per_column`.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    min_date: NaiveDate,
    max_date: NaiveDate,
    total_days: i64,
    chart_width: usize,
    days_per_column: i64,
}

impl Timeline {
    /// Compute the timeline spanning all tasks.
    ///
    /// An empty task list anchors at today (header-only charts). When every
    /// task falls on a single day, `days_per_column` still resolves to 1.
    pub fn from_tasks(tasks: &[Task], chart_width: usize) -> Self {
        let chart_width = chart_width.max(1);
        let today = chrono::Local::now().date_naive();
        let min_date = tasks.iter().map(|t| t.start).min().unwrap_or(today);
        let max_date = tasks.iter().map(|t| t.end).max().unwrap_or(today);
        let total_days = (max_date - min_date).num_days().max(0);
        let days_per_column = ((total_days + chart_width as i64 - 1) / chart_width as i64).max(1);

        Self {
            min_date,
            max_date,
            total_days,
            chart_width,
            days_per_column,
        }
    }

    /// Date represented by the left edge of a column.
    fn column_date(&self, column: usize) -> NaiveDate {
        self.min_date + Duration::days(column as i64 * self.days_per_column)
    }

    /// Column where a task's bar starts.
    pub fn start_column(&self, start: NaiveDate) -> usize {
        ((start - self.min_date).num_days().max(0) / self.days_per_column) as usize
    }

    /// Width of a task's bar in columns, always at least 1.
    pub fn bar_columns(&self, start: NaiveDate, end: NaiveDate) -> usize {
        (((end - start).num_days().max(0) + self.days_per_column - 1) / self.days_per_column)
            .max(1) as usize
    }

    pub fn days_per_column(&self) -> i64 {
        self.days_per_column
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }
}

/// Render a full chart: three header lines, then one line per task in input
/// order. The caller owns the sink; this never prints.
pub fn render_chart(tasks: &[Task], chart_width: usize) -> Vec<String> {
    let timeline = Timeline::from_tasks(tasks, chart_width);
    tracing::debug!(
        min = %timeline.min_date,
        max = %timeline.max_date,
        total_days = timeline.total_days,
        days_per_column = timeline.days_per_column,
        "computed chart timeline"
    );

    let mut lines = vec![
        month_header(&timeline),
        day_header(&timeline),
        separator(&timeline),
    ];
    lines.extend(tasks.iter().map(|task| task_row(task, &timeline)));
    lines
}

/// Month marker row: the month's first letter at each column where the month
/// changes, scanning left to right. The previous month threads through the
/// fold as the accumulator.
fn month_header(timeline: &Timeline) -> String {
    let label = format!("{:<width$}", "Task", width = LABEL_WIDTH);
    let mut line = format!("{}{}", label.bold(), "|".bold());

    let (cells, _) = (0..timeline.chart_width).fold(
        (String::new(), None::<String>),
        |(mut cells, previous), column| {
            let month = timeline.column_date(column).format("%b").to_string();
            if previous.as_deref() == Some(month.as_str()) {
                cells.push(' ');
            } else {
                cells.push_str(&month[..1].blue().to_string());
            }
            (cells, Some(month))
        },
    );

    line.push_str(&cells);
    line
}

/// Day stamp row: a two-digit day-of-month every seven columns (tens digit,
/// then units digit), spaces elsewhere.
fn day_header(timeline: &Timeline) -> String {
    let mut line = format!("{}{}", " ".repeat(LABEL_WIDTH), "|".bold());
    for column in 0..timeline.chart_width {
        let day = timeline.column_date(column).day();
        let digit = match column % 7 {
            0 => char::from_digit(day / 10, 10),
            1 => char::from_digit(day % 10, 10),
            _ => None,
        };
        match digit {
            Some(d) => line.push_str(&d.to_string().bright_black().to_string()),
            None => line.push(' '),
        }
    }
    line
}

/// Purely visual dash row under the headers.
fn separator(timeline: &Timeline) -> String {
    format!(
        "{}{}{}",
        " ".repeat(LABEL_WIDTH),
        "|".bold(),
        "-".repeat(timeline.chart_width).bright_black()
    )
}

/// One task row: padded label, leading spaces, the bar, trailing padding.
///
/// Bars are not clipped at the right edge; floor/ceil rounding can overrun
/// the chart width by one column for tasks ending at the far edge, and the
/// trailing padding clamps at zero in that case.
fn task_row(task: &Task, timeline: &Timeline) -> String {
    let name: String = task.name.chars().take(NAME_WIDTH).collect();
    let start_col = timeline.start_column(task.start);
    let bar_cols = timeline.bar_columns(task.start, task.end);

    let label = format!("{:<width$}", name, width = LABEL_WIDTH);
    let mut line = format!("{}{}", label.white(), "|".bold());
    line.push_str(&" ".repeat(start_col));

    let rgb = task.color.as_deref().and_then(hex_to_rgb);
    let ini = task.assignee.as_deref().map(initials).unwrap_or_default();
    let ini_len = ini.chars().count();

    if bar_cols > 2 && !ini.is_empty() && ini_len <= bar_cols {
        let left = (bar_cols - ini_len) / 2;
        let right = bar_cols - left - ini_len;
        line.push_str(&paint(&FILL.repeat(left), rgb));
        line.push_str(&paint(&ini, rgb));
        line.push_str(&paint(&FILL.repeat(right), rgb));
    } else {
        line.push_str(&paint(&FILL.repeat(bar_cols), rgb));
    }

    line.push_str(&" ".repeat(
        timeline.chart_width.saturating_sub(start_col + bar_cols),
    ));
    line
}

/// Apply the task color, or the default bar color when none parses.
fn paint(text: &str, rgb: Option<Rgb>) -> String {
    match rgb {
        Some(Rgb { r, g, b }) => text.truecolor(r, g, b).to_string(),
        None => text.blue().to_string(),
    }
}
