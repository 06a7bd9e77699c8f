use super::{Command, CommandError};
use crate::core::Session;
use crate::output::OutputSink;
use chrono::{Datelike, Local, Month, NaiveDate};

/// Seven two-column days with single spaces between them.
const GRID_WIDTH: usize = 20;
const WEEK_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Lays out `month` of `year` as a text calendar, weeks starting on Monday.
/// Returns `None` for an invalid month.
pub fn render_month(year: i32, month: u32) -> Option<Vec<String>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let name = Month::try_from(u8::try_from(month).ok()?).ok()?.name();
    let days = days_in_month(first)?;

    let mut lines = vec![centered(&format!("{} {}", name, year)), WEEK_HEADER.to_string()];

    let mut cells: Vec<String> = vec!["  ".to_string(); first.weekday().num_days_from_monday() as usize];
    cells.extend((1..=days).map(|day| format!("{:>2}", day)));

    for week in cells.chunks(7) {
        lines.push(week.join(" ").trim_end().to_string());
    }
    Some(lines)
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    Some(next.pred_opt()?.day())
}

fn centered(title: &str) -> String {
    let pad = GRID_WIDTH.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), title)
}

#[derive(Clone, Default)]
pub struct CalCommand;

impl CalCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CalCommand {
    fn execute(
        &self,
        _args: &[String],
        _session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        let today = Local::now().date_naive();
        // the current date always names a valid month
        for line in render_month(today.year(), today.month()).unwrap_or_default() {
            out.output(&line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::UserIdentity;
    use crate::output::Scrollback;

    #[test]
    fn test_february_starting_monday() {
        assert_eq!(
            render_month(2021, 2).unwrap(),
            vec![
                "   February 2021",
                "Mo Tu We Th Fr Sa Su",
                " 1  2  3  4  5  6  7",
                " 8  9 10 11 12 13 14",
                "15 16 17 18 19 20 21",
                "22 23 24 25 26 27 28",
            ]
        );
    }

    #[test]
    fn test_month_with_leading_blanks() {
        assert_eq!(
            render_month(2026, 10).unwrap(),
            vec![
                "    October 2026",
                "Mo Tu We Th Fr Sa Su",
                "          1  2  3  4",
                " 5  6  7  8  9 10 11",
                "12 13 14 15 16 17 18",
                "19 20 21 22 23 24 25",
                "26 27 28 29 30 31",
            ]
        );
    }

    #[test]
    fn test_december_and_leap_february() {
        let december = render_month(2025, 12).unwrap();
        assert_eq!(december[0], "   December 2025");
        assert_eq!(december.last().map(String::as_str), Some("29 30 31"));

        let leap = render_month(2024, 2).unwrap();
        assert!(leap.last().unwrap().ends_with("29"));
    }

    #[test]
    fn test_invalid_month() {
        assert!(render_month(2024, 0).is_none());
        assert!(render_month(2024, 13).is_none());
    }

    #[test]
    fn test_cal_prints_current_month() {
        let mut session = Session::with_identity(UserIdentity::new("tester", "box"));
        let mut out = Scrollback::new();
        CalCommand::new().execute(&[], &mut session, &mut out).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.len() >= 6);
        assert_eq!(lines[1], WEEK_HEADER);
        assert!(lines[0].ends_with(&Local::now().year().to_string()));
    }
}
