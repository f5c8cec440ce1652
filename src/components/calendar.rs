//! Month calendar with today highlighted.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{dashboard_layout, Component};
use crate::{
    action::Action,
    theme::{palette, ThemeMode},
    tui::Frame,
};

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Sunday-first month grid. Each week has seven slots; leading and trailing
/// slots outside the month are `None`.
fn month_grid(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = leading;
    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub struct Calendar {
    theme: ThemeMode,
    today: NaiveDate,
}

impl Calendar {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            today: Local::now().date_naive(),
        }
    }
}

impl Component for Calendar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // the date can roll over at midnight while the app keeps running
            Action::TickClock => self.today = Local::now().date_naive(),
            Action::ThemeChanged(mode) => self.theme = mode,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let area = dashboard_layout(area).calendar;
        let pal = palette(self.theme);

        let title = self.today.format("%B %Y").to_string();
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = vec![Line::from(Span::styled(
            WEEKDAY_HEADER,
            Style::default().fg(pal.muted).bold(),
        ))];
        for week in month_grid(self.today.year(), self.today.month()) {
            let mut spans = Vec::with_capacity(14);
            for (i, slot) in week.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                match slot {
                    Some(day) if *day == self.today.day() => spans.push(Span::styled(
                        format!("{day:2}"),
                        Style::default().fg(pal.highlight).bold().reversed(),
                    )),
                    Some(day) => spans.push(Span::styled(
                        format!("{day:2}"),
                        Style::default().fg(pal.text),
                    )),
                    None => spans.push(Span::raw("  ")),
                }
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "{} ({})",
                self.today.format("%Y-%m-%d"),
                weekday_name(self.today.weekday())
            ),
            Style::default().fg(pal.muted),
        )));

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
        Ok(())
    }
}
