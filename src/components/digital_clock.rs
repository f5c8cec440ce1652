//! Digital clock with scale-aware glyph rendering.
//!
//! The time line is drawn with block glyphs whose cell size follows the
//! scale factor; the date line stays a plain text row. Auto-scale from
//! resizes and manual slider scale both funnel into the same [`ClockScale`],
//! last writer wins.

use chrono::{DateTime, Local};
use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{dashboard_layout, Component};
use crate::{
    action::Action,
    clock::{self, ClockMode, ClockScale},
    theme::{palette, ThemeMode},
    tui::Frame,
};

/// Nominal pixel width of one terminal cell, used to feed the pixel-based
/// auto-scale formula from a cell-based resize event.
const PX_PER_CELL: f64 = 8.0;

/// 5-row block font for `0`..`9` and `:`.
const GLYPHS: [[&str; 5]; 11] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
    [" ", "█", " ", "█", " "],
];

fn glyph(c: char) -> Option<&'static [&'static str; 5]> {
    match c {
        '0'..='9' => GLYPHS.get(c as usize - '0' as usize),
        ':' => GLYPHS.get(10),
        _ => None,
    }
}

/// Render `text` as block-glyph rows, stretching each glyph cell by the
/// given horizontal and vertical factors.
fn render_big(text: &str, sx: usize, sy: usize) -> Vec<String> {
    let mut rows = vec![String::new(); 5 * sy];
    for c in text.chars() {
        let Some(glyph_rows) = glyph(c) else {
            continue;
        };
        for (i, glyph_row) in glyph_rows.iter().enumerate() {
            let mut expanded = String::new();
            for cell in glyph_row.chars() {
                for _ in 0..sx {
                    expanded.push(cell);
                }
            }
            expanded.push(' ');
            for repeat in 0..sy {
                rows[i * sy + repeat].push_str(&expanded);
            }
        }
    }
    rows
}

pub struct DigitalClock {
    theme: ThemeMode,
    mode: ClockMode,
    scale: ClockScale,
    now: DateTime<Local>,
}

impl DigitalClock {
    pub fn new(theme: ThemeMode, mode: ClockMode, scale: f64) -> Self {
        Self {
            theme,
            mode,
            scale: ClockScale::new(scale),
            now: Local::now(),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale.factor()
    }

    /// Glyph stretch factors derived from the scaled time font size.
    fn stretch(&self) -> (usize, usize) {
        let sx = (self.scale.factor() * 2.0).round().max(1.0) as usize;
        (sx, sx.div_ceil(2))
    }
}

impl Component for DigitalClock {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::TickClock => self.now = Local::now(),
            Action::ThemeChanged(mode) => self.theme = mode,
            Action::ClockModeChanged(mode) => self.mode = mode,
            Action::ClockScaleChanged(factor) => self.scale.set(factor),
            Action::Resize(width, height) => {
                // auto-scale from the clock slot width; a slider action later
                // in the queue overrides this (last writer wins)
                let slot = dashboard_layout(Rect::new(0, 0, width, height)).clock;
                self.scale
                    .set(clock::auto_scale(f64::from(slot.width) * PX_PER_CELL));
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if self.mode != ClockMode::Digital {
            return Ok(());
        }
        let area = dashboard_layout(area).clock;
        let pal = palette(self.theme);

        let block = Block::default().borders(Borders::ALL).title("Clock");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (sx, sy) = self.stretch();
        let time_rows = render_big(&clock::format_time(&self.now), sx, sy);
        let time_height = time_rows.len() as u16;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),
                Constraint::Length(time_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let time_text = time_rows.join("\n");
        f.render_widget(
            Paragraph::new(time_text)
                .style(Style::default().fg(pal.text))
                .alignment(Alignment::Center),
            rows[1],
        );

        let date_style = if self.scale.date_size() >= clock::BASE_DATE_SIZE {
            Style::default().fg(pal.text).bold()
        } else {
            Style::default().fg(pal.muted)
        };
        f.render_widget(
            Paragraph::new(clock::format_date(&self.now))
                .style(date_style)
                .alignment(Alignment::Center),
            rows[3],
        );
        Ok(())
    }
}
