//! Analog clock face rendered on a braille canvas.

use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
};

use super::{dashboard_layout, Component};
use crate::{
    action::Action,
    clock::{
        self, ClockMode, ClockReading, FACE_RADIUS, HOUR_HAND_LENGTH, MINUTE_HAND_LENGTH,
        SECOND_HAND_LENGTH,
    },
    theme::{palette, ThemeMode},
    tui::Frame,
};

pub struct AnalogClock {
    theme: ThemeMode,
    mode: ClockMode,
    scale: f64,
    reading: ClockReading,
}

impl AnalogClock {
    pub fn new(theme: ThemeMode, mode: ClockMode, scale: f64) -> Self {
        Self {
            theme,
            mode,
            scale,
            reading: ClockReading::now(),
        }
    }

    fn hand(&self, angle_deg: f64, length: f64, color: Color) -> CanvasLine {
        // painter coordinates have y growing downward, the canvas upward
        let (x, y) = clock::hand_endpoint(angle_deg, length);
        CanvasLine {
            x1: 0.0,
            y1: 0.0,
            x2: x,
            y2: -y,
            color,
        }
    }
}

impl Component for AnalogClock {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::TickClock => self.reading = ClockReading::now(),
            Action::ThemeChanged(mode) => self.theme = mode,
            Action::ClockModeChanged(mode) => self.mode = mode,
            Action::ClockScaleChanged(factor) => self.scale = factor,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if self.mode != ClockMode::Analog {
            return Ok(());
        }
        let area = dashboard_layout(area).clock;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let pal = palette(self.theme);
        let reading = self.reading;
        // larger scale zooms the face in by shrinking the canvas bounds
        let bound = (FACE_RADIUS + 10.0) / self.scale;

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Clock"))
            .x_bounds([-bound, bound])
            .y_bounds([-bound, bound])
            .paint(|ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: FACE_RADIUS,
                    color: pal.face,
                });
                for tick in clock::face_ticks() {
                    ctx.draw(&CanvasLine {
                        x1: tick.x1,
                        y1: -tick.y1,
                        x2: tick.x2,
                        y2: -tick.y2,
                        color: pal.face,
                    });
                }
                ctx.draw(&self.hand(
                    clock::hour_hand_deg(reading.hour, reading.minute),
                    HOUR_HAND_LENGTH,
                    pal.hand,
                ));
                ctx.draw(&self.hand(
                    clock::minute_hand_deg(reading.minute, reading.second),
                    MINUTE_HAND_LENGTH,
                    pal.hand,
                ));
                ctx.draw(&self.hand(
                    clock::second_hand_deg(reading.second),
                    SECOND_HAND_LENGTH,
                    pal.second_hand,
                ));
            });
        f.render_widget(canvas, rows[0]);

        let caption = format!(
            "{:02}:{:02}:{:02}",
            reading.hour, reading.minute, reading.second
        );
        f.render_widget(
            Paragraph::new(caption)
                .style(Style::default().fg(pal.text))
                .alignment(Alignment::Center),
            rows[1],
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_theme_and_scale_follow_actions() {
        let mut clock = AnalogClock::new(ThemeMode::Dark, ClockMode::Analog, 1.0);
        clock
            .update(Action::ThemeChanged(ThemeMode::Light))
            .expect("update");
        clock.update(Action::ClockScaleChanged(2.0)).expect("update");
        assert_eq!(clock.theme, ThemeMode::Light);
        assert_eq!(clock.scale, 2.0);
    }

    #[test]
    fn test_draw_renders_caption() {
        let mut clock = AnalogClock::new(ThemeMode::Dark, ClockMode::Analog, 1.0);
        clock.reading = ClockReading {
            hour: 10,
            minute: 30,
            second: 45,
        };
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| {
                clock.draw(f, f.area()).expect("draw");
            })
            .expect("frame");
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("10:30:45"));
    }

    #[test]
    fn test_hidden_when_digital_mode() {
        let mut clock = AnalogClock::new(ThemeMode::Dark, ClockMode::Digital, 1.0);
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| {
                clock.draw(f, f.area()).expect("draw");
            })
            .expect("frame");
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(!rendered.contains("Clock"));
    }
}
