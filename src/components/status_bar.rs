//! Bottom status bar: transient messages and key hints.

use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use super::{dashboard_layout, Component};
use crate::{action::Action, config::Config, tui::Frame};

const KEY_HINTS: &str =
    "q quit  t theme  c clock  u unit  +/- size  r refresh";

pub struct StatusBar {
    config: Config,
    message: Option<String>,
    city: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            message: None,
            city: None,
        }
    }

    fn message_line(&self) -> String {
        match (&self.message, &self.city) {
            (Some(message), _) => message.clone(),
            (None, Some(city)) => format!("📍 {city}"),
            (None, None) => String::new(),
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SystemMessage(message) => self.message = Some(message),
            Action::Error(message) => self.message = Some(format!("Error: {message}")),
            Action::LocationResolved(fix) => self.city = Some(fix.city),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let area = dashboard_layout(area).status_bar;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let message_style = self
            .config
            .styles
            .get("status_bar_message")
            .copied()
            .unwrap_or_default();
        f.render_widget(
            Paragraph::new(self.message_line()).style(message_style),
            rows[0],
        );

        let hints_style = self
            .config
            .styles
            .get("status_bar")
            .copied()
            .unwrap_or_else(|| Style::default().fg(Color::Gray).italic());
        f.render_widget(Paragraph::new(KEY_HINTS).style(hints_style), rows[1]);
        Ok(())
    }
}
