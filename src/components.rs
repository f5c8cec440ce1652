//! Dashboard components.
//!
//! Every widget implements [`Component`]: it can receive the action channel
//! and the config at startup, react to events and actions, and draw itself.
//! Components receive the whole frame area and carve out their slot with
//! [`dashboard_layout`], so a single draw pass over the component list paints
//! the full dashboard.

pub mod analog_clock;
pub mod calendar;
pub mod crypto_ticker;
pub mod digital_clock;
pub mod status_bar;
pub mod weather;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect, Size};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    config::Config,
    tui::{Event, Frame},
};

pub use analog_clock::AnalogClock;
pub use calendar::Calendar;
pub use crypto_ticker::CryptoTicker;
pub use digital_clock::DigitalClock;
pub use status_bar::StatusBar;
pub use weather::Weather;

pub trait Component {
    #[allow(unused_variables)]
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn init(&mut self, area: Size) -> Result<()> {
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        let r = match event {
            Some(Event::Key(key_event)) => self.handle_key_events(key_event)?,
            Some(Event::Mouse(mouse_event)) => self.handle_mouse_events(mouse_event)?,
            _ => None,
        };
        Ok(r)
    }

    #[allow(unused_variables)]
    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    #[allow(unused_variables)]
    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    #[allow(unused_variables)]
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}

/// Fixed slots of the dashboard.
pub struct DashboardAreas {
    pub weather: Rect,
    pub clock: Rect,
    pub calendar: Rect,
    pub ticker: Rect,
    pub status_bar: Rect,
}

pub fn dashboard_layout(area: Rect) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(5), // weather strip
            Constraint::Min(0),    // clock + calendar
            Constraint::Length(3), // crypto ticker
            Constraint::Length(2), // status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    DashboardAreas {
        weather: rows[0],
        clock: columns[0],
        calendar: columns[1],
        ticker: rows[2],
        status_bar: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_layout_partitions_the_frame() {
        let areas = dashboard_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(areas.weather.height, 5);
        assert_eq!(areas.ticker.height, 3);
        assert_eq!(areas.status_bar.height, 2);
        assert_eq!(areas.clock.height, areas.calendar.height);
        assert_eq!(areas.clock.height, 40 - 5 - 3 - 2);
        assert_eq!(areas.clock.width + areas.calendar.width, 120);
    }
}
