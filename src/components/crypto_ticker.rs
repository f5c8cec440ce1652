//! Rotating cryptocurrency ticker.
//!
//! Shows one coin at a time and advances on a rotation tick; each new coin
//! slides in from the right over a short animation window. A failed fetch
//! clears the list and the ticker shows placeholders until data returns.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{dashboard_layout, Component};
use crate::{
    action::Action,
    config::Config,
    services::crypto::{self, Coin},
    theme::{palette, ThemeMode},
    tui::Frame,
};

const SLIDE_DURATION: Duration = Duration::from_millis(300);

pub struct CryptoTicker {
    theme: ThemeMode,
    config: Config,
    coins: Vec<Coin>,
    index: usize,
    slide_started: Option<Instant>,
}

impl CryptoTicker {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            config: Config::default(),
            coins: Vec::new(),
            index: 0,
            slide_started: None,
        }
    }

    fn rotate(&mut self) {
        if self.coins.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.coins.len();
        self.slide_started = Some(Instant::now());
    }

    /// Fraction of the slide-in completed, 0.0 at the start and 1.0 once the
    /// animation window has passed.
    fn slide_progress(&self) -> f64 {
        match self.slide_started {
            Some(started) => {
                (started.elapsed().as_secs_f64() / SLIDE_DURATION.as_secs_f64()).min(1.0)
            }
            None => 1.0,
        }
    }

    fn change_style(&self, change_rate: f64) -> Style {
        let key = if change_rate >= 0.0 {
            "ticker_up"
        } else {
            "ticker_down"
        };
        self.config.styles.get(key).copied().unwrap_or_else(|| {
            if change_rate >= 0.0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            }
        })
    }

    fn line(&self) -> Line<'_> {
        let pal = palette(self.theme);
        let Some(coin) = self.coins.get(self.index) else {
            return Line::from(vec![
                Span::styled("--  ", Style::default().fg(pal.muted)),
                Span::styled("₩--  ", Style::default().fg(pal.muted)),
                Span::raw("⚪⚪⚪⚪⚪"),
            ]);
        };

        let icons = if coin.signals.is_empty() {
            crypto::trend_icons(coin.change_rate_24h).to_string()
        } else {
            crypto::signal_icons(&coin.signals)
        };
        Line::from(vec![
            Span::styled(
                format!("{}  ", coin.display_symbol()),
                Style::default().fg(pal.text).bold(),
            ),
            Span::styled(
                format!("{}  ", crypto::format_price(coin.closing_price)),
                Style::default().fg(pal.text),
            ),
            Span::styled(
                format!("{}  ", crypto::format_change(coin.change_rate_24h)),
                self.change_style(coin.change_rate_24h),
            ),
            Span::raw(icons),
        ])
    }
}

impl Component for CryptoTicker {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ThemeChanged(mode) => self.theme = mode,
            Action::RotateCoin => self.rotate(),
            Action::CryptoUpdated(Some(coins)) => {
                if self.index >= coins.len() {
                    self.index = 0;
                }
                self.coins = coins;
            }
            Action::CryptoUpdated(None) => {
                self.coins.clear();
                self.index = 0;
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let area = dashboard_layout(area).ticker;
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        // slide in from the right: shrink the leading indent as the
        // animation progresses
        let indent = ((1.0 - self.slide_progress()) * f64::from(inner.width) / 2.0) as usize;
        let mut line = self.line();
        if indent > 0 {
            line.spans.insert(0, Span::raw(" ".repeat(indent)));
        }
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn coin(symbol: &str, price: f64, change: f64) -> Coin {
        Coin {
            symbol: symbol.to_string(),
            closing_price: price,
            change_rate_24h: change,
            signals: Vec::new(),
            trade_value_24h: None,
        }
    }

    fn render(ticker: &mut CryptoTicker) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| {
                ticker.draw(f, f.area()).expect("draw");
            })
            .expect("frame");
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_placeholders_before_first_fetch() {
        let mut ticker = CryptoTicker::new(ThemeMode::Dark);
        let rendered = render(&mut ticker);
        assert!(rendered.contains("₩--"));
    }

    #[test]
    fn test_rotation_wraps_around() {
        let mut ticker = CryptoTicker::new(ThemeMode::Dark);
        ticker
            .update(Action::CryptoUpdated(Some(vec![
                coin("BTC_KRW", 95_000_000.0, 1.2),
                coin("ETH_KRW", 3_500_000.0, -0.8),
            ])))
            .expect("update");
        assert_eq!(ticker.index, 0);
        ticker.update(Action::RotateCoin).expect("update");
        assert_eq!(ticker.index, 1);
        ticker.update(Action::RotateCoin).expect("update");
        assert_eq!(ticker.index, 0);
    }

    #[test]
    fn test_rotation_restarts_slide() {
        let mut ticker = CryptoTicker::new(ThemeMode::Dark);
        ticker
            .update(Action::CryptoUpdated(Some(vec![
                coin("BTC_KRW", 95_000_000.0, 1.2),
                coin("ETH_KRW", 3_500_000.0, -0.8),
            ])))
            .expect("update");
        assert!(ticker.slide_started.is_none());
        ticker.update(Action::RotateCoin).expect("update");
        assert!(ticker.slide_started.is_some());
        assert!(ticker.slide_progress() < 1.0);
    }

    #[test]
    fn test_failed_fetch_clears_coins() {
        let mut ticker = CryptoTicker::new(ThemeMode::Dark);
        ticker
            .update(Action::CryptoUpdated(Some(vec![coin(
                "BTC_KRW",
                95_000_000.0,
                1.2,
            )])))
            .expect("update");
        assert!(render(&mut ticker).contains("BTC"));

        ticker.update(Action::CryptoUpdated(None)).expect("update");
        let rendered = render(&mut ticker);
        assert!(rendered.contains("₩--"));
        assert!(!rendered.contains("BTC"));
    }

    #[test]
    fn test_refresh_clamps_index() {
        let mut ticker = CryptoTicker::new(ThemeMode::Dark);
        ticker
            .update(Action::CryptoUpdated(Some(vec![
                coin("BTC_KRW", 95_000_000.0, 1.2),
                coin("ETH_KRW", 3_500_000.0, -0.8),
                coin("XRP_KRW", 800.0, 0.1),
            ])))
            .expect("update");
        ticker.update(Action::RotateCoin).expect("update");
        ticker.update(Action::RotateCoin).expect("update");
        assert_eq!(ticker.index, 2);

        ticker
            .update(Action::CryptoUpdated(Some(vec![coin(
                "BTC_KRW",
                95_000_000.0,
                1.2,
            )])))
            .expect("update");
        assert_eq!(ticker.index, 0);
    }

    #[test]
    fn test_renders_price_and_change() {
        let mut ticker = CryptoTicker::new(ThemeMode::Dark);
        ticker
            .update(Action::CryptoUpdated(Some(vec![coin(
                "BTC_KRW",
                95_000_000.0,
                1.23,
            )])))
            .expect("update");
        let rendered = render(&mut ticker);
        assert!(rendered.contains("₩95,000,000"));
        assert!(rendered.contains("(+1.23%)"));
    }
}
