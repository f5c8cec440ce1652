//! Weather strip: current conditions, humidity, PM2.5 and location.
//!
//! Fetch results arrive through the action channel as `Option`s; `None` means
//! the fetch failed and the strip falls back to placeholders instead of
//! keeping stale numbers.

use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{dashboard_layout, Component};
use crate::{
    action::Action,
    services::location::LocationFix,
    services::weather::{AirQuality, CurrentWeather},
    theme::{palette, ThemeMode},
    tui::Frame,
    weather::{describe_wmo, pm25_band, wmo_icon, TempUnit},
};

pub struct Weather {
    theme: ThemeMode,
    unit: TempUnit,
    location: LocationFix,
    weather: Option<CurrentWeather>,
    air: Option<AirQuality>,
    loading: bool,
}

impl Weather {
    pub fn new(theme: ThemeMode, unit: TempUnit) -> Self {
        Self {
            theme,
            unit,
            location: LocationFix::fallback(),
            weather: None,
            air: None,
            loading: true,
        }
    }

    fn conditions_line(&self) -> String {
        match &self.weather {
            Some(current) => format!(
                "{} {}  {}  💨 {:.1} km/h",
                wmo_icon(current.weather_code),
                self.unit.format(current.temperature),
                describe_wmo(current.weather_code),
                current.wind_speed,
            ),
            None if self.loading => "Loading weather...".to_string(),
            None => format!("🌡️ {}  No weather data", self.unit.placeholder()),
        }
    }

    fn details_line(&self) -> String {
        let humidity = match &self.weather {
            Some(current) => format!("💧 {:.0}%", current.humidity),
            None => "💧 --%".to_string(),
        };
        let air = match &self.air {
            Some(air) => format!("PM2.5 {:.0} ({})", air.pm25, pm25_band(air.pm25)),
            None => "PM2.5 --".to_string(),
        };
        format!("{humidity}  {air}  📍 {}", self.location.city)
    }
}

impl Component for Weather {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ThemeChanged(mode) => self.theme = mode,
            Action::TempUnitChanged(unit) => self.unit = unit,
            Action::LocationResolved(fix) => self.location = fix,
            Action::WeatherUpdated(current) => {
                self.weather = current;
                self.loading = false;
            }
            Action::AirQualityUpdated(air) => self.air = air,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let area = dashboard_layout(area).weather;
        let pal = palette(self.theme);

        let block = Block::default().borders(Borders::ALL).title("Weather");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                self.conditions_line(),
                Style::default().fg(pal.text).bold(),
            )),
            Line::from(Span::styled(
                self.details_line(),
                Style::default().fg(pal.muted),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn sample_weather() -> CurrentWeather {
        CurrentWeather {
            temperature: 21.3,
            humidity: 62.0,
            weather_code: 3,
            wind_speed: 8.4,
        }
    }

    fn render(weather: &mut Weather) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| {
                weather.draw(f, f.area()).expect("draw");
            })
            .expect("frame");
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_loading_then_conditions() {
        let mut weather = Weather::new(ThemeMode::Dark, TempUnit::Celsius);
        assert!(render(&mut weather).contains("Loading weather..."));

        weather
            .update(Action::WeatherUpdated(Some(sample_weather())))
            .expect("update");
        let rendered = render(&mut weather);
        assert!(rendered.contains("21.3°C"));
        assert!(rendered.contains("Overcast"));
    }

    #[test]
    fn test_failed_fetch_shows_placeholders() {
        let mut weather = Weather::new(ThemeMode::Dark, TempUnit::Celsius);
        weather
            .update(Action::WeatherUpdated(Some(sample_weather())))
            .expect("update");
        weather.update(Action::WeatherUpdated(None)).expect("update");
        weather.update(Action::AirQualityUpdated(None)).expect("update");

        let rendered = render(&mut weather);
        assert!(rendered.contains("No weather data"));
        assert!(rendered.contains("--°C"));
        assert!(rendered.contains("PM2.5 --"));
        assert!(!rendered.contains("21.3"));
    }

    #[test]
    fn test_unit_toggle_is_display_only() {
        let mut weather = Weather::new(ThemeMode::Dark, TempUnit::Celsius);
        weather
            .update(Action::WeatherUpdated(Some(CurrentWeather {
                temperature: 0.0,
                ..sample_weather()
            })))
            .expect("update");
        weather
            .update(Action::TempUnitChanged(TempUnit::Fahrenheit))
            .expect("update");
        assert!(render(&mut weather).contains("32.0°F"));
        assert_eq!(
            weather.weather.as_ref().map(|w| w.temperature),
            Some(0.0)
        );
    }

    #[test]
    fn test_air_quality_band_rendered() {
        let mut weather = Weather::new(ThemeMode::Dark, TempUnit::Celsius);
        weather
            .update(Action::AirQualityUpdated(Some(AirQuality {
                pm25: 40.0,
                pm10: 60.0,
            })))
            .expect("update");
        assert!(render(&mut weather).contains("PM2.5 40 (Unhealthy)"));
    }

    #[test]
    fn test_location_shown() {
        let mut weather = Weather::new(ThemeMode::Dark, TempUnit::Celsius);
        weather
            .update(Action::LocationResolved(LocationFix {
                city: "Busan".to_string(),
                ..LocationFix::fallback()
            }))
            .expect("update");
        assert!(render(&mut weather).contains("Busan"));
    }
}
