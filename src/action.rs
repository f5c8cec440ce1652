use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    clock::ClockMode,
    services::crypto::Coin,
    services::location::LocationFix,
    services::weather::{AirQuality, CurrentWeather},
    theme::ThemeMode,
    weather::TempUnit,
};

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Key(KeyEvent),
    // user preferences
    ToggleTheme,
    ToggleClockMode,
    ToggleTempUnit,
    IncreaseClockSize,
    DecreaseClockSize,
    ThemeChanged(ThemeMode),
    ClockModeChanged(ClockMode),
    TempUnitChanged(TempUnit),
    ClockScaleChanged(f64),
    // scheduler ticks
    TickClock,
    RefreshWeather,
    RefreshCrypto,
    RotateCoin,
    // fetch results; `None` means the fetch failed and the widget shows placeholders
    LocationResolved(LocationFix),
    WeatherUpdated(Option<CurrentWeather>),
    AirQualityUpdated(Option<AirQuality>),
    CryptoUpdated(Option<Vec<Coin>>),
    SystemMessage(String),
}
