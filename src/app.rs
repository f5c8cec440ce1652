use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use serde_json::json;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    clock::{self, ClockMode},
    components::{
        AnalogClock, Calendar, Component, CryptoTicker, DigitalClock, StatusBar, Weather,
    },
    config::Config,
    scheduler::Scheduler,
    services::crypto::CryptoService,
    services::location::{LocationFix, LocationService},
    services::weather::WeatherService,
    settings::SettingsStore,
    theme::ThemeMode,
    tui,
    weather::TempUnit,
};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);
const WEATHER_PERIOD: Duration = Duration::from_secs(600);
const CRYPTO_PERIOD: Duration = Duration::from_secs(30);
const ROTATE_PERIOD: Duration = Duration::from_secs(5);

const SLIDER_MIN: f64 = 50.0;
const SLIDER_MAX: f64 = 200.0;
const SLIDER_STEP: f64 = 10.0;

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub components: Vec<Box<dyn Component>>,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub last_tick_key_events: Vec<KeyEvent>,
    settings: SettingsStore,
    theme: ThemeMode,
    clock_mode: ClockMode,
    temp_unit: TempUnit,
    slider_value: f64,
    location: LocationFix,
    weather_service: WeatherService,
    crypto_service: CryptoService,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        let settings = SettingsStore::new();
        let theme = ThemeMode::from_setting(&settings.get_string("theme", "dark"));
        let clock_mode = ClockMode::from_setting(&settings.get_string("clock.mode", "analog"));
        let temp_unit = TempUnit::from_setting(&settings.get_string("weather.unit", "celsius"));
        let scale = settings.get_f64("clock.scale", 1.0);

        let components: Vec<Box<dyn Component>> = vec![
            Box::new(Weather::new(theme, temp_unit)),
            Box::new(AnalogClock::new(theme, clock_mode, scale)),
            Box::new(DigitalClock::new(theme, clock_mode, scale)),
            Box::new(Calendar::new(theme)),
            Box::new(CryptoTicker::new(theme)),
            Box::new(StatusBar::new()),
        ];

        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            components,
            should_quit: false,
            should_suspend: false,
            last_tick_key_events: Vec::new(),
            settings,
            theme,
            clock_mode,
            temp_unit,
            slider_value: scale * 100.0,
            location: LocationFix::fallback(),
            weather_service: WeatherService::new()?,
            crypto_service: CryptoService::new()?,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }

        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone())?;
        }

        for component in self.components.iter_mut() {
            component.init(tui.size()?)?;
        }

        let mut scheduler = Scheduler::new(action_tx.clone());
        scheduler.every("clock", CLOCK_PERIOD, Action::TickClock);
        scheduler.every("weather", WEATHER_PERIOD, Action::RefreshWeather);
        scheduler.every("crypto", CRYPTO_PERIOD, Action::RefreshCrypto);
        scheduler.every("rotate", ROTATE_PERIOD, Action::RotateCoin);

        // resolve the location once in the background; the weather widget
        // works off the Seoul fallback until this lands
        {
            let tx = action_tx.clone();
            let service = LocationService::new()?;
            tokio::spawn(async move {
                let fix = service.detect().await;
                let _ = tx.send(Action::LocationResolved(fix));
            });
        }

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        action_tx.send(Action::Key(key))?;

                        if let Some(action) = self.config.keybindings.get(&vec![key]) {
                            tracing::info!("Got action: {action:?}");
                            action_tx.send(action.clone())?;
                        } else {
                            // If the key was not handled as a single key action,
                            // then consider it for multi-key combinations.
                            self.last_tick_key_events.push(key);

                            if let Some(action) =
                                self.config.keybindings.get(&self.last_tick_key_events)
                            {
                                tracing::info!("Got action: {action:?}");
                                action_tx.send(action.clone())?;
                            }
                        }
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.handle_events(Some(e.clone()))? {
                        action_tx.send(action)?;
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    tracing::debug!("{action:?}");
                }
                match action {
                    Action::Tick => {
                        self.last_tick_key_events.drain(..);
                    }
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Resize(w, h) => {
                        self.settings.set("window.width", json!(w));
                        self.settings.set("window.height", json!(h));
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.draw(&mut tui, &action_tx)?;
                    }
                    Action::Render => {
                        self.draw(&mut tui, &action_tx)?;
                    }
                    Action::ToggleTheme => {
                        self.theme = self.theme.toggled();
                        self.settings.set("theme", json!(self.theme.as_setting()));
                        action_tx.send(Action::ThemeChanged(self.theme))?;
                        action_tx.send(Action::SystemMessage(format!("Theme: {}", self.theme)))?;
                    }
                    Action::ToggleClockMode => {
                        self.clock_mode = self.clock_mode.toggled();
                        self.settings
                            .set("clock.mode", json!(self.clock_mode.as_setting()));
                        action_tx.send(Action::ClockModeChanged(self.clock_mode))?;
                        action_tx
                            .send(Action::SystemMessage(format!("Clock: {}", self.clock_mode)))?;
                    }
                    Action::ToggleTempUnit => {
                        self.temp_unit = self.temp_unit.toggled();
                        self.settings
                            .set("weather.unit", json!(self.temp_unit.as_setting()));
                        action_tx.send(Action::TempUnitChanged(self.temp_unit))?;
                    }
                    Action::IncreaseClockSize => {
                        let factor = self.bump_slider(SLIDER_STEP);
                        action_tx.send(Action::ClockScaleChanged(factor))?;
                    }
                    Action::DecreaseClockSize => {
                        let factor = self.bump_slider(-SLIDER_STEP);
                        action_tx.send(Action::ClockScaleChanged(factor))?;
                    }
                    Action::Refresh => {
                        action_tx.send(Action::SystemMessage("Refreshing...".to_string()))?;
                        action_tx.send(Action::RefreshWeather)?;
                        action_tx.send(Action::RefreshCrypto)?;
                    }
                    Action::RefreshWeather => {
                        let tx = action_tx.clone();
                        let service = self.weather_service.clone();
                        let (lat, lon) = (self.location.latitude, self.location.longitude);
                        tokio::spawn(async move {
                            let weather = service.current_weather(lat, lon).await;
                            let _ = tx.send(Action::WeatherUpdated(weather));
                            let air = service.air_quality(lat, lon).await;
                            let _ = tx.send(Action::AirQualityUpdated(air));
                        });
                    }
                    Action::RefreshCrypto => {
                        let tx = action_tx.clone();
                        let service = self.crypto_service.clone();
                        tokio::spawn(async move {
                            let coins = service.coins().await;
                            let _ = tx.send(Action::CryptoUpdated(coins));
                        });
                    }
                    Action::LocationResolved(ref fix) => {
                        self.location = fix.clone();
                        self.settings.set("location.city", json!(fix.city));
                        self.settings.set("location.latitude", json!(fix.latitude));
                        self.settings
                            .set("location.longitude", json!(fix.longitude));
                        action_tx.send(Action::RefreshWeather)?;
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.update(action.clone())? {
                        action_tx.send(action)?;
                    }
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                scheduler.shutdown().await;
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn draw(
        &mut self,
        tui: &mut tui::Tui,
        action_tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        tui.draw(|f| {
            for component in self.components.iter_mut() {
                let r = component.draw(f, f.area());
                if let Err(e) = r {
                    let _ = action_tx.send(Action::Error(format!("Failed to draw: {e:?}")));
                }
            }
        })?;
        Ok(())
    }

    /// Step the size slider and persist the resulting scale factor.
    fn bump_slider(&mut self, delta: f64) -> f64 {
        self.slider_value = (self.slider_value + delta).clamp(SLIDER_MIN, SLIDER_MAX);
        let factor = clock::slider_scale(self.slider_value);
        self.settings.set("clock.scale", json!(factor));
        factor
    }
}
