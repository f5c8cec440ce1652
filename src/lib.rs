//! # Deskdash
//!
//! A terminal dashboard showing a clock (analog or digital), a month
//! calendar, current weather with air quality, and a rotating
//! cryptocurrency ticker.
//!
//! The crate follows a component architecture: [`app::App`] owns a list of
//! [`components::Component`]s and pumps [`action::Action`]s between them over
//! an unbounded channel. Periodic work (clock ticks, data refreshes) comes
//! from named [`scheduler::Scheduler`] tasks, network fetches run on spawned
//! tasks and report back through the same channel.

#![allow(dead_code)]

pub mod action;
pub mod app;
pub mod cli;
pub mod clock;
pub mod components;
pub mod config;
pub mod scheduler;
pub mod services;
pub mod settings;
pub mod theme;
pub mod tui;
pub mod utils;
pub mod weather;
