//! Console menu navigation with a "go back" prompt.
//!
//! A [`MenuNavigator`] remembers the last submenu the user entered. When a
//! submenu is done, the navigator asks the user to type `0` to go back to that
//! submenu or `M` to go to the main menu, and then runs the chosen menu's
//! handler from a [`MenuTable`].
//!
//! [`App`] wires the pieces into a loop over [`Transition`]s, and the
//! [`io_adapters`] module provides the terminal and in-memory consoles menus
//! talk to.

mod app;
pub mod config;
pub mod demo;
mod error;
pub mod io_adapters;
mod menu;
mod navigator;

pub use app::App;
pub use config::NavConfig;
pub use error::NavError;
pub use io_adapters::Console;
pub use menu::{MenuHandler, MenuId, MenuTable, Transition};
pub use navigator::{MenuNavigator, Sentinel};
