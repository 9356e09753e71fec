use crate::error::NavError;
use crate::io_adapters::Console;
use anyhow::Result;
use std::collections::HashMap;
use std::fmt;

/// Identifier of a menu handler.
///
/// Menus are addressed by name through a [`MenuTable`] instead of by
/// function reference, so the navigator can store one cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(&'static str);

impl MenuId {
    /// The root menu every table contains.
    pub const MAIN: MenuId = MenuId("main");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }

    pub fn is_main(&self) -> bool {
        *self == Self::MAIN
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// What a menu asks the application to do once it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Enter the given menu.
    Open(MenuId),
    /// Ask the user whether to go back to the previous menu or to the main menu.
    Back,
    /// Go straight to the main menu.
    Main,
    /// Leave the application.
    Quit,
}

/// A menu screen.
///
/// A blanket implementation exists for closures, so most menus are plain
/// `FnMut(&mut Console) -> Result<Transition>` values.
pub trait MenuHandler {
    /// Render the menu, talk to the user and pick the next step.
    fn run(&mut self, console: &mut Console) -> Result<Transition>;
}

impl<F> MenuHandler for F
where
    F: FnMut(&mut Console) -> Result<Transition>,
{
    fn run(&mut self, console: &mut Console) -> Result<Transition> {
        self(console)
    }
}

/// Table mapping menu ids to their handlers.
///
/// The main menu handler is fixed at construction and always present.
pub struct MenuTable {
    handlers: HashMap<MenuId, Box<dyn MenuHandler>>,
}

impl MenuTable {
    pub fn new(main: impl MenuHandler + 'static) -> Self {
        let mut handlers: HashMap<MenuId, Box<dyn MenuHandler>> = HashMap::new();
        handlers.insert(MenuId::MAIN, Box::new(main));
        Self { handlers }
    }

    /// Add or replace the handler for `id`. Returns true when one was replaced.
    pub fn register(&mut self, id: MenuId, handler: impl MenuHandler + 'static) -> bool {
        self.handlers.insert(id, Box::new(handler)).is_some()
    }

    pub fn contains(&self, id: MenuId) -> bool {
        self.handlers.contains_key(&id)
    }

    /// Run the handler for `id` once.
    pub fn invoke(&mut self, id: MenuId, console: &mut Console) -> Result<Transition, NavError> {
        let handler = self
            .handlers
            .get_mut(&id)
            .ok_or(NavError::UnknownMenu(id))?;
        tracing::debug!(menu = %id, "invoking menu handler");
        Ok(handler.run(console)?)
    }
}
