use crate::config::NavConfig;
use crate::error::NavError;
use crate::io_adapters::Console;
use crate::menu::{MenuId, MenuTable, Transition};
use tracing::{debug, warn};

/// Navigation command typed at the "go back" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// "0": re-enter the last submenu.
    Previous,
    /// "m" or "M": go to the main menu.
    Main,
}

impl Sentinel {
    /// Recognize a sentinel line. Anything else, including padded forms such
    /// as `" 0"`, is not a sentinel.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "0" => Some(Sentinel::Previous),
            l if l.eq_ignore_ascii_case("m") => Some(Sentinel::Main),
            _ => None,
        }
    }
}

/// Remembers the last submenu entered and brings the user back to it.
///
/// Example
/// ```
/// use menu_nav::{Console, MenuId, MenuNavigator, MenuTable, Transition};
///
/// let settings = MenuId::new("settings");
/// let mut menus = MenuTable::new(|_: &mut Console| anyhow::Ok(Transition::Quit));
/// menus.register(settings, |c: &mut Console| -> anyhow::Result<Transition> {
///     c.say("Settings")?;
///     Ok(Transition::Back)
/// });
///
/// let mut nav = MenuNavigator::default();
/// nav.enter_submenu(settings);
///
/// let (mut console, out) = Console::scripted("x\n0\n");
/// let next = nav.return_to_previous(&mut console, &mut menus).unwrap();
/// assert_eq!(next, Transition::Back);
/// assert!(out.contents().ends_with("Settings\n"));
/// ```
#[derive(Debug, Default)]
pub struct MenuNavigator {
    previous_menu: Option<MenuId>,
    config: NavConfig,
}

impl MenuNavigator {
    pub fn new(config: NavConfig) -> Self {
        Self {
            previous_menu: None,
            config,
        }
    }

    /// Record `menu_id` as the menu to come back to, replacing any earlier one.
    pub fn enter_submenu(&mut self, menu_id: MenuId) {
        if let Some(old) = self.previous_menu.replace(menu_id) {
            debug!(from = %old, to = %menu_id, "previous menu overwritten");
        } else {
            debug!(menu = %menu_id, "previous menu recorded");
        }
    }

    pub fn previous_menu(&self) -> Option<MenuId> {
        self.previous_menu
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Prompt until the user types a sentinel.
    ///
    /// Fails with [`NavError::AttemptsExhausted`] once the configured number of
    /// invalid lines is reached, and with [`NavError::InputClosed`] when input
    /// ends first.
    pub fn await_choice(&self, console: &mut Console) -> Result<Sentinel, NavError> {
        let mut invalid = 0u32;
        loop {
            let line = console
                .prompt(&self.config.prompt)?
                .ok_or(NavError::InputClosed)?;

            if let Some(choice) = Sentinel::parse(&line) {
                debug!(?choice, "navigation choice");
                return Ok(choice);
            }

            invalid += 1;
            debug!(input = %line, invalid, "not a navigation choice");
            if self.config.max_attempts.is_some_and(|max| invalid >= max.get()) {
                warn!(attempts = invalid, "giving up on navigation prompt");
                return Err(NavError::AttemptsExhausted { attempts: invalid });
            }
        }
    }

    /// Ask the user where to go and run that menu's handler once.
    ///
    /// "0" runs the handler of the recorded previous menu, or fails with
    /// [`NavError::NoPreviousMenu`] if no submenu was entered yet. "m"/"M"
    /// runs the main menu handler.
    pub fn return_to_previous(
        &self,
        console: &mut Console,
        menus: &mut MenuTable,
    ) -> Result<Transition, NavError> {
        let target = match self.await_choice(console)? {
            Sentinel::Previous => self.previous_menu.ok_or(NavError::NoPreviousMenu)?,
            Sentinel::Main => MenuId::MAIN,
        };
        menus.invoke(target, console)
    }
}
