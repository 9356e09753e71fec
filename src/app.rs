use crate::error::NavError;
use crate::io_adapters::Console;
use crate::menu::{MenuId, MenuTable, Transition};
use crate::navigator::MenuNavigator;
use tracing::{debug, info, warn};

/// Drives a menu tree until the user quits or input ends.
///
/// Starts at the main menu. Every submenu that is opened becomes the menu
/// "0" returns to.
pub struct App {
    navigator: MenuNavigator,
    menus: MenuTable,
    console: Console,
    /// Consecutive "0" answers given while no submenu was recorded.
    unanswered: u32,
}

impl App {
    pub fn new(navigator: MenuNavigator, menus: MenuTable, console: Console) -> Self {
        Self {
            navigator,
            menus,
            console,
            unanswered: 0,
        }
    }

    pub fn navigator(&self) -> &MenuNavigator {
        &self.navigator
    }

    pub fn run(&mut self) -> Result<(), NavError> {
        let mut next = Transition::Main;
        loop {
            let step = match next {
                Transition::Open(id) => self.open(id),
                Transition::Main => self.open(MenuId::MAIN),
                Transition::Back => self.back(),
                Transition::Quit => break,
            };
            next = match step {
                Ok(t) => t,
                Err(NavError::InputClosed) => {
                    info!("input closed, leaving");
                    break;
                }
                Err(e) => return Err(e),
            };
        }
        Ok(())
    }

    fn open(&mut self, id: MenuId) -> Result<Transition, NavError> {
        if !self.menus.contains(id) {
            return Err(NavError::UnknownMenu(id));
        }
        if !id.is_main() {
            self.navigator.enter_submenu(id);
        }
        self.menus.invoke(id, &mut self.console)
    }

    fn back(&mut self) -> Result<Transition, NavError> {
        match self
            .navigator
            .return_to_previous(&mut self.console, &mut self.menus)
        {
            Err(NavError::NoPreviousMenu) => {
                self.unanswered += 1;
                let limit = self.navigator.config().max_attempts;
                if limit.is_some_and(|max| self.unanswered >= max.get()) {
                    warn!(attempts = self.unanswered, "no previous menu, giving up");
                    return Err(NavError::AttemptsExhausted {
                        attempts: self.unanswered,
                    });
                }
                debug!(attempts = self.unanswered, "no previous menu, asking again");
                self.console.say("There is no previous menu yet.")?;
                Ok(Transition::Back)
            }
            other => {
                self.unanswered = 0;
                other
            }
        }
    }
}
