//! The small menu tree the `menu_nav` binary runs.

use crate::io_adapters::Console;
use crate::menu::{MenuId, MenuTable, Transition};
use anyhow::Result;

pub const SETTINGS: MenuId = MenuId::new("settings");
pub const PROFILE: MenuId = MenuId::new("profile");

/// Lists the submenus and asks until a known option (or end of input) arrives.
/// Surrounding whitespace is ignored here, unlike at the navigation prompt.
fn main_menu(console: &mut Console) -> Result<Transition> {
    console.say("\n== Main menu ==\n 1) Settings\n 2) Profile\n q) Quit")?;
    loop {
        let Some(choice) = console.prompt("> ")? else {
            return Ok(Transition::Quit);
        };
        match choice.trim() {
            "1" => return Ok(Transition::Open(SETTINGS)),
            "2" => return Ok(Transition::Open(PROFILE)),
            "q" | "Q" => return Ok(Transition::Quit),
            other => console.say(&format!("Unknown option: {other}"))?,
        }
    }
}

fn settings_menu(console: &mut Console) -> Result<Transition> {
    console.say("\n== Settings ==\n Theme: dark\n Language: en")?;
    Ok(Transition::Back)
}

fn profile_menu(console: &mut Console) -> Result<Transition> {
    console.say("\n== Profile ==\n Name: Bob\n Age: 50")?;
    Ok(Transition::Back)
}

/// Main menu with a settings and a profile submenu.
pub fn menus() -> MenuTable {
    let mut menus = MenuTable::new(main_menu);
    menus.register(SETTINGS, settings_menu);
    menus.register(PROFILE, profile_menu);
    menus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{App, MenuNavigator, NavConfig};

    #[test]
    fn test_main_menu_trims_choice() {
        let mut table = menus();
        let (mut console, _out) = Console::scripted("  2 \n");

        let next = table.invoke(MenuId::MAIN, &mut console).unwrap();
        assert_eq!(next, Transition::Open(PROFILE));
    }

    #[test]
    fn test_main_menu_reports_unknown_option() {
        let mut table = menus();
        let (mut console, out) = Console::scripted("7\nQ\n");

        let next = table.invoke(MenuId::MAIN, &mut console).unwrap();

        assert_eq!(next, Transition::Quit);
        assert!(out.contents().contains("Unknown option: 7\n"));
    }

    #[test]
    fn test_main_menu_quits_at_end_of_input() {
        let mut table = menus();
        let (mut console, _out) = Console::scripted("");

        let next = table.invoke(MenuId::MAIN, &mut console).unwrap();
        assert_eq!(next, Transition::Quit);
    }

    #[test]
    fn test_submenus_ask_to_go_back() {
        let mut table = menus();
        let (mut console, out) = Console::scripted("");

        assert_eq!(table.invoke(SETTINGS, &mut console).unwrap(), Transition::Back);
        assert_eq!(table.invoke(PROFILE, &mut console).unwrap(), Transition::Back);

        let text = out.contents();
        assert!(text.contains("== Settings =="));
        assert!(text.contains("== Profile =="));
    }

    #[test]
    fn test_session_returns_to_profile() {
        let (console, out) = Console::scripted("2\n0\nm\nq\n");
        let mut app = App::new(MenuNavigator::new(NavConfig::default()), menus(), console);

        app.run().unwrap();

        assert_eq!(app.navigator().previous_menu(), Some(PROFILE));
        assert_eq!(out.contents().matches("== Profile ==").count(), 2);
        assert_eq!(out.contents().matches("== Main menu ==").count(), 2);
    }
}
