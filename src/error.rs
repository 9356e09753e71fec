use crate::menu::MenuId;
use thiserror::Error;

/// Errors produced while navigating between menus.
#[derive(Error, Debug)]
pub enum NavError {
    /// "0" was chosen before any submenu was entered.
    #[error("no previous menu to return to")]
    NoPreviousMenu,

    /// The id is not registered in the menu table.
    #[error("unknown menu: {0}")]
    UnknownMenu(MenuId),

    /// Too many lines that were neither "0" nor "m".
    #[error("no valid choice after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    /// Input stream reached end of file or was interrupted.
    #[error("input closed")]
    InputClosed,

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A menu handler failed.
    #[error(transparent)]
    Menu(#[from] anyhow::Error),
}
