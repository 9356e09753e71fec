use argh::FromArgs;
use std::num::NonZeroU32;

/// Prompt shown while waiting for a navigation choice.
pub const DEFAULT_PROMPT: &str = "Enter 0 to return to previous menu or M to return to main menu";

/// Invalid lines tolerated before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Settings of a [`MenuNavigator`](crate::MenuNavigator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Text shown before every read of a navigation choice.
    pub prompt: String,
    /// Number of invalid lines accepted before the prompt gives up.
    /// `None` keeps asking until input ends.
    pub max_attempts: Option<NonZeroU32>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            max_attempts: NonZeroU32::new(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

#[derive(FromArgs, Debug)]
/// Browse a small console menu tree. Inside a submenu, enter 0 to go back to
/// it or M to go to the main menu.
pub struct Args {
    #[argh(option, default = "DEFAULT_MAX_ATTEMPTS")]
    /// invalid answers accepted before giving up; 0 asks forever.
    pub max_attempts: u32,

    #[argh(option)]
    /// replace the navigation prompt text.
    pub prompt: Option<String>,
}

impl From<Args> for NavConfig {
    fn from(args: Args) -> Self {
        let defaults = NavConfig::default();
        Self {
            prompt: args.prompt.unwrap_or(defaults.prompt),
            max_attempts: NonZeroU32::new(args.max_attempts),
        }
    }
}
