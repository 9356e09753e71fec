use anyhow::Result;
use menu_nav::config::Args;
use menu_nav::{App, Console, MenuNavigator, NavConfig, demo};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    let config = NavConfig::from(args);
    tracing::debug!(?config, "starting");

    let mut app = App::new(MenuNavigator::new(config), demo::menus(), Console::stdio()?);
    app.run()?;
    Ok(())
}
