use std::io::IsTerminal;

use anyhow::Context;

use stockroom_cli::{Config, Menu, Terminal};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    stockroom_observability::init(config.log_format);

    let color = config.color_enabled(std::io::stdout().is_terminal());
    colored::control::set_override(color);
    tracing::debug!(?config, color, "starting session");

    let mut menu = Menu::new(Terminal::stdio(color));
    menu.run().context("console session failed")?;

    tracing::info!(products = menu.inventory().len(), "session ended");
    Ok(())
}
