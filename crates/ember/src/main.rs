use std::io;

use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ember_config::Config;
use ratatui::DefaultTerminal;

mod app;
mod logging;
mod viewport;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load().wrap_err("failed to load configuration")?;
    logging::init(&config)?;

    let terminal = ratatui::init();
    let result = run(terminal, &config);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, config: &Config) -> color_eyre::Result<()> {
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = terminal
        .size()
        .map_err(Into::into)
        .and_then(|size| App::new(config, size))
        .and_then(|app| app.run(terminal));
    execute!(io::stdout(), DisableMouseCapture)?;
    result
}
