mod app;
mod cli;
mod footer;
mod logging;
mod navbar;
mod page;
mod viewport;

use std::io::stdout;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use folio_background::ParticleField;
use folio_config::{Config, ConfigError};

use crate::app::App;
use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", Config::default().to_toml_string()?);
        return Ok(());
    }

    logging::init(cli.log_file.clone().or_else(Config::log_path).as_deref());

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::load() {
            Err(ConfigError::NoConfigDir) => {
                log::warn!("no config directory available, using defaults");
                Config::default()
            }
            result => result?,
        },
    };
    cli.apply(&mut config);

    let field = match cli.seed {
        Some(seed) => ParticleField::with_seed(config.particles.clone(), seed),
        None => ParticleField::new(config.particles.clone()),
    };
    let app = App::new(config, field, !cli.no_particles);

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| app.run(terminal));
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
