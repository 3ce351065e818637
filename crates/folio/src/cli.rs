use std::path::PathBuf;

use clap::Parser;
use folio_config::Config;
use folio_core::MAX_PARTICLE_COUNT;

/// A personal portfolio page for the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Config file to use instead of the one in the platform config dir.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the particle field (random if omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of particles.
    #[arg(long, value_name = "N", value_parser = parse_count)]
    pub particles: Option<usize>,

    /// Start with the particle background turned off.
    #[arg(long)]
    pub no_particles: bool,

    /// Log file (defaults to folio.log in the platform data dir).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(count) = self.particles {
            config.particles.count = count;
        }
    }
}

/// Particle count within `0..=MAX_PARTICLE_COUNT`.
fn parse_count(value: &str) -> Result<usize, String> {
    let count: usize = value.parse().map_err(|e| format!("{}", e))?;
    if count > MAX_PARTICLE_COUNT {
        return Err(format!("must be at most {}", MAX_PARTICLE_COUNT));
    }
    Ok(count)
}
