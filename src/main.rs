use anyhow::Result;

use pwa_icons::{config::GeneratorConfig, generator::generate};

fn main() -> Result<()> {
    env_logger::init();

    generate(&GeneratorConfig::default())?;

    Ok(())
}
